//! GitHub gist API layer.
//!
//! Provides the `GistClient` for talking to the gist endpoints, the data
//! model for gist records, and the link-header pagination walker.
//!
//! # Submodules
//!
//! - `client` - HTTP client with one method per gist operation
//! - `models` - gist records and local file assembly
//! - `pagination` - `link` response header parsing

pub mod client;
pub mod models;
pub mod pagination;

pub use client::GistClient;
pub use models::{FileInfo, GistDetail, GistFile, GistList, GistSummary};

/// Base URL of the GitHub API.
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Page size requested from paginated endpoints (the API maximum).
pub const PAGE_SIZE: u32 = 100;

/// Errors raised by gist API operations.
#[derive(Debug, thiserror::Error)]
pub enum GistError {
    /// Network-level failure while sending a request.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Local filesystem failure while writing an archive.
    #[error("archive write failed: {0}")]
    Io(#[from] std::io::Error),
}
