//! HTTP client for the gist API.
//!
//! Provides the `GistClient`, which holds the access token and base URL
//! and exposes one method per remote gist operation. Every request is
//! built through `request()`, so auth and the standard headers are
//! applied uniformly; nothing touches the network until the request is
//! sent.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use flate2::{write::GzEncoder, Compression};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{header, Method};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::models::{GistDetail, GistList, GistSummary};
use super::{GistError, GITHUB_API_URL, PAGE_SIZE};

/// Client for the gist endpoints.
pub struct GistClient {
    /// HTTP client instance.
    client: Client,
    /// Base URL of the API.
    base_url: String,
    /// Personal access token used on every request.
    token: String,
}

impl GistClient {
    /// Creates a client against the public GitHub API.
    pub fn new(token: &str) -> Self {
        Self::with_url(GITHUB_API_URL, token)
    }

    /// Creates a client against a custom base URL.
    pub fn with_url(base_url: &str, token: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// Returns the configured base URL.
    #[allow(dead_code)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a request builder for the gists resource, pre-populated
    /// with the auth token and standard headers.
    ///
    /// `stem` addresses a specific gist or sub-resource (e.g. `"abc123"`
    /// or `"abc123/forks"`); an empty stem targets the collection itself.
    fn request(&self, method: Method, stem: &str) -> RequestBuilder {
        let url = if stem.is_empty() {
            format!("{}/gists", self.base_url)
        } else {
            format!("{}/gists/{}", self.base_url, stem)
        };
        self.decorate(self.client.request(method, url))
    }

    /// Applies auth and standard headers to an arbitrary request builder.
    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .header(header::ACCEPT_ENCODING, "identity, deflate, compress, gzip")
            .header(
                header::USER_AGENT,
                concat!("gist-cli/", env!("CARGO_PKG_VERSION")),
            )
    }

    /// Sends a prepared request and checks for a success status.
    fn send(&self, builder: RequestBuilder) -> Result<Response, GistError> {
        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(GistError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Fetches the complete collection of the caller's gists.
    ///
    /// Walks the paginated list endpoint following `rel="next"` links
    /// until none remains. Elements missing expected keys are skipped.
    /// A transport or decode failure at any page boundary ends the walk
    /// and returns the records accumulated so far with `truncated` set,
    /// never an error.
    pub fn list(&self) -> GistList {
        let mut gists: Vec<GistSummary> = Vec::new();
        let mut url = Some(format!("{}/gists?per_page={}", self.base_url, PAGE_SIZE));

        while let Some(page_url) = url.take() {
            debug!(url = %page_url, "fetching gist page");

            let response = match self.send(self.decorate(self.client.get(&page_url))) {
                Ok(response) => response,
                Err(e) => {
                    warn!("gist list ended early: {e}");
                    return GistList {
                        gists,
                        truncated: true,
                    };
                }
            };

            let next = response
                .headers()
                .get(header::LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(super::pagination::next_url);

            let page: Vec<Value> = match response.json() {
                Ok(page) => page,
                Err(e) => {
                    warn!("gist list ended early: {e}");
                    return GistList {
                        gists,
                        truncated: true,
                    };
                }
            };

            gists.extend(page.iter().filter_map(GistSummary::from_value));
            url = next;
        }

        GistList {
            gists,
            truncated: false,
        }
    }

    /// Creates a new gist and returns its canonical URL.
    ///
    /// The caller guarantees every file carries non-empty content.
    pub fn create(
        &self,
        description: &str,
        files: &BTreeMap<String, String>,
        public: bool,
    ) -> Result<String, GistError> {
        let payload = CreateRequest {
            description,
            public,
            files: files
                .iter()
                .map(|(name, content)| (name.as_str(), FilePayload { content }))
                .collect(),
        };

        let response = self.send(self.request(Method::POST, "").json(&payload))?;
        let body: CanonicalUrl = response.json()?;
        Ok(body.html_url)
    }

    /// Deletes a gist. Success is the absence of an error.
    pub fn delete(&self, id: &str) -> Result<(), GistError> {
        self.send(self.request(Method::DELETE, id))?;
        Ok(())
    }

    /// Returns the raw JSON resource for a gist.
    pub fn info(&self, id: &str) -> Result<Value, GistError> {
        let response = self.send(self.request(Method::GET, id))?;
        Ok(response.json()?)
    }

    /// Returns the decoded gist resource.
    pub fn detail(&self, id: &str) -> Result<GistDetail, GistError> {
        let response = self.send(self.request(Method::GET, id))?;
        Ok(response.json()?)
    }

    /// Returns the filenames present in a gist.
    pub fn files(&self, id: &str) -> Result<Vec<String>, GistError> {
        let detail = self.detail(id)?;
        Ok(detail.files.into_keys().collect())
    }

    /// Returns a mapping from filename to decoded text content.
    pub fn content(&self, id: &str) -> Result<BTreeMap<String, String>, GistError> {
        let detail = self.detail(id)?;
        Ok(detail
            .files
            .iter()
            .map(|(name, file)| (name.clone(), file.decoded()))
            .collect())
    }

    /// Forks a gist and returns the new resource.
    pub fn fork(&self, id: &str) -> Result<Value, GistError> {
        let stem = format!("{id}/forks");
        let response = self.send(self.request(Method::POST, &stem))?;
        Ok(response.json()?)
    }

    /// Updates a gist description and returns the canonical URL.
    pub fn description(&self, id: &str, description: &str) -> Result<String, GistError> {
        let payload = UpdateRequest { description };
        let response = self.send(self.request(Method::PATCH, id).json(&payload))?;
        let body: CanonicalUrl = response.json()?;
        Ok(body.html_url)
    }

    /// Downloads a gist into `<dir>/<id>.tar.gz` and returns the path.
    pub fn archive(&self, id: &str, dir: &Path) -> Result<PathBuf, GistError> {
        let detail = self.detail(id)?;

        let path = dir.join(format!("{id}.tar.gz"));
        let encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        for (name, file) in &detail.files {
            let data = file.decoded();
            let mut header = tar::Header::new_gnu();
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
            builder.append_data(&mut header, name, data.as_bytes())?;
        }

        builder.into_inner()?.finish()?;
        Ok(path)
    }
}

// ==================== API Types ====================

/// Request payload for creating a gist.
#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    description: &'a str,
    public: bool,
    files: BTreeMap<&'a str, FilePayload<'a>>,
}

/// One file entry in a create request.
#[derive(Debug, Serialize)]
struct FilePayload<'a> {
    content: &'a str,
}

/// Request payload for updating a gist description.
#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    description: &'a str,
}

/// Response fragment carrying a gist's canonical URL.
#[derive(Debug, Deserialize)]
struct CanonicalUrl {
    html_url: String,
}
