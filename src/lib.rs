//! gist - a command line client for GitHub gists
//!
//! Provides listing, creating, editing, forking, deleting, and archiving
//! of gists, plus optional gpg encryption of gist content.

pub mod api;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod editor;
pub mod vcs;
