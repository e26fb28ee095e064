//! Command-line interface for gist.
//!
//! Each subcommand maps to a single remote gist operation; this layer
//! owns argument shapes and local I/O (reading files, stdin, and the
//! editor, and the encryption pass-through).

/// Individual CLI command implementations.
pub mod commands;

/// Output formatting utilities.
pub mod format;
