//! Crate-level error types.

use std::fmt;

use crate::gpu::render_context::RenderContextError;

/// Errors produced by the vitae crate.
///
/// None of these ever reach the reader of the page: the site logs them and
/// carries on without the decoration or animation that failed.
#[derive(Debug)]
pub enum VitaeError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Resume content document failed to parse.
    ContentParse(String),
    /// A browser API call failed or a required DOM node was missing.
    Dom(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for VitaeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ContentParse(msg) => {
                write!(f, "resume content parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for VitaeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RenderContextError> for VitaeError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for VitaeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
