//! Error types for trailmap operations.

use thiserror::Error;

/// Errors that can occur while locating or resolving outline sections.
///
/// Irregular markup inside a list (missing anchors, missing attributes,
/// empty text) is never an error; it degrades to empty values instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no anchor named '{0}' in document")]
    AnchorNotFound(String),

    #[error("section '{0}' has no content list")]
    SectionListMissing(String),

    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    #[error("missing required element: {0}")]
    MissingElement(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
