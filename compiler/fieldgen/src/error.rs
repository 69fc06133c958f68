//! Driver errors.

use std::path::PathBuf;

use fieldgen_parse::FieldParseError;

/// Anything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] FieldParseError),

    /// A `tag` argument that is neither a tag name nor a value in range.
    #[error("unknown field type `{0}`")]
    UnknownFieldType(String),

    /// Array dimensions that are not `N`, or `NxMx...` with every part a number.
    #[error("bad array dimensions `{0}`")]
    BadDimensions(String),

    #[error("unknown or malformed flag `{0}`")]
    BadFlag(String),

    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Wrong number of positional arguments.
    #[error("usage: {0}")]
    Usage(&'static str),
}
