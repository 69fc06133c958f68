//! Command handlers for the fieldgen CLI.
//!
//! Each submodule implements one command. Handlers return rendered lines and
//! never print; `main` decides where output goes.

mod batch;
mod parse;
mod tag;

pub use batch::{parse_batch, run_batch, BatchReport, LineFailure};
pub use parse::parse_type;
pub use tag::describe_tag;

use crate::CommandError;

/// Parse an array dimension argument: `4`, or `4x2` for nested arrays.
///
/// Every dimension must be a positive integer.
pub(crate) fn parse_dimensions(text: &str) -> Result<Vec<usize>, CommandError> {
    text.split('x')
        .map(|part| {
            part.trim()
                .parse::<usize>()
                .ok()
                .filter(|&dim| dim > 0)
                .ok_or_else(|| CommandError::BadDimensions(text.to_owned()))
        })
        .collect()
}
