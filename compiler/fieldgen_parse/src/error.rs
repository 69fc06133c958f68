//! Field parse errors.
//!
//! Every variant carries the type string it was raised for so callers can
//! report the offending schema entry without keeping the input around.

use std::fmt;

/// What was wrong with a generic instantiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenericErrorKind {
    /// No `<` where an instantiation was expected.
    ExpectedOpenBracket,
    /// Input ended before a `<` was closed.
    UnclosedBracket,
    /// A `>` with no matching `<`.
    UnexpectedClose,
    /// A `,` outside any argument list.
    UnexpectedSeparator,
    /// An argument slot with nothing in it (`A<>`, `A<b,,c>`, `A<b,>`).
    EmptyArgument,
    /// A `<` with no generic name in front of it.
    MissingTypeName,
    /// Text after a closed instantiation that is neither `,`, `>`, nor a single `*`.
    TrailingInput,
    /// Nesting deeper than the configured limit.
    TooDeep { limit: usize },
}

impl fmt::Display for GenericErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedOpenBracket => f.write_str("expected `<`"),
            Self::UnclosedBracket => f.write_str("unclosed `<`"),
            Self::UnexpectedClose => f.write_str("unmatched `>`"),
            Self::UnexpectedSeparator => f.write_str("`,` outside of a template argument list"),
            Self::EmptyArgument => f.write_str("empty template argument"),
            Self::MissingTypeName => f.write_str("`<` without a template name"),
            Self::TrailingInput => f.write_str("unexpected text after `>`"),
            Self::TooDeep { limit } => write!(f, "template nesting exceeds {limit} levels"),
        }
    }
}

/// A fatal error from the string path.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    /// The text after the bitfield prefix is not a decimal integer.
    #[error("malformed bitfield width `{width}` in `{type_name}`")]
    MalformedBitfieldWidth { type_name: String, width: String },

    /// No integer type is wide enough for the requested bit count.
    #[error("no integer type holds a {width}-bit bitfield (`{type_name}`)")]
    BitfieldTooWide { type_name: String, width: usize },

    /// The generic instantiation could not be parsed.
    ///
    /// `type_name` is the whitespace-free string the parser saw; `offset` is
    /// a byte index into it.
    #[error("malformed generic type `{type_name}` at byte {offset}: {kind}")]
    MalformedGeneric {
        type_name: String,
        offset: usize,
        kind: GenericErrorKind,
    },
}

impl FieldParseError {
    /// The type string the error was raised for.
    pub fn type_name(&self) -> &str {
        match self {
            Self::MalformedBitfieldWidth { type_name, .. }
            | Self::BitfieldTooWide { type_name, .. }
            | Self::MalformedGeneric { type_name, .. } => type_name,
        }
    }

    /// The generic syntax error kind, if this is one.
    pub fn generic_kind(&self) -> Option<GenericErrorKind> {
        match self {
            Self::MalformedGeneric { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
