//! Parser configuration.

/// How the template parser treats malformed generic syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GenericSyntax {
    /// Reject unbalanced brackets, empty arguments and stray text with
    /// [`FieldParseError::MalformedGeneric`](crate::FieldParseError::MalformedGeneric).
    #[default]
    Strict,
    /// Best-effort recovery: close unclosed brackets at end of input, skip
    /// empty arguments and ignore stray text. Never fails except on depth.
    Lenient,
}

/// Options for the string path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Malformed generic handling.
    pub generic_syntax: GenericSyntax,
    /// Maximum template nesting depth; the outermost instantiation is depth 1.
    pub max_template_depth: usize,
}

impl ParseOptions {
    /// Default nesting limit. Real schema types rarely exceed 4.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Options with lenient generic handling.
    pub fn lenient() -> Self {
        ParseOptions {
            generic_syntax: GenericSyntax::Lenient,
            ..ParseOptions::default()
        }
    }

    #[inline]
    pub fn is_strict(&self) -> bool {
        self.generic_syntax == GenericSyntax::Strict
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            generic_syntax: GenericSyntax::Strict,
            max_template_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
