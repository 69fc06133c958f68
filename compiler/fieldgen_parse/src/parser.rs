//! The string-path pipeline and the parser handle tying both paths together.

use fieldgen_ir::{FieldDescriptor, FieldType};
use tracing::debug;

use crate::bitfield::{bitfield_width, BitfieldTypePolicy, SmallestUnsigned};
use crate::enum_path::{describe_field_type, describe_raw_field_type};
use crate::normalize::{looks_generic, resolve_alias, strip_whitespace};
use crate::template::parse_template;
use crate::{FieldParseError, ParseOptions};

/// A configured field parser.
///
/// Holds only configuration; every call builds a fresh descriptor, so one
/// parser can be shared across threads when the policy allows it.
#[derive(Clone, Debug, Default)]
pub struct FieldParser<P = SmallestUnsigned> {
    options: ParseOptions,
    bitfield_policy: P,
}

impl FieldParser {
    /// A parser with default options and the `SmallestUnsigned` bitfield policy.
    pub fn new() -> Self {
        FieldParser::default()
    }
}

impl<P: BitfieldTypePolicy> FieldParser<P> {
    /// Replace the parse options.
    #[must_use]
    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the bitfield type policy.
    pub fn with_bitfield_policy<Q: BitfieldTypePolicy>(self, bitfield_policy: Q) -> FieldParser<Q> {
        FieldParser {
            options: self.options,
            bitfield_policy,
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a schema type string.
    ///
    /// Runs, in order: bitfield detection, whitespace removal, whole-string
    /// alias substitution, and (for generic types) template parsing with the
    /// canonical type rebuilt from the tree.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn parse(
        &self,
        type_name: &str,
        field_name: &str,
        array_sizes: &[usize],
    ) -> Result<FieldDescriptor, FieldParseError> {
        let mut field = FieldDescriptor::with_dimensions(field_name, array_sizes);
        self.apply_bitfield(&mut field, type_name)?;
        self.apply_type(&mut field, type_name)?;
        Ok(field)
    }

    /// Describe a datamap field from its tag. Never fails.
    pub fn parse_field_type(&self, tag: FieldType, field_name: &str, array_size: usize) -> FieldDescriptor {
        describe_field_type(tag, field_name, array_size)
    }

    /// Describe a datamap field from its raw tag byte. Never fails.
    pub fn parse_raw_field_type(&self, raw: u8, field_name: &str, array_size: usize) -> FieldDescriptor {
        describe_raw_field_type(raw, field_name, array_size)
    }

    fn apply_bitfield(&self, field: &mut FieldDescriptor, type_name: &str) -> Result<(), FieldParseError> {
        let Some(width) = bitfield_width(type_name)? else {
            return Ok(());
        };

        let declared = self
            .bitfield_policy
            .type_for_width(width)
            .ok_or_else(|| FieldParseError::BitfieldTooWide {
                type_name: type_name.to_owned(),
                width,
            })?;

        debug!(field = %field.name, width, declared, "bitfield");
        field.bitfield_width = Some(width);
        field.canonical_type = declared.to_owned();
        Ok(())
    }

    fn apply_type(&self, field: &mut FieldDescriptor, type_name: &str) -> Result<(), FieldParseError> {
        let source = if field.canonical_type.is_empty() {
            type_name
        } else {
            field.canonical_type.as_str()
        };
        let normalized = resolve_alias(&strip_whitespace(source));

        // Strict mode hands any bracket to the template parser so a lone `<`
        // or `>` is reported; lenient mode keeps the textual check.
        let generic = if self.options.is_strict() {
            normalized.contains(['<', '>'])
        } else {
            looks_generic(&normalized)
        };
        if !generic {
            field.canonical_type = normalized;
            return Ok(());
        }

        let tree = parse_template(&normalized, &self.options)?;
        let canonical = tree.to_string();
        debug!(field = %field.name, from = %normalized, to = %canonical, "rebuilt template type");
        field.canonical_type = canonical;
        field.template_info = Some(tree);
        Ok(())
    }
}
