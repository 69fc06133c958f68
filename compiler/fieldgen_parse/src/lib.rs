//! Field type parser.
//!
//! Turns what a schema or datamap dump says about a field into a
//! [`FieldDescriptor`] a code emitter can write out directly.
//!
//! # Entry Points
//!
//! ```text
//! "CUtlVector< CHandle< CBaseEntity > >" ──► parse() ──────────────┐
//!     bitfield detector ─► whitespace strip ─► alias table           │
//!     ─► template parser (recursive) ─► canonical rebuild            ├─► FieldDescriptor
//!                                                                    │
//! FieldType::Boolean ──────────────────────► parse_field_type() ────┘
//!     static tag table, no recursion
//! ```
//!
//! Both paths are pure: no shared mutable state, so any number of parses may
//! run in parallel. The only shared data are the two static tables.
//!
//! # Errors
//!
//! The string path fails on a malformed bitfield width and, under
//! [`GenericSyntax::Strict`] (the default), on malformed generic syntax. The
//! enum path never fails; unmapped tags leave the canonical type empty.

mod bitfield;
mod cursor;
mod enum_path;
mod error;
mod normalize;
mod options;
mod parser;
mod stack;
mod template;

pub use bitfield::{BitfieldTypePolicy, SmallestUnsigned, BITFIELD_PREFIX};
pub use enum_path::canonical_type_for;
pub use error::{FieldParseError, GenericErrorKind};
pub use normalize::{alias_for, PRIMITIVE_ALIASES};
pub use options::{GenericSyntax, ParseOptions};
pub use parser::FieldParser;
pub use template::parse_template;

pub use fieldgen_ir::{FieldDescriptor, FieldType, TemplateArg, TemplateNode};

/// Parse a type string with default options.
///
/// `array_sizes` are copied into the descriptor unchanged, outermost first.
pub fn parse(
    type_name: &str,
    field_name: &str,
    array_sizes: &[usize],
) -> Result<FieldDescriptor, FieldParseError> {
    FieldParser::new().parse(type_name, field_name, array_sizes)
}

/// Describe a datamap field from its tag.
///
/// An `array_size` of 0 or 1 means scalar.
pub fn parse_field_type(tag: FieldType, field_name: &str, array_size: usize) -> FieldDescriptor {
    FieldParser::new().parse_field_type(tag, field_name, array_size)
}

/// Describe a datamap field from its raw tag byte.
///
/// Bytes outside the enumeration degrade to an untagged descriptor with an
/// empty canonical type.
pub fn parse_raw_field_type(raw: u8, field_name: &str, array_size: usize) -> FieldDescriptor {
    FieldParser::new().parse_raw_field_type(raw, field_name, array_size)
}
