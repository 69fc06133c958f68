//! Fieldgen IR - parsed field descriptions.
//!
//! This crate holds the output model shared by every field parser entry point:
//! - `FieldDescriptor`: one parsed schema field (type, dimensions, bitfield width)
//! - `TemplateNode` / `TemplateArg`: the tree of a generic instantiation
//! - `FieldType`: the closed datamap field-type enumeration
//!
//! Nothing here parses. The types are plain values: every descriptor is built
//! fresh by a parse call and owned by whoever asked for it.

mod descriptor;
mod field_type;
mod template;

pub use descriptor::{ArrayDims, FieldDescriptor};
pub use field_type::{FieldType, UnknownFieldType};
pub use template::{TemplateArg, TemplateNode};
