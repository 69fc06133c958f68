//! Type string normalization.
//!
//! Schema sources spell primitives with language-neutral aliases (`float32`,
//! `uint16`) and sometimes format generics with spaces. Normalization removes
//! all whitespace and swaps an alias for its target-language name. Alias
//! matching is exact and whole-string: `int32` maps, `int32*` and
//! `CUtlVector<int32>` do not (template leaves are mapped one by one by the
//! template parser).

use tracing::trace;

/// Primitive alias table, checked in order.
pub const PRIMITIVE_ALIASES: [(&str, &str); 10] = [
    ("float32", "float"),
    ("float64", "double"),
    ("int8", "int8_t"),
    ("int16", "int16_t"),
    ("int32", "int32_t"),
    ("int64", "int64_t"),
    ("uint8", "uint8_t"),
    ("uint16", "uint16_t"),
    ("uint32", "uint32_t"),
    ("uint64", "uint64_t"),
];

/// The canonical name for a primitive alias, if `name` is exactly one.
pub fn alias_for(name: &str) -> Option<&'static str> {
    PRIMITIVE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
}

/// Replace `name` with its canonical spelling if it is an alias.
pub(crate) fn resolve_alias(name: &str) -> String {
    match alias_for(name) {
        Some(canonical) => {
            trace!(alias = name, canonical, "primitive alias");
            canonical.to_owned()
        }
        None => name.to_owned(),
    }
}

/// Remove every whitespace character.
pub(crate) fn strip_whitespace(type_name: &str) -> String {
    type_name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The textual generic check: both `<` and `>` appear.
#[inline]
pub(crate) fn looks_generic(type_name: &str) -> bool {
    type_name.contains('<') && type_name.contains('>')
}
