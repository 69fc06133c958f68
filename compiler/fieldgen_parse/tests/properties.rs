//! Property tests for the string path.
//!
//! 1. Aliases: every primitive alias parses to its canonical name.
//! 2. Bitfields: `bitfield:N` yields width N.
//! 3. Round trip: serialize a tree, re-parse it, get the same tree.
//! 4. Whitespace: inserting spaces around structural bytes changes nothing.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::needless_pass_by_value,
    reason = "Proptest macros generate code with these patterns"
)]

use fieldgen_parse::{
    parse, parse_template, ParseOptions, TemplateArg, TemplateNode, PRIMITIVE_ALIASES,
};
use proptest::prelude::*;

// -- Strategies --

/// A type identifier that is not itself a primitive alias.
fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][A-Za-z0-9_]{0,12}")
        .expect("valid regex")
}

/// A leaf: a plain identifier, an alias, or a pointer to an identifier.
fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        prop::sample::select(PRIMITIVE_ALIASES.map(|(alias, _)| alias).to_vec())
            .prop_map(str::to_owned),
        identifier_strategy().prop_map(|name| format!("{name}*")),
    ]
}

/// An already-canonical template tree of bounded depth and width.
fn node_strategy() -> impl Strategy<Value = TemplateNode> {
    let leaf_node = (identifier_strategy(), prop::collection::vec(leaf_strategy(), 1..4), any::<bool>())
        .prop_map(|(name, leaves, is_pointer)| TemplateNode {
            type_name: name,
            arguments: leaves.into_iter().map(TemplateArg::Leaf).collect(),
            is_pointer,
        });

    leaf_node.prop_recursive(4, 24, 4, |inner| {
        let arg = prop_oneof![
            leaf_strategy().prop_map(TemplateArg::Leaf),
            inner.prop_map(TemplateArg::Node),
        ];
        (identifier_strategy(), prop::collection::vec(arg, 1..4), any::<bool>()).prop_map(
            |(name, arguments, is_pointer)| TemplateNode {
                type_name: name,
                arguments,
                is_pointer,
            },
        )
    })
}

/// Spread spaces around every structural byte.
fn with_spaces(canonical: &str) -> String {
    let mut out = String::with_capacity(canonical.len() * 2);
    for c in canonical.chars() {
        if matches!(c, '<' | '>' | ',') {
            out.push(' ');
            out.push(c);
            out.push(' ');
        } else {
            out.push(c);
        }
    }
    out
}

proptest! {
    #[test]
    fn alias_law(index in 0..PRIMITIVE_ALIASES.len(), name in "[a-z_]{1,8}") {
        let (alias, canonical) = PRIMITIVE_ALIASES[index];
        let field = parse(alias, &name, &[]).unwrap();
        prop_assert_eq!(field.canonical_type, canonical);
        prop_assert_eq!(field.name, name);
    }

    #[test]
    fn bitfield_width_law(width in 1usize..=64) {
        let field = parse(&format!("bitfield:{width}"), "m_bits", &[]).unwrap();
        prop_assert_eq!(field.bitfield_width, Some(width));
        prop_assert!(field.is_bitfield());
    }

    #[test]
    fn round_trip_law(tree in node_strategy()) {
        let options = ParseOptions::default();
        let first = parse_template(&tree.to_string(), &options).unwrap();
        let second = parse_template(&first.to_string(), &options).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn whitespace_is_insignificant(tree in node_strategy()) {
        let canonical = tree.to_string();
        let tight = parse(&canonical, "x", &[]).unwrap();
        let spaced = parse(&with_spaces(&canonical), "x", &[]).unwrap();
        prop_assert_eq!(tight, spaced);
    }

    #[test]
    fn array_dimensions_are_preserved(dims in prop::collection::vec(1usize..16, 0..4)) {
        let field = parse("float32", "m_grid", &dims).unwrap();
        prop_assert_eq!(field.array_dimensions.as_slice(), dims.as_slice());
        let expected = dims.iter().copied().reduce(|a, b| a * b).unwrap_or(0);
        prop_assert_eq!(field.total_array_size(), expected);
    }
}
