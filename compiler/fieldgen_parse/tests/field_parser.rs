//! End-to-end checks of the public parse entry points against schema-shaped input.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use fieldgen_parse::{
    parse, parse_field_type, parse_raw_field_type, FieldParseError, FieldParser, FieldType,
    GenericErrorKind, ParseOptions, TemplateArg, PRIMITIVE_ALIASES,
};
use pretty_assertions::assert_eq;

#[test]
fn every_alias_maps_on_the_string_path() {
    for (alias, canonical) in PRIMITIVE_ALIASES {
        assert_eq!(parse(alias, "x", &[]).unwrap().canonical_type, canonical);
    }
}

#[test]
fn bitfield_with_letters_is_an_error() {
    assert!(matches!(
        parse("bitfield:abc", "x", &[]),
        Err(FieldParseError::MalformedBitfieldWidth { .. })
    ));
}

#[test]
fn handle_vector_tree() {
    let field = parse("CUtlVector<CHandle<CBaseEntity>>", "x", &[]).unwrap();
    let root = field.template_info.unwrap();
    assert_eq!(root.type_name, "CUtlVector");
    assert_eq!(root.arguments.len(), 1);
    let TemplateArg::Node(handle) = &root.arguments[0] else {
        panic!("expected nested node, got {:?}", root.arguments[0]);
    };
    assert_eq!(handle.type_name, "CHandle");
    assert_eq!(handle.arguments, vec![TemplateArg::leaf("CBaseEntity")]);
    assert_eq!(field.canonical_type, "CUtlVector<CHandle<CBaseEntity>>");
}

#[test]
fn two_dimensional_array() {
    let field = parse("int32", "x", &[4, 2]).unwrap();
    assert_eq!(field.array_dimensions.as_slice(), &[4, 2]);
    assert_eq!(field.total_array_size(), 8);
}

#[test]
fn boolean_tag_scalar_and_array() {
    assert!(parse_field_type(FieldType::Boolean, "flag", 1)
        .array_dimensions
        .is_empty());
    assert_eq!(
        parse_field_type(FieldType::Boolean, "flags", 4)
            .array_dimensions
            .as_slice(),
        &[4]
    );
}

#[test]
fn raw_tags_never_fail() {
    for raw in 0..=u8::MAX {
        let field = parse_raw_field_type(raw, "m_raw", 1);
        assert!(!field.is_array());
    }
}

#[test]
fn schema_dump_sample() {
    let sample = [
        ("m_bClientSide", "bool", "bool", &[][..]),
        ("m_flCreateTime", "GameTime_t", "GameTime_t", &[][..]),
        ("m_nSubclassID", "CUtlStringToken", "CUtlStringToken", &[][..]),
        ("m_iszPrivateVScripts", "CUtlSymbolLarge", "CUtlSymbolLarge", &[][..]),
        ("m_vecBlendedFields", "CUtlVector< int32 >", "CUtlVector<int32_t>", &[][..]),
        ("m_hEffectEntity", "CHandle< C_BaseEntity >", "CHandle<C_BaseEntity>", &[][..]),
        ("m_nHierarchyId", "uint16", "uint16_t", &[][..]),
        ("m_flPoseParameter", "float32", "float", &[24][..]),
        (
            "m_hModel",
            "CStrongHandle< InfoForResourceTypeCModel >",
            "CStrongHandle<InfoForResourceTypeCModel>",
            &[][..],
        ),
        (
            "m_pVData",
            "CUtlMap< uint32, CUtlVector< CHandle< CBaseEntity > >* >",
            "CUtlMap<uint32_t,CUtlVector<CHandle<CBaseEntity>>*>",
            &[][..],
        ),
    ];

    for (name, raw, canonical, dims) in sample {
        let field = parse(raw, name, dims).unwrap();
        assert_eq!(field.canonical_type, canonical, "{name}");
        assert_eq!(field.array_dimensions.as_slice(), dims, "{name}");
        assert_eq!(field.template_info.is_some(), canonical.contains('<'), "{name}");
    }
}

#[test]
fn strict_and_lenient_disagree_only_on_malformed_input() {
    let strict = FieldParser::new();
    let lenient = FieldParser::new().with_options(ParseOptions::lenient());

    let good = "CUtlVector<CUtlPair<int32,float64>>";
    assert_eq!(
        strict.parse(good, "x", &[]).unwrap(),
        lenient.parse(good, "x", &[]).unwrap()
    );

    let bad = "CUtlVector<CUtlPair<int32,float64>";
    let err = strict.parse(bad, "x", &[]).unwrap_err();
    assert_eq!(err.generic_kind(), Some(GenericErrorKind::UnclosedBracket));
    assert_eq!(
        lenient.parse(bad, "x", &[]).unwrap().canonical_type,
        "CUtlVector<CUtlPair<int32_t,double>>"
    );
}
