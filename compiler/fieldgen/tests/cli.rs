//! End-to-end tests for the `fieldgen` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn fieldgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fieldgen"))
        .args(args)
        .env_remove("FIELDGEN_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run fieldgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn parse_prints_declaration() {
    let output = fieldgen(&["parse", "CUtlVector< CHandle< C_BaseEntity > >", "m_hOwners"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "CUtlVector<CHandle<C_BaseEntity>> m_hOwners;\n");
}

#[test]
fn parse_with_dimensions() {
    let output = fieldgen(&["parse", "float32", "m_flValues", "4", "2"]);
    assert_eq!(stdout(&output), "float m_flValues[4][2];\n");

    let output = fieldgen(&["parse", "float32", "m_flValues", "4x2"]);
    assert_eq!(stdout(&output), "float m_flValues[4][2];\n");
}

#[test]
fn parse_json() {
    let output = fieldgen(&["parse", "--json", "bitfield:12", "m_nBits"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["canonical_type"], "uint16_t");
    assert_eq!(value["bitfield_width"], 12);
}

#[test]
fn parse_error_exits_nonzero() {
    let output = fieldgen(&["parse", "CUtlMap< int32, >", "m_map"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("empty template argument"), "{}", stderr(&output));

    let output = fieldgen(&["parse", "--lenient", "CUtlMap< int32, >", "m_map"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "CUtlMap<int32_t> m_map;\n");
}

#[test]
fn unclosed_generic_fails_unless_lenient() {
    let output = fieldgen(&["parse", "CUtlVector< int32", "m_values"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unclosed `<`"), "{}", stderr(&output));

    let output = fieldgen(&["parse", "--lenient", "CUtlVector< int32", "m_values"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "CUtlVector<int32 m_values;\n");
}

#[test]
fn tag_by_name_and_number() {
    let output = fieldgen(&["tag", "FIELD_FLOAT32", "m_flSpeed"]);
    assert_eq!(stdout(&output), "float m_flSpeed;\n");

    let output = fieldgen(&["tag", "vector", "m_vecOrigin", "3"]);
    assert_eq!(stdout(&output), "Vector m_vecOrigin[3];\n");

    let output = fieldgen(&["tag", "1", "m_flSpeed"]);
    assert_eq!(stdout(&output), "float m_flSpeed;\n");
}

#[test]
fn unknown_tag_name() {
    let output = fieldgen(&["tag", "FIELD_NOPE"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown field type `FIELD_NOPE`"));
}

#[test]
fn batch_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("C_BaseEntity.tsv");
    fs::write(
        &path,
        "# C_BaseEntity\nm_nFlags\tbitfield:3\nm_values\tCUtlVector< int32 >\nm_vecPoints\tVector\t4x2\n",
    )
    .unwrap();

    let output = fieldgen(&["batch", path.to_str().unwrap(), "--stats"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "uint8_t m_nFlags: 3;\nCUtlVector<int32_t> m_values;\nVector m_vecPoints[4][2];\n"
    );
    assert!(stderr(&output).contains("CUtlVector"));
}

#[test]
fn batch_with_failures_exits_nonzero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.tsv");
    fs::write(&path, "m_ok\tint32\nm_bad\tA<b>>\n").unwrap();

    let output = fieldgen(&["batch", "--no-parallel", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "int32_t m_ok;\n");
    assert!(stderr(&output).starts_with("line 2: "), "{}", stderr(&output));
}

#[test]
fn batch_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.tsv");
    let output = fieldgen(&["batch", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot read"));
}

#[test]
fn usage_and_unknown_commands() {
    let output = fieldgen(&[]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Usage: fieldgen"));

    let output = fieldgen(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown command: frobnicate"));

    let output = fieldgen(&["parse", "--bogus", "int32"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("`--bogus`"));
}
