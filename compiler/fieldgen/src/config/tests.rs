#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn defaults_without_flags() {
    let input = args(&["CUtlVector<int32>", "m_values"]);
    let (config, positionals) = parse_args(&input).unwrap();
    assert_eq!(config, DriverConfig::default());
    assert_eq!(positionals, vec!["CUtlVector<int32>", "m_values"]);
    assert!(config.parallel);
    assert!(config.options.is_strict());
}

#[test]
fn flags_anywhere() {
    let input = args(&["--json", "float32", "--lenient", "m_fl", "--no-parallel", "--stats"]);
    let (config, positionals) = parse_args(&input).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.options.generic_syntax, GenericSyntax::Lenient);
    assert!(!config.parallel);
    assert!(config.stats);
    assert_eq!(positionals, vec!["float32", "m_fl"]);
}

#[test]
fn max_depth_flag() {
    let input = args(&["--max-depth=8"]);
    let (config, _) = parse_args(&input).unwrap();
    assert_eq!(config.options.max_template_depth, 8);
}

#[test]
fn bad_flags_are_rejected() {
    for bad in ["--max-depth=", "--max-depth=0", "--max-depth=x", "--verbose"] {
        let input = args(&[bad]);
        assert!(
            matches!(parse_args(&input), Err(CommandError::BadFlag(ref flag)) if flag == bad),
            "{bad}"
        );
    }
}
