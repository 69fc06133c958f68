//! `fieldgen parse <type> [name] [dims...]`

use fieldgen_parse::FieldParser;

use super::parse_dimensions;
use crate::{render_field, CommandError, DriverConfig};

const USAGE: &str = "fieldgen parse <type> [name] [dims...]";

/// Parse a single schema type string.
///
/// Every positional after the name is a dimension argument; they are
/// concatenated outermost first, so `4 2` and `4x2` mean the same thing.
pub fn parse_type(positionals: &[&str], config: &DriverConfig) -> Result<String, CommandError> {
    let Some((type_name, rest)) = positionals.split_first() else {
        return Err(CommandError::Usage(USAGE));
    };
    let (field_name, dim_args) = rest.split_first().map_or(("", &[][..]), |(n, d)| (*n, d));

    let mut dims = Vec::new();
    for arg in dim_args {
        dims.extend(parse_dimensions(arg)?);
    }

    let field = FieldParser::new()
        .with_options(config.options.clone())
        .parse(type_name, field_name, &dims)?;
    render_field(&field, config.format)
}
