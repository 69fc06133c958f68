//! `fieldgen tag <FIELD_*|n> [name] [len]`

use fieldgen_parse::{FieldParser, FieldType};

use crate::{render_field, CommandError, DriverConfig};

const USAGE: &str = "fieldgen tag <FIELD_*|n> [name] [len]";

/// Describe a datamap field from its tag.
///
/// The tag is either a name (`FIELD_FLOAT32`, `float32`) or its numeric
/// value. Numbers go through the raw-byte path, so values past the end of the
/// enumeration still describe an untagged field.
pub fn describe_tag(positionals: &[&str], config: &DriverConfig) -> Result<String, CommandError> {
    let (tag, field_name, len) = match positionals {
        [tag] => (*tag, "", None),
        [tag, name] => (*tag, *name, None),
        [tag, name, len] => (*tag, *name, Some(*len)),
        _ => return Err(CommandError::Usage(USAGE)),
    };

    let array_size = match len {
        Some(len) => len
            .parse::<usize>()
            .map_err(|_| CommandError::BadDimensions(len.to_owned()))?,
        None => 0,
    };

    let parser = FieldParser::new();
    let field = if tag.bytes().all(|b| b.is_ascii_digit()) {
        let raw: u8 = tag
            .parse()
            .map_err(|_| CommandError::UnknownFieldType(tag.to_owned()))?;
        parser.parse_raw_field_type(raw, field_name, array_size)
    } else {
        let tag_value =
            FieldType::from_name(tag).ok_or_else(|| CommandError::UnknownFieldType(tag.to_owned()))?;
        parser.parse_field_type(tag_value, field_name, array_size)
    };

    render_field(&field, config.format)
}
