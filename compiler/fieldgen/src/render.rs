//! Output rendering.

use fieldgen_parse::FieldDescriptor;

use crate::{CommandError, OutputFormat};

/// Render one descriptor as a single output line.
///
/// Text output is the C++ member declaration; JSON output is the whole
/// descriptor, template tree included.
pub fn render_field(field: &FieldDescriptor, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(field.declaration()),
        OutputFormat::Json => Ok(serde_json::to_string(field)?),
    }
}
