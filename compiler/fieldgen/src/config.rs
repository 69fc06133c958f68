//! Driver configuration and flag parsing.

use fieldgen_parse::{GenericSyntax, ParseOptions};

use crate::CommandError;

/// How parsed fields are written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One declaration per field: `CUtlVector<int32_t> m_values;`.
    #[default]
    Text,
    /// One JSON object per field.
    Json,
}

/// Driver settings shared by every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Output format.
    pub format: OutputFormat,
    /// Options handed to the field parser.
    pub options: ParseOptions,
    /// Parse batch input on a thread pool.
    pub parallel: bool,
    /// Print a tally of template roots after a batch.
    pub stats: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            format: OutputFormat::Text,
            options: ParseOptions::default(),
            parallel: true,
            stats: false,
        }
    }
}

/// Split command arguments into flags and positionals.
///
/// Flags may appear anywhere after the command name:
/// `--json`, `--lenient`, `--no-parallel`, `--stats`, `--max-depth=<n>`.
pub fn parse_args(args: &[String]) -> Result<(DriverConfig, Vec<&str>), CommandError> {
    let mut config = DriverConfig::default();
    let mut positionals = Vec::new();

    for arg in args {
        match arg.as_str() {
            "--json" => config.format = OutputFormat::Json,
            "--lenient" => config.options.generic_syntax = GenericSyntax::Lenient,
            "--no-parallel" => config.parallel = false,
            "--stats" => config.stats = true,
            other => {
                if let Some(value) = other.strip_prefix("--max-depth=") {
                    config.options.max_template_depth = value
                        .parse()
                        .ok()
                        .filter(|&depth: &usize| depth > 0)
                        .ok_or_else(|| CommandError::BadFlag(other.to_owned()))?;
                } else if other.starts_with("--") {
                    return Err(CommandError::BadFlag(other.to_owned()));
                } else {
                    positionals.push(other);
                }
            }
        }
    }

    Ok((config, positionals))
}

#[cfg(test)]
mod tests;
