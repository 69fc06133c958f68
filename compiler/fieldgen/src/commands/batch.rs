//! `fieldgen batch <file>`
//!
//! Parses a schema dump with one field per line:
//!
//! ```text
//! # name<TAB>type[<TAB>dims]
//! m_nFlags	bitfield:3
//! m_values	CUtlVector< int32 >
//! m_vecPoints	Vector	4x2
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A bad line is
//! reported and the rest of the file still parses.

use std::path::Path;

use fieldgen_parse::{FieldDescriptor, FieldParser};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::parse_dimensions;
use crate::{render_field, CommandError, DriverConfig, OutputFormat};

/// A line that could not be turned into a field.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LineFailure {
    /// 1-based line number.
    pub line: usize,
    /// The line as it appeared in the input.
    pub text: String,
    pub error: String,
}

/// Everything a batch run produced, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub fields: Vec<FieldDescriptor>,
    pub failures: Vec<LineFailure>,
    /// How many fields instantiate each template, keyed by outermost name.
    pub template_roots: FxHashMap<String, usize>,
}

impl BatchReport {
    /// Whether every line parsed.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// One rendered line per parsed field.
    pub fn render_fields(&self, format: OutputFormat) -> Result<Vec<String>, CommandError> {
        self.fields.iter().map(|field| render_field(field, format)).collect()
    }

    /// One rendered line per failure.
    pub fn render_failures(&self, format: OutputFormat) -> Result<Vec<String>, CommandError> {
        self.failures
            .iter()
            .map(|failure| match format {
                OutputFormat::Text => Ok(format!("line {}: {}", failure.line, failure.error)),
                OutputFormat::Json => Ok(serde_json::to_string(failure)?),
            })
            .collect()
    }

    /// Template usage, most used first, ties by name.
    pub fn stats(&self) -> Vec<(&str, usize)> {
        let mut roots: Vec<_> = self
            .template_roots
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        roots.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        roots
    }
}

/// A line split into its columns, not yet parsed.
struct Entry<'a> {
    line: usize,
    text: &'a str,
    name: &'a str,
    type_name: &'a str,
    dims: Vec<usize>,
}

/// Read and parse a schema dump file.
pub fn run_batch(path: &Path, config: &DriverConfig) -> Result<BatchReport, CommandError> {
    let source = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_batch(&source, config))
}

/// Parse a schema dump already in memory.
#[tracing::instrument(level = "debug", skip_all, fields(parallel = config.parallel))]
pub fn parse_batch(source: &str, config: &DriverConfig) -> BatchReport {
    let mut report = BatchReport::default();
    let mut entries = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        match split_line(index + 1, line) {
            Ok(entry) => entries.push(entry),
            Err(failure) => report.failures.push(failure),
        }
    }

    let parser = FieldParser::new().with_options(config.options.clone());
    let results = if config.parallel {
        parse_parallel(&parser, &entries)
    } else {
        entries.iter().map(|entry| parse_entry(&parser, entry)).collect()
    };

    for result in results {
        match result {
            Ok(field) => {
                if let Some(tree) = &field.template_info {
                    *report.template_roots.entry(tree.type_name.clone()).or_default() += 1;
                }
                report.fields.push(field);
            }
            Err(failure) => report.failures.push(failure),
        }
    }
    report.failures.sort_by_key(|failure| failure.line);

    tracing::debug!(
        fields = report.fields.len(),
        failures = report.failures.len(),
        "batch parsed"
    );
    report
}

fn parse_parallel(
    parser: &FieldParser,
    entries: &[Entry<'_>],
) -> Vec<Result<FieldDescriptor, LineFailure>> {
    // Scoped so the pool is torn down before returning.
    rayon::ThreadPoolBuilder::new()
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                entries
                    .par_iter()
                    .map(|entry| parse_entry(parser, entry))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), parsing sequentially");
            entries.iter().map(|entry| parse_entry(parser, entry)).collect()
        })
}

fn split_line(line: usize, text: &str) -> Result<Entry<'_>, LineFailure> {
    let failure = |error: String| LineFailure {
        line,
        text: text.to_owned(),
        error,
    };

    let mut columns = text.split('\t');
    let name = columns.next().unwrap_or_default().trim();
    let Some(type_name) = columns.next().filter(|t| !t.trim().is_empty()) else {
        return Err(failure("expected `name<TAB>type[<TAB>dims]`".to_owned()));
    };
    let dims = match columns.next() {
        Some(dims) if !dims.trim().is_empty() => {
            parse_dimensions(dims).map_err(|e| failure(e.to_string()))?
        }
        _ => Vec::new(),
    };
    if columns.next().is_some() {
        return Err(failure("too many columns".to_owned()));
    }

    Ok(Entry {
        line,
        text,
        name,
        type_name,
        dims,
    })
}

fn parse_entry(parser: &FieldParser, entry: &Entry<'_>) -> Result<FieldDescriptor, LineFailure> {
    parser
        .parse(entry.type_name, entry.name, &entry.dims)
        .map_err(|e| LineFailure {
            line: entry.line,
            text: entry.text.to_owned(),
            error: e.to_string(),
        })
}
