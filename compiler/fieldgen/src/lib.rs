//! Fieldgen driver.
//!
//! Thin command layer over `fieldgen_parse`:
//!
//! ```text
//! fieldgen parse <type> [name] [dims...]    one schema type string
//! fieldgen tag <FIELD_*|n> [name] [len]     one datamap tag
//! fieldgen batch <file>                     a whole schema dump, in parallel
//! ```
//!
//! Commands return rendered output instead of printing, so `main` owns all
//! process-level concerns (stdout, stderr, exit status).

pub mod commands;
mod config;
mod error;
mod render;

pub use config::{parse_args, DriverConfig, OutputFormat};
pub use error::CommandError;
pub use render::render_field;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call more than once. Enabled only when `FIELDGEN_LOG` (or, failing
/// that, `RUST_LOG`) holds a filter, e.g. `FIELDGEN_LOG=fieldgen_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let filter = EnvFilter::try_from_env("FIELDGEN_LOG").or_else(|_| EnvFilter::try_from_default_env());
        if let Ok(filter) = filter {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .try_init();
        }
    });
}
