//! Fieldgen CLI
//!
//! Parses schema field types into canonical C++ declarations.

use std::path::Path;
use std::process::ExitCode;

use fieldgen::commands::{describe_tag, parse_type, run_batch};
use fieldgen::{init_tracing, parse_args, CommandError, OutputFormat};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(command, &args[2..]) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: &str, rest: &[String]) -> Result<ExitCode, CommandError> {
    match command {
        "parse" => {
            let (config, positionals) = parse_args(rest)?;
            println!("{}", parse_type(&positionals, &config)?);
        }
        "tag" => {
            let (config, positionals) = parse_args(rest)?;
            println!("{}", describe_tag(&positionals, &config)?);
        }
        "batch" => {
            let (config, positionals) = parse_args(rest)?;
            let [path] = positionals[..] else {
                return Err(CommandError::Usage("fieldgen batch <file> [options]"));
            };

            let report = run_batch(Path::new(path), &config)?;
            for line in report.render_fields(config.format)? {
                println!("{line}");
            }
            for line in report.render_failures(config.format)? {
                eprintln!("{line}");
            }
            if config.stats {
                print_stats(&report.stats(), config.format)?;
            }
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("fieldgen {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn print_stats(stats: &[(&str, usize)], format: OutputFormat) -> Result<(), CommandError> {
    match format {
        OutputFormat::Text => {
            eprintln!("template usage:");
            for (name, count) in stats {
                eprintln!("  {count:>6}  {name}");
            }
        }
        OutputFormat::Json => eprintln!("{}", serde_json::to_string(stats)?),
    }
    Ok(())
}

fn print_usage() {
    println!("Fieldgen - schema field type parser");
    println!();
    println!("Usage: fieldgen <command> [args] [options]");
    println!();
    println!("Commands:");
    println!("  parse <type> [name] [dims...]   Parse one type string");
    println!("  tag <FIELD_*|n> [name] [len]    Describe a datamap field tag");
    println!("  batch <file>                    Parse a name<TAB>type[<TAB>dims] dump");
    println!("  help                            Show this message");
    println!("  version                         Show version");
    println!();
    println!("Options:");
    println!("  --json            Emit one JSON object per field");
    println!("  --lenient         Recover from malformed generic syntax");
    println!("  --max-depth=<n>   Template nesting limit (default 64)");
    println!("  --no-parallel     Parse batch input on one thread");
    println!("  --stats           Print template usage after a batch");
    println!();
    println!("Set FIELDGEN_LOG=fieldgen_parse=trace for parser tracing.");
}
