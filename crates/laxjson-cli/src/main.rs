//! `laxjson` CLI — check, normalize, and convert lenient JSON from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (prints "ok" or exits non-zero)
//! echo "{'a': [1, 2, ], }" | laxjson check
//!
//! # Rewrite to canonical form: double quotes, sorted keys, no whitespace
//! laxjson format -i config.ljson -o config.json
//!
//! # Convert to strict JSON, pretty-printed
//! laxjson to-json --pretty -i config.ljson
//!
//! # Treat `null` as a null value instead of `false`, and log the parse outcome
//! laxjson --null-as invalid -v to-json -i config.ljson
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use laxjson::{FloatFormat, NullLiteral, ParseOptions, Value, WriteOptions};
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "laxjson",
    version,
    about = "Lenient JSON parser and canonical writer"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Maximum nesting depth of lists and maps
    #[arg(long, global = true, default_value_t = laxjson::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject inputs longer than this many bytes
    #[arg(long, global = true)]
    max_input_bytes: Option<usize>,

    /// What the `null` keyword parses to
    #[arg(long, global = true, value_enum, default_value_t = NullAs::False)]
    null_as: NullAs,

    /// How doubles are written by `format`
    #[arg(long, global = true, value_enum, default_value_t = FloatStyle::General)]
    float_format: FloatStyle,

    /// Log parse diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the input parses as a single value
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Rewrite the input in canonical form
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Convert the input to strict JSON
    ToJson {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum NullAs {
    /// `null` reads as `false`
    False,
    /// `null` reads as a null value
    Invalid,
}

#[derive(Clone, Copy, ValueEnum)]
enum FloatStyle {
    /// Six significant digits, like printf `%g`
    General,
    /// Shortest text that reads back to the same double
    Shortest,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        let null_literal = match self.null_as {
            NullAs::False => NullLiteral::False,
            NullAs::Invalid => NullLiteral::Invalid,
        };
        ParseOptions::default()
            .with_max_depth(self.max_depth)
            .with_max_input_len(self.max_input_bytes)
            .with_null_literal(null_literal)
    }

    fn write_options(&self) -> WriteOptions {
        let float_format = match self.float_format {
            FloatStyle::General => FloatFormat::General,
            FloatStyle::Shortest => FloatFormat::Shortest,
        };
        WriteOptions::default().with_float_format(float_format)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let parse_options = cli.parse_options();

    match &cli.command {
        Commands::Check { input } => {
            let bytes = read_input(input.as_deref())?;
            decode(&bytes, &parse_options)?;
            println!("ok");
        }
        Commands::Format { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let value = decode(&bytes, &parse_options)?;
            let text = laxjson::serialize_with(&value, &cli.write_options());
            write_output(output.as_deref(), &text)?;
        }
        Commands::ToJson {
            input,
            output,
            pretty,
        } => {
            let bytes = read_input(input.as_deref())?;
            let value = decode(&bytes, &parse_options)?;
            let json = serde_json::Value::from(&value);
            let text = if *pretty {
                serde_json::to_string_pretty(&json)?
            } else {
                serde_json::to_string(&json)?
            };
            write_output(output.as_deref(), text.as_bytes())?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins; otherwise `-v` selects `debug`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn decode(bytes: &[u8], options: &ParseOptions) -> Result<Value> {
    let value = laxjson::decode_with(bytes, options).context("Failed to parse input")?;
    debug!(bytes = bytes.len(), "input parsed");
    Ok(value)
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).with_context(|| format!("Failed to read file: {}", path)),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
