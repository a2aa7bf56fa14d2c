//! Command-line driver: reads one JSON file, scans and parses it, and
//! reports the first error.
//!
//! You can run it with: `cargo run -- path/to/file.json --print pretty`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser as ClapParser, ValueEnum};
use strictjson::{Options, Parser, Scanner, Value, DEFAULT_MAX_DEPTH, DEFAULT_MAX_INPUT_BYTES};
use tracing::*;

mod logging;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PrintMode {
    /// Minified output on one line.
    Compact,
    /// Two-space indented output.
    Pretty,
}

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a JSON file.
    input: PathBuf,

    /// Maximum nesting depth of arrays and objects.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Reject input files larger than this many bytes.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    max_input_bytes: usize,

    /// Accept numbers with a leading `+` sign.
    #[arg(long)]
    allow_leading_plus: bool,

    /// Print the parsed value to stdout.
    #[arg(long, value_enum)]
    print: Option<PrintMode>,

    /// Log level used when `RUST_LOG` is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn options(&self) -> Options {
        Options::default()
            .max_depth(self.max_depth)
            .max_input_bytes(self.max_input_bytes)
            .allow_leading_plus(self.allow_leading_plus)
    }
}

fn run(args: &Args) -> anyhow::Result<Value> {
    debug!(input = ?args.input, options = ?args.options());

    let path = args.input.display();
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read file `{}`", path))?;
    debug!(bytes = source.len(), "read");

    let tokens = Scanner::with_options(&source, &args.options())
        .scan()
        .with_context(|| format!("failed to scan `{}`", path))?;
    debug!(tokens = tokens.len(), "scanned");

    let value = Parser::with_max_depth(&tokens, args.max_depth)
        .parse()
        .with_context(|| format!("failed to parse `{}`", path))?;
    info!(path = %path, "parsed");

    Ok(value)
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(&args.log_level);

    let value = match run(&args) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let printed = match args.print {
        None => return ExitCode::SUCCESS,
        Some(PrintMode::Compact) => value.stringify(),
        Some(PrintMode::Pretty) => value.stringify_pretty(),
    };
    match printed {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(_) => {
            eprintln!("value cannot be represented as JSON");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_onto_options() {
        let args = Args::parse_from([
            "strictjson",
            "data.json",
            "--max-depth",
            "5",
            "--max-input-bytes",
            "16777216",
            "--allow-leading-plus",
            "--print",
            "pretty",
        ]);
        assert_eq!(args.input, PathBuf::from("data.json"));
        assert_eq!(
            args.options(),
            Options::default()
                .max_depth(5)
                .max_input_bytes(16 * 1024 * 1024)
                .allow_leading_plus(true)
        );
        assert!(matches!(args.print, Some(PrintMode::Pretty)));
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["strictjson", "data.json"]);
        assert_eq!(args.options(), Options::default());
        assert!(args.print.is_none());
    }

    #[test]
    fn test_run_reports_missing_file() {
        let args = Args::parse_from(["strictjson", "/nonexistent/strictjson/input.json"]);
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read file"));
    }

    #[test]
    fn test_run_parses_file() {
        let path = std::env::temp_dir().join(format!("strictjson-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"a": [1, 2]}"#).unwrap();
        let args = Args::parse_from([std::ffi::OsStr::new("strictjson"), path.as_os_str()]);
        let value = run(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(value.stringify().unwrap(), r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_run_honors_max_input_bytes() {
        let path = std::env::temp_dir().join(format!("strictjson-size-{}.json", std::process::id()));
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let small = Args::parse_from([
            std::ffi::OsStr::new("strictjson"),
            path.as_os_str(),
            std::ffi::OsStr::new("--max-input-bytes"),
            std::ffi::OsStr::new("4"),
        ]);
        let large = Args::parse_from([
            std::ffi::OsStr::new("strictjson"),
            path.as_os_str(),
            std::ffi::OsStr::new("--max-input-bytes"),
            std::ffi::OsStr::new("9"),
        ]);
        let rejected = run(&small);
        let accepted = run(&large);
        std::fs::remove_file(&path).unwrap();

        let err = rejected.unwrap_err();
        assert!(err.to_string().starts_with("failed to scan"));
        let cause = err.downcast_ref::<strictjson::ParseError>().unwrap();
        assert!(cause.message.contains("exceeds maximum size limit"));
        assert_eq!(accepted.unwrap().as_array().map(<[Value]>::len), Some(3));
    }

    #[test]
    fn test_run_wraps_parse_errors() {
        let path = std::env::temp_dir().join(format!("strictjson-bad-{}.json", std::process::id()));
        std::fs::write(&path, "[1,]").unwrap();
        let args = Args::parse_from([std::ffi::OsStr::new("strictjson"), path.as_os_str()]);
        let err = run(&args).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().starts_with("failed to parse"));
        let cause = err.downcast_ref::<strictjson::ParseError>().unwrap();
        assert_eq!(cause.kind, strictjson::ErrorKind::Syntax);
    }
}
