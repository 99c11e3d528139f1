//! Command-line argument definition.

use clap::Parser;

use crate::i18n::Language;

/// folio - José Angel López's developer portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "José Angel López's developer portfolio in the terminal", long_about = None)]
pub struct Args {
    /// Start in this language (es or en); overrides settings.conf
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

/// What: Parse a `--lang` value.
///
/// Inputs:
/// - `raw`: Value given on the command line, e.g. `en` or `es_ES.UTF-8`
///
/// Output:
/// - The matching language
///
/// # Errors
/// - Returns a message listing the supported codes when `raw` is not recognized
pub fn parse_language(raw: &str) -> Result<Language, String> {
    Language::from_code(raw).ok_or_else(|| {
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        format!("unsupported language '{raw}' (expected one of: {})", supported.join(", "))
    })
}

/// What: Determine the log level from the command-line flags.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Log level directive (trace, debug, info, warn, error)
///
/// Details:
/// - `--verbose` overrides `--log-level`
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}
