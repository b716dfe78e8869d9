//! Command-line interface definitions for the codetable tools
//!
//! Both tools read a code table (`word encoding` per line) from stdin or a
//! file. Usage errors exit with status 1.

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// Deduplicate a code table by encoding length
///
/// Encodings shorter than MAX_ENCODING_LENGTH may be claimed by one word
/// only. Words whose encoding is exactly MAX_ENCODING_LENGTH long are kept
/// once. Longer encodings are dropped. Lines that are not a
/// `word encoding` pair pass through unchanged.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "remover",
    version,
    about = "Deduplicate a code table by encoding length",
    after_help = "EXAMPLES:\n    remover 4 < codes.txt > codes.dedup.txt\n    remover 3 -i codes.txt -v"
)]
pub struct RemoverArgs {
    /// Maximum encoding length (positive integer)
    #[arg(value_name = "MAX_ENCODING_LENGTH")]
    pub max_encoding_length: usize,

    /// Read from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Quiet mode - no summary on stderr
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - log every dropped record
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Convert a code table into Lua tables
///
/// Writes char.lua (single-character words), word.lua (multi-character
/// words) and word_list.txt (sorted multi-character words).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "converter",
    version,
    about = "Convert a code table into Lua tables",
    after_help = "EXAMPLES:\n    converter < codes.txt\n    converter -i codes.txt -o lua/ --no-word-list"
)]
pub struct ConverterArgs {
    /// Read from a file instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output directory (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip writing word_list.txt
    #[arg(long, default_value_t = false)]
    pub no_word_list: bool,

    /// Dry run - show what would be written without writing files
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl ConverterArgs {
    /// Get output directory, defaulting to current directory
    pub fn get_output_dir(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Parse arguments, exiting with status 1 on usage errors.
///
/// `--help` and `--version` keep clap's normal behaviour.
pub fn parse_or_exit<P: Parser>() -> P {
    match P::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}

/// Set up `env_logger` with a default level driven by the verbosity flags
pub fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
