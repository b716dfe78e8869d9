//! Remover - deduplicate a code table by encoding length
//!
//! Reads the whole table, filters it, and prints the result to stdout.

use clap::error::ErrorKind;
use clap::CommandFactory;
use std::process;

use codetable::cli::{init_logging, parse_or_exit, RemoverArgs};
use codetable::processor::{Remover, RemoverConfig};
use codetable::progress::print_error;

fn main() {
    let args: RemoverArgs = parse_or_exit();

    validate_args(&args);
    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: RemoverArgs) -> anyhow::Result<()> {
    let remover = Remover::new(RemoverConfig::from_args(&args));
    remover.run()?;

    Ok(())
}

/// Reject a zero threshold the same way clap rejects a missing one
fn validate_args(args: &RemoverArgs) {
    if args.max_encoding_length == 0 {
        let err = RemoverArgs::command().error(
            ErrorKind::ValueValidation,
            "MAX_ENCODING_LENGTH must be a positive integer",
        );
        let _ = err.print();
        process::exit(1);
    }
}
