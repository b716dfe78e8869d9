//! Converter - render a code table as Lua tables
//!
//! Writes char.lua, word.lua and word_list.txt to the output directory.

use std::process;

use codetable::cli::{init_logging, parse_or_exit, ConverterArgs};
use codetable::processor::{Converter, ConverterConfig};
use codetable::progress::{print_error, print_header, print_info};

fn main() {
    let args: ConverterArgs = parse_or_exit();

    init_logging(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: ConverterArgs) -> anyhow::Result<()> {
    let config = ConverterConfig::from_args(&args);

    if args.verbose && !args.quiet {
        print_config(&config);
    }

    let converter = Converter::new(config);
    converter.run()?;

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ConverterConfig) {
    print_header("Configuration");

    match config.input {
        Some(ref path) => print_info(&format!("Input:        {:?}", path)),
        None => print_info("Input:        stdin"),
    }
    print_info(&format!("Output dir:   {:?}", config.output_dir));
    print_info(&format!("Word list:    {}", config.word_list));
    print_info(&format!("Dry run:      {}", config.dry_run));
}
