//! Processing pipelines
//!
//! Wires input decoding, filtering/rendering and output together for the
//! two command-line tools.

use std::path::{Path, PathBuf};

use crate::cli::{ConverterArgs, RemoverArgs};
use crate::encoding::{read_input, DecodedInput};
use crate::filter::{FilterStats, RecordFilter};
use crate::lua::{collect_word_list, render_word_list, EncodingTable, TableMode};
use crate::output::{ensure_output_dir, write_generated, write_stdout, GeneratedFile};
use crate::progress::{print_bullet, print_filter_summary, print_generated, print_header, print_info, print_input, print_warning};

/// Word list file name
pub const WORD_LIST_FILE: &str = "word_list.txt";

fn describe_source(input: Option<&Path>) -> String {
    match input {
        Some(path) => format!("{:?}", path),
        None => "stdin".to_string(),
    }
}

/// Remover configuration
#[derive(Debug, Clone)]
pub struct RemoverConfig {
    pub max_encoding_length: usize,
    pub input: Option<PathBuf>,
    pub quiet: bool,
}

impl RemoverConfig {
    pub fn from_args(args: &RemoverArgs) -> Self {
        Self {
            max_encoding_length: args.max_encoding_length,
            input: args.input.clone(),
            quiet: args.quiet,
        }
    }
}

/// Runs the record filter over one input
pub struct Remover {
    config: RemoverConfig,
}

impl Remover {
    pub fn new(config: RemoverConfig) -> Self {
        Self { config }
    }

    /// Filter decoded text, returning the output and run counters
    pub fn filter(&self, text: &str) -> anyhow::Result<(String, FilterStats)> {
        let mut filter = RecordFilter::new(self.config.max_encoding_length)?;
        let output = filter.filter_text(text);
        Ok((output, filter.stats().clone()))
    }

    /// Read input, filter it and write the result to stdout
    pub fn run(&self) -> anyhow::Result<FilterStats> {
        let input = read_input(self.config.input.as_deref())?;

        if !self.config.quiet {
            print_input(&describe_source(self.config.input.as_deref()), &input);
        }

        let (output, stats) = self.filter(&input.text)?;
        write_stdout(&output)?;

        log::info!(
            "Kept {} of {} lines",
            stats.passed_through + stats.admitted,
            stats.total_lines
        );

        if !self.config.quiet {
            print_filter_summary(&stats, self.config.max_encoding_length);
        }

        Ok(stats)
    }
}

/// Converter configuration
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub word_list: bool,
    pub dry_run: bool,
    pub quiet: bool,
}

impl ConverterConfig {
    pub fn from_args(args: &ConverterArgs) -> Self {
        Self {
            input: args.input.clone(),
            output_dir: args.get_output_dir(),
            word_list: !args.no_word_list,
            dry_run: args.dry_run,
            quiet: args.quiet,
        }
    }
}

/// Rendered contents for every file the converter produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedTables {
    pub char_table: String,
    pub word_table: String,
    pub word_list: Option<String>,
}

impl ConvertedTables {
    /// File name and contents pairs, in write order
    pub fn files(&self) -> Vec<(&'static str, &str)> {
        let mut files = vec![
            (TableMode::Character.file_name(), self.char_table.as_str()),
            (TableMode::Word.file_name(), self.word_table.as_str()),
        ];
        if let Some(ref word_list) = self.word_list {
            files.push((WORD_LIST_FILE, word_list.as_str()));
        }
        files
    }
}

/// Builds Lua tables from one input
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Render all outputs from decoded text
    pub fn convert(&self, text: &str) -> ConvertedTables {
        let table = EncodingTable::from_text(text);
        if table.is_empty() {
            log::warn!("No word/encoding records found in input");
        } else {
            log::debug!("Grouped {} encodings", table.len());
        }

        ConvertedTables {
            char_table: table.render(TableMode::Character),
            word_table: table.render(TableMode::Word),
            word_list: self
                .config
                .word_list
                .then(|| render_word_list(&collect_word_list(text))),
        }
    }

    /// Read input, render the tables and write them to the output directory
    pub fn run(&self) -> anyhow::Result<Vec<GeneratedFile>> {
        let input: DecodedInput = read_input(self.config.input.as_deref())?;

        if !self.config.quiet {
            print_header("Converting code table...");
            print_input(&describe_source(self.config.input.as_deref()), &input);
        }

        let tables = self.convert(&input.text);

        if self.config.dry_run {
            self.dry_run_report(&tables);
            return Ok(Vec::new());
        }

        ensure_output_dir(&self.config.output_dir)?;

        let mut generated = Vec::new();
        for (name, contents) in tables.files() {
            generated.push(write_generated(&self.config.output_dir, name, contents)?);
        }

        if !self.config.quiet {
            print_generated(&generated);
        }

        Ok(generated)
    }

    fn dry_run_report(&self, tables: &ConvertedTables) {
        if self.config.quiet {
            return;
        }

        print_header("DRY RUN - No files will be written");
        print_info(&format!("Output directory: {:?}", self.config.output_dir));
        for (name, contents) in tables.files() {
            print_bullet(&format!("{} ({} lines)", name, contents.lines().count()));
        }
        if tables.word_list.is_none() {
            print_warning("word_list.txt disabled");
        }
    }
}
