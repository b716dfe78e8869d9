//! Console reporting module
//!
//! Styled status lines and run summaries. Everything goes to stderr so that
//! stdout stays clean for filtered data.

use bytesize::ByteSize;
use colored::*;

use crate::encoding::DecodedInput;
use crate::filter::FilterStats;
use crate::output::GeneratedFile;

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    eprintln!("  {} {}", "✔".green(), text.green());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    eprintln!("  {} {}", "•".green(), text);
}

/// Describe the input that was read
pub fn print_input(source: &str, input: &DecodedInput) {
    print_info(&format!(
        "Read {} from {} ({})",
        ByteSize(input.raw_bytes),
        source,
        input.encoding
    ));
    if input.had_errors {
        print_warning("Input contained malformed bytes; they were replaced");
    }
}

/// Print the filter run summary
pub fn print_filter_summary(stats: &FilterStats, max_encoding_length: usize) {
    eprintln!();
    eprintln!("{}", "═".repeat(48).green());
    eprintln!("  {} {}", "Max encoding len:".green(), max_encoding_length);
    eprintln!("  {} {}", "Total lines:     ".green(), format_number(stats.total_lines));
    eprintln!("  {} {}", "Passed through:  ".green(), format_number(stats.passed_through));
    eprintln!("  {} {}", "Admitted:        ".green().bold(), format_number(stats.admitted).green().bold());
    eprintln!("  {} {}", "Encoding taken:  ".yellow(), format_number(stats.encoding_claimed));
    eprintln!("  {} {}", "Duplicate words: ".yellow(), format_number(stats.duplicate_words));
    eprintln!("  {} {}", "Too long:        ".yellow(), format_number(stats.too_long));
    eprintln!("  {} {}", "Rejected total:  ".yellow().bold(), format_number(stats.rejected()));
    eprintln!("{}", "═".repeat(48).green());
}

/// List generated files
pub fn print_generated(files: &[GeneratedFile]) {
    print_success("Output files created:");
    for file in files {
        print_bullet(&format!("{:?} ({})", file.path, ByteSize(file.bytes)));
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
