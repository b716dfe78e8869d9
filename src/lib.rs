//! # Codetable
//!
//! Tools for input-method code tables: text files with one `word encoding`
//! pair per line.
//!
//! ## Features
//!
//! - **remover**: deduplicates records by encoding length. Short encodings
//!   belong to the first word that claims them; full-length encodings keep
//!   each word once; longer encodings are dropped.
//! - **converter**: renders the table as Lua table literals (`char.lua`,
//!   `word.lua`) plus a sorted `word_list.txt`.
//!
//! ## Usage
//!
//! ```bash
//! # Deduplicate with a maximum encoding length of 4
//! remover 4 < codes.txt > codes.dedup.txt
//!
//! # Generate Lua tables in ./lua
//! converter -i codes.txt -o lua
//! ```
//!
//! ## Example
//!
//! ```rust
//! use codetable::filter::RecordFilter;
//!
//! let mut filter = RecordFilter::new(2).unwrap();
//! let output = filter.filter_text("a 1\nb 1\nc 22\n");
//! assert_eq!(output, "a 1\nc 22\n");
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod lua;
pub mod output;
pub mod processor;
pub mod progress;
pub mod record;

pub use cli::{ConverterArgs, RemoverArgs};
pub use error::CodetableError;
pub use processor::{Converter, ConverterConfig, Remover, RemoverConfig};
