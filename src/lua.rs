//! Lua table rendering
//!
//! Groups code table records by encoding and renders them as Lua table
//! literals consumed by the input method's Lua schema.

use ahash::RandomState;
use hashbrown::HashMap;
use std::fmt::Write;

use crate::record::{char_len, parse_record, split_lines};

/// Type annotation written at the top of every generated table
pub const SCHEMA_HEADER: &str = "--- @type non-ascii.Schema";

/// Which words a rendered table keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    /// Single-character words only
    Character,
    /// Multi-character words only
    Word,
}

impl TableMode {
    #[inline]
    pub fn accepts(self, word: &str) -> bool {
        let len = char_len(word);
        match self {
            TableMode::Character => len == 1,
            TableMode::Word => len > 1,
        }
    }

    /// Conventional output file name for this mode
    pub fn file_name(self) -> &'static str {
        match self {
            TableMode::Character => "char.lua",
            TableMode::Word => "word.lua",
        }
    }
}

/// Encoding to words, in first-seen order
#[derive(Debug, Default)]
pub struct EncodingTable {
    index: HashMap<String, usize, RandomState>,
    groups: Vec<(String, Vec<String>)>,
}

impl EncodingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from code table text, skipping non-conforming lines
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for line in split_lines(text) {
            if let Some(record) = parse_record(line) {
                table.insert(record.encoding, record.word);
            }
        }
        table
    }

    /// Add `word` under `encoding`; returns false if it was already there
    pub fn insert(&mut self, encoding: &str, word: &str) -> bool {
        let slot = match self.index.get(encoding) {
            Some(&slot) => slot,
            None => {
                self.groups.push((encoding.to_string(), Vec::new()));
                let slot = self.groups.len() - 1;
                self.index.insert(encoding.to_string(), slot);
                slot
            }
        };

        let words = &mut self.groups[slot].1;
        if words.iter().any(|w| w == word) {
            return false;
        }
        words.push(word.to_string());
        true
    }

    /// Number of distinct encodings
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-seen encoding order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(encoding, words)| (encoding.as_str(), words.as_slice()))
    }

    /// Render the table for `mode`; groups left empty by the mode are omitted
    pub fn render(&self, mode: TableMode) -> String {
        let mut out = String::new();
        out.push_str(SCHEMA_HEADER);
        out.push('\n');
        out.push_str("return {\n");

        for (encoding, words) in self.groups() {
            let kept: Vec<String> = words
                .iter()
                .filter(|w| mode.accepts(w))
                .map(|w| quote(w))
                .collect();
            if kept.is_empty() {
                continue;
            }
            // Writing to a String cannot fail
            let _ = writeln!(out, "    [{}] = {{{}}},", quote(encoding), kept.join(", "));
        }

        out.push('}');
        out
    }
}

/// Every multi-character word occurrence in `text`, sorted.
///
/// Repeats are kept: a word listed under several encodings appears once per
/// record.
pub fn collect_word_list(text: &str) -> Vec<&str> {
    let mut words: Vec<&str> = split_lines(text)
        .filter_map(parse_record)
        .map(|record| record.word)
        .filter(|word| TableMode::Word.accepts(word))
        .collect();
    words.sort_unstable();
    words
}

/// Render the word list file contents: one word per line, newline terminated
pub fn render_word_list(words: &[&str]) -> String {
    let mut out = words.join("\n");
    out.push('\n');
    out
}

/// Quote a string as a Lua double-quoted literal
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
