//! Record filtering module
//!
//! Deduplicates code table records by encoding length. Given a threshold `T`:
//! - an encoding shorter than `T` may be claimed by one record only
//! - a word whose encoding is exactly `T` long may appear once
//! - encodings longer than `T` are dropped
//!
//! Non-conforming lines pass through untouched.

use crate::dedup::{EncodingClaims, SeenWords};
use crate::error::CodetableError;
use crate::record::{parse_record, split_lines};

/// Why a record was kept out of the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Short encoding already held by another word
    EncodingClaimed { by: String },
    /// Full-length encoding for a word that was already admitted
    DuplicateWord,
    /// Encoding longer than the threshold
    EncodingTooLong,
}

/// Outcome of checking one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    PassThrough,
    Admitted,
    Rejected(RejectReason),
}

impl Verdict {
    /// Whether the line belongs in the output
    #[inline]
    pub fn keeps_line(&self) -> bool {
        !matches!(self, Verdict::Rejected(_))
    }
}

/// Counters for one filtering run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FilterStats {
    pub total_lines: u64,
    pub passed_through: u64,
    pub admitted: u64,
    pub encoding_claimed: u64,
    pub duplicate_words: u64,
    pub too_long: u64,
}

impl FilterStats {
    fn record(&mut self, verdict: &Verdict) {
        self.total_lines += 1;
        match verdict {
            Verdict::PassThrough => self.passed_through += 1,
            Verdict::Admitted => self.admitted += 1,
            Verdict::Rejected(RejectReason::EncodingClaimed { .. }) => self.encoding_claimed += 1,
            Verdict::Rejected(RejectReason::DuplicateWord) => self.duplicate_words += 1,
            Verdict::Rejected(RejectReason::EncodingTooLong) => self.too_long += 1,
        }
    }

    /// Total records dropped for any reason
    pub fn rejected(&self) -> u64 {
        self.encoding_claimed + self.duplicate_words + self.too_long
    }
}

/// Single-pass filter over code table lines
#[derive(Debug)]
pub struct RecordFilter {
    max_encoding_length: usize,
    seen_words: SeenWords,
    claims: EncodingClaims,
    stats: FilterStats,
}

impl RecordFilter {
    /// Create a filter for the given maximum encoding length
    pub fn new(max_encoding_length: usize) -> Result<Self, CodetableError> {
        if max_encoding_length == 0 {
            return Err(CodetableError::InvalidThreshold(max_encoding_length));
        }

        Ok(Self {
            max_encoding_length,
            seen_words: SeenWords::new(),
            claims: EncodingClaims::new(),
            stats: FilterStats::default(),
        })
    }

    /// Decide what happens to `line` and update the tracking state
    pub fn check(&mut self, line: &str) -> Verdict {
        let verdict = self.decide(line);
        self.stats.record(&verdict);
        verdict
    }

    fn decide(&mut self, line: &str) -> Verdict {
        let Some(record) = parse_record(line) else {
            return Verdict::PassThrough;
        };

        let encoding_len = record.encoding_len();

        if encoding_len < self.max_encoding_length {
            if let Some(by) = self.claims.claimant(record.encoding) {
                log::debug!(
                    "Dropping {:?}: encoding {:?} already claimed by {:?}",
                    record.word,
                    record.encoding,
                    by
                );
                return Verdict::Rejected(RejectReason::EncodingClaimed { by: by.to_string() });
            }
            self.claims.claim(record.encoding, record.word);
            self.seen_words.insert(record.word);
            return Verdict::Admitted;
        }

        if encoding_len == self.max_encoding_length {
            if !self.seen_words.insert(record.word) {
                log::debug!(
                    "Dropping {:?} {:?}: word already admitted",
                    record.word,
                    record.encoding
                );
                return Verdict::Rejected(RejectReason::DuplicateWord);
            }
            return Verdict::Admitted;
        }

        log::debug!(
            "Dropping {:?}: encoding {:?} longer than {}",
            record.word,
            record.encoding,
            self.max_encoding_length
        );
        Verdict::Rejected(RejectReason::EncodingTooLong)
    }

    /// Filter a sequence of lines, keeping their terminators
    pub fn filter_lines<'a, I>(&mut self, lines: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut output = String::new();

        for line in lines {
            if self.check(line).keeps_line() {
                output.push_str(line);
            }
        }

        output
    }

    /// Filter a whole text; lines keep their original terminators
    pub fn filter_text(&mut self, text: &str) -> String {
        let output = self.filter_lines(split_lines(text));

        log::debug!(
            "Tracking {} admitted words, {} claimed encodings",
            self.seen_words.len(),
            self.claims.len()
        );

        output
    }

    pub fn stats(&self) -> &FilterStats {
        &self.stats
    }
}

/// Filter `text` with a fresh filter
pub fn filter_text(text: &str, max_encoding_length: usize) -> Result<String, CodetableError> {
    let mut filter = RecordFilter::new(max_encoding_length)?;
    Ok(filter.filter_text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_from_docs() {
        let output = filter_text("a 1\nb 1\nc 22\n", 2).unwrap();
        assert_eq!(output, "a 1\nc 22\n");
    }

    #[test]
    fn test_zero_threshold_rejected() {
        assert!(matches!(
            RecordFilter::new(0),
            Err(CodetableError::InvalidThreshold(0))
        ));
    }

    #[test]
    fn test_verdicts() {
        let mut filter = RecordFilter::new(2).unwrap();

        assert_eq!(filter.check("啊 a\n"), Verdict::Admitted);
        assert_eq!(
            filter.check("阿 a\n"),
            Verdict::Rejected(RejectReason::EncodingClaimed { by: "啊".to_string() })
        );
        assert_eq!(filter.check("阿 aa\n"), Verdict::Admitted);
        assert_eq!(
            filter.check("阿 ab\n"),
            Verdict::Rejected(RejectReason::DuplicateWord)
        );
        assert_eq!(
            filter.check("吖 abc\n"),
            Verdict::Rejected(RejectReason::EncodingTooLong)
        );
        assert_eq!(filter.check("---\n"), Verdict::PassThrough);
    }

    #[test]
    fn test_short_encoding_word_blocks_full_length_duplicate() {
        // A word admitted through a short encoding counts as seen
        let output = filter_text("的 d\n的 de\n地 de\n", 2).unwrap();
        assert_eq!(output, "的 d\n地 de\n");
    }

    #[test]
    fn test_full_length_encodings_may_repeat() {
        let output = filter_text("是 sh\n时 sh\n", 2).unwrap();
        assert_eq!(output, "是 sh\n时 sh\n");
    }

    #[test]
    fn test_pass_through_keeps_position() {
        let input = "# header line\nx 1\n\ny 1\nz 1 extra\n";
        let output = filter_text(input, 2).unwrap();
        assert_eq!(output, "# header line\nx 1\n\nz 1 extra\n");
    }

    #[test]
    fn test_missing_final_newline() {
        let output = filter_text("a 1\nb 2", 1).unwrap();
        assert_eq!(output, "a 1\nb 2");
    }

    #[test]
    fn test_lone_carriage_return_ends_line() {
        let output = filter_text("a 1\rb 1\rc 22\r", 2).unwrap();
        assert_eq!(output, "a 1\rc 22\r");
    }

    #[test]
    fn test_crlf_kept() {
        let output = filter_text("a 1\r\nb 1\r\n", 2).unwrap();
        assert_eq!(output, "a 1\r\n");
    }

    #[test]
    fn test_unicode_encoding_length() {
        // Encodings are measured in characters, not bytes
        let output = filter_text("甲 ㄅㄆ\n乙 ㄅㄆ\n", 2).unwrap();
        assert_eq!(output, "甲 ㄅㄆ\n乙 ㄅㄆ\n");
    }

    #[test]
    fn test_stats() {
        let mut filter = RecordFilter::new(2).unwrap();
        filter.filter_text("a 1\nb 1\nc 22\nc 23\nd 333\nnoise\n");

        let stats = filter.stats();
        assert_eq!(stats.total_lines, 6);
        assert_eq!(stats.passed_through, 1);
        assert_eq!(stats.admitted, 2);
        assert_eq!(stats.encoding_claimed, 1);
        assert_eq!(stats.duplicate_words, 1);
        assert_eq!(stats.too_long, 1);
        assert_eq!(stats.rejected(), 3);
    }
}
