//! Code table record parsing
//!
//! A code table line holds a word followed by its encoding, separated by
//! whitespace. Anything else is a non-conforming line.

/// A `word encoding` pair borrowed from an input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub word: &'a str,
    pub encoding: &'a str,
}

impl<'a> Record<'a> {
    /// Encoding length in characters
    #[inline]
    pub fn encoding_len(&self) -> usize {
        char_len(self.encoding)
    }
}

/// Parse a line into a record.
///
/// Returns `None` unless the line has exactly two whitespace-separated
/// tokens. Leading/trailing whitespace and the line terminator are ignored.
pub fn parse_record(line: &str) -> Option<Record<'_>> {
    let mut tokens = line.split_whitespace();
    let word = tokens.next()?;
    let encoding = tokens.next()?;

    if tokens.next().is_some() {
        return None;
    }

    Some(Record { word, encoding })
}

/// Split text into lines, each keeping its terminator.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. A final line without a
/// terminator is yielded as-is.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`]
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let end = match self.rest.find(['\r', '\n']) {
            Some(i) if self.rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => self.rest.len(),
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

/// Length in Unicode scalar values, with a fast path for ASCII
#[inline]
pub fn char_len(s: &str) -> usize {
    if s.is_ascii() {
        s.len()
    } else {
        s.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let record = parse_record("你好 nihk\n").unwrap();
        assert_eq!(record.word, "你好");
        assert_eq!(record.encoding, "nihk");
        assert_eq!(record.encoding_len(), 4);
    }

    #[test]
    fn test_parse_tabs_and_crlf() {
        let record = parse_record("a\t\tab\r\n").unwrap();
        assert_eq!(record, Record { word: "a", encoding: "ab" });
    }

    #[test]
    fn test_non_conforming() {
        assert_eq!(parse_record(""), None);
        assert_eq!(parse_record("\n"), None);
        assert_eq!(parse_record("---\n"), None);
        assert_eq!(parse_record("lonely\n"), None);
        assert_eq!(parse_record("a b c\n"), None);
    }

    #[test]
    fn test_split_lines_terminators() {
        let lines: Vec<_> = split_lines("a 1\nb 1\r\nc 1\rd 1").collect();
        assert_eq!(lines, vec!["a 1\n", "b 1\r\n", "c 1\r", "d 1"]);
    }

    #[test]
    fn test_split_lines_blank_lines() {
        let lines: Vec<_> = split_lines("\n\r\r\n").collect();
        assert_eq!(lines, vec!["\n", "\r", "\r\n"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_unicode_length() {
        assert_eq!(char_len("hëllo"), 5);
        assert_eq!(char_len("好"), 1);
        assert_eq!(char_len("abc"), 3);
    }
}
