//! Input decoding module
//!
//! Reads the whole input into memory and decodes it to UTF-8. A byte order
//! mark decides the encoding when present; otherwise valid UTF-8 is taken
//! as-is and anything else goes through charset detection.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::CodetableError;

/// Decoded input text plus what it took to get there
#[derive(Debug, Clone)]
pub struct DecodedInput {
    pub text: String,
    /// Name of the source encoding
    pub encoding: &'static str,
    /// Raw size before decoding
    pub raw_bytes: u64,
    /// Whether malformed sequences were replaced
    pub had_errors: bool,
}

/// Read from `path`, or from stdin when `path` is `None`
pub fn read_input(path: Option<&Path>) -> anyhow::Result<DecodedInput> {
    let mut raw = Vec::new();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CodetableError::MissingInput(path.to_path_buf()).into());
            }
            File::open(path)?.read_to_end(&mut raw)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut raw)?;
        }
    }

    decode_bytes(&raw)
}

/// Decode a raw buffer to UTF-8 text
pub fn decode_bytes(raw: &[u8]) -> anyhow::Result<DecodedInput> {
    let raw_bytes = raw.len() as u64;

    if let Some((encoding, _)) = Encoding::for_bom(raw) {
        // BOM sniffing reader strips the mark and transcodes
        let mut reader = DecodeReaderBytesBuilder::new().bom_sniffing(true).build(raw);
        let mut text = String::new();
        reader.read_to_string(&mut text)?;

        return Ok(DecodedInput {
            had_errors: text.contains(char::REPLACEMENT_CHARACTER),
            text,
            encoding: encoding.name(),
            raw_bytes,
        });
    }

    if let Ok(text) = std::str::from_utf8(raw) {
        return Ok(DecodedInput {
            text: text.to_string(),
            encoding: encoding_rs::UTF_8.name(),
            raw_bytes,
            had_errors: false,
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(raw, true);
    let encoding = detector.guess(None, true);

    let (decoded, _, had_errors) = encoding.decode(raw);
    if had_errors {
        log::warn!("Input has malformed {} sequences, using lossy conversion", encoding.name());
    }

    Ok(DecodedInput {
        text: decoded.into_owned(),
        encoding: encoding.name(),
        raw_bytes,
        had_errors,
    })
}
