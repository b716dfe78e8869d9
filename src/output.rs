//! Output management module
//!
//! Writes generated tables to files in the output directory, and filtered
//! text to stdout.

use anyhow::Context;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::CodetableError;

/// A file produced by the converter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: u64,
}

/// Write `contents` to `dir/name`, replacing any existing file
pub fn write_generated(dir: &Path, name: &str, contents: &str) -> anyhow::Result<GeneratedFile> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("Failed to write {:?}", path))?;

    log::debug!("Wrote {} bytes to {:?}", contents.len(), path);

    Ok(GeneratedFile {
        path,
        bytes: contents.len() as u64,
    })
}

/// Write filtered text to stdout in one go
pub fn write_stdout(text: &str) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(text.as_bytes())
        .and_then(|_| lock.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}

/// Ensure output directory exists
pub fn ensure_output_dir(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create output directory {:?}", path))?;
    } else if !path.is_dir() {
        return Err(CodetableError::NotADirectory(path.to_path_buf()).into());
    }
    Ok(())
}
