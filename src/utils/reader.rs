//! Log file reader with transparent decompression.
//!
//! Rotated system logs are often kept compressed (`auth.log.2.gz`,
//! `system.log.0.zst`). [`open_file`] picks a decoder from the extension so
//! the pipelines can read any of them line by line.

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Compression applied to a log file, judged by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gzip,
    Zstd,
}

impl Compression {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("gz") => Self::Gzip,
            Some("zst") => Self::Zstd,
            _ => Self::None,
        }
    }

    /// Whether the on-disk size says nothing about the decoded length
    pub fn is_compressed(self) -> bool {
        self != Self::None
    }

    fn wrap(self, file: File) -> std::io::Result<Box<dyn Read + Send>> {
        Ok(match self {
            Self::None => Box::new(file),
            Self::Gzip => Box::new(GzDecoder::new(file)),
            Self::Zstd => Box::new(zstd::Decoder::new(file)?),
        })
    }
}

/// Opens a log file, decompressing `.gz` and `.zst` files on the fly.
///
/// Any other extension is read as plain text.
///
/// ```no_run
/// use log_insight_tools::utils::reader::open_file;
/// use std::io::{BufRead, BufReader};
///
/// let reader = BufReader::new(open_file("auth.log.1.gz").unwrap());
/// for line in reader.lines() {
///     println!("{}", line.unwrap());
/// }
/// ```
pub fn open_file(path: impl AsRef<Path>) -> Result<Box<dyn Read + Send>> {
    let path = path.as_ref();
    let compression = Compression::from_path(path);
    File::open(path)
        .and_then(|file| compression.wrap(file))
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

/// Opens a log file wrapped in a buffered reader
pub fn open_buffered(path: impl AsRef<Path>) -> Result<BufReader<Box<dyn Read + Send>>> {
    open_file(path).map(BufReader::new)
}
