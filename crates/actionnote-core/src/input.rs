//! Acquisition of raw meeting notes.
//!
//! Every source ends up as plain text; the generator treats them all alike.
//! Bytes from files and stdin are decoded as UTF-8 and invalid sequences are
//! dropped, so binary documents still yield whatever text they contain.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    error::{ActionNoteError, Result},
    generator::SAMPLE_NOTES,
};

/// Where the meeting notes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Pasted text
    Text(String),
    /// Uploaded file (.txt, .md, .docx, .pdf, ...)
    File(PathBuf),
    /// Standard input
    Stdin,
    /// Demo text standing in for OCR of a photographed note
    Sample,
}

impl InputSource {
    /// Read the source into a string.
    ///
    /// # Errors
    ///
    /// * `ActionNoteError::FileSystem` - When the file or stdin cannot be read
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Text(text) => Ok(text.clone()),
            InputSource::File(path) => read_file(path),
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut bytes)
                    .map_err(|e| ActionNoteError::file_system("<stdin>", e))?;
                Ok(decode_lossy(&bytes))
            }
            InputSource::Sample => Ok(SAMPLE_NOTES.to_string()),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ActionNoteError::file_system(path, e))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_lossy(&bytes))
}

/// Decode UTF-8, silently dropping invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
