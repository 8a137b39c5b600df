//! Document value objects produced by scanners and consumed by printers and faxes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Declared format of a document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentFormat {
    Pdf,
    Txt,
    /// Image; the fallback for anything that is not PDF or text.
    #[default]
    Jpg,
}

impl DocumentFormat {
    /// Upper-case tag embedded in scan filenames.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Txt => "TXT",
            Self::Jpg => "JPG",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Txt => "txt",
            Self::Jpg => "jpg",
        }
    }

    /// Infer the format from a filename extension.
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("txt") => Self::Txt,
            _ => Self::Jpg,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown document format '{0}', expected one of: pdf, txt, jpg")]
pub struct ParseFormatError(pub String);

impl FromStr for DocumentFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "txt" | "text" => Ok(Self::Txt),
            "jpg" | "jpeg" | "image" => Ok(Self::Jpg),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// An immutable named artifact.
///
/// Devices only look at the filename; there is no content.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Document {
    filename: String,
    format: DocumentFormat,
}

impl Document {
    /// Create a document, inferring its format from the extension.
    pub fn new(filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let format = DocumentFormat::from_filename(&filename);
        Self { filename, format }
    }

    pub fn with_format(filename: impl Into<String>, format: DocumentFormat) -> Self {
        Self {
            filename: filename.into(),
            format,
        }
    }

    /// Document produced by the `sequence`-th scan in `format`.
    pub(crate) fn scanned(format: DocumentFormat, sequence: u64) -> Self {
        Self::with_format(
            format!("{}Scan{}.{}", format.tag(), sequence, format.extension()),
            format,
        )
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}
