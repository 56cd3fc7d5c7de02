//! Loading and decoding source files.
//!
//! The whole file is read into memory and decoded before lexing starts.
//! Reading goes through `std::fs::read`, so the file handle is closed
//! before any decode error is reported.
//!
//! A leading byte order mark that agrees with the declared encoding is
//! dropped. Any other decoding problem is a [`SourceError::Decode`] with
//! the byte offset of the first bad sequence.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use dot_lexer_core::SourcePosition;

/// Supported source encodings.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Look up an encoding by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, SourceError> {
        let encoding = match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Self::Utf8,
            "utf-16le" | "utf16le" => Self::Utf16Le,
            "utf-16be" | "utf16be" => Self::Utf16Be,
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Self::Latin1,
            "us-ascii" | "ascii" => Self::Ascii,
            _ => {
                return Err(SourceError::UnknownEncoding {
                    name: name.to_owned(),
                })
            }
        };
        Ok(encoding)
    }

    /// Canonical name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
            Self::Latin1 => "iso-8859-1",
            Self::Ascii => "us-ascii",
        }
    }

    /// Decode `bytes`, or return the offset of the first invalid byte.
    fn decode(self, bytes: &[u8]) -> Result<String, usize> {
        match self {
            Self::Utf8 => {
                let (skip, body) = match bytes.strip_prefix(b"\xEF\xBB\xBF") {
                    Some(rest) => (3, rest),
                    None => (0, bytes),
                };
                String::from_utf8(body.to_vec())
                    .map_err(|err| skip + err.utf8_error().valid_up_to())
            }
            Self::Utf16Le => decode_utf16(bytes, u16::from_le_bytes, [0xFF, 0xFE]),
            Self::Utf16Be => decode_utf16(bytes, u16::from_be_bytes, [0xFE, 0xFF]),
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
            Self::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
                Some(offset) => Err(offset),
                None => Ok(bytes.iter().copied().map(char::from).collect()),
            },
        }
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16, bom: [u8; 2]) -> Result<String, usize> {
    let skip = if bytes.starts_with(&bom) { 2 } else { 0 };
    let body = &bytes[skip..];
    if body.len() % 2 != 0 {
        return Err(bytes.len() - 1);
    }

    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    let mut text = String::with_capacity(body.len() / 2);
    let mut offset = skip;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => {
                text.push(c);
                offset += c.len_utf16() * 2;
            }
            Err(_) => return Err(offset),
        }
    }
    Ok(text)
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Failure to obtain source text.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file is missing or unreadable.
    #[error("cannot read '{}': {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The bytes are not valid in the declared encoding.
    #[error("{resource}: invalid {encoding} data at byte {offset}")]
    Decode {
        resource: Arc<str>,
        encoding: TextEncoding,
        offset: usize,
    },
    #[error("unknown text encoding '{name}'")]
    UnknownEncoding { name: String },
}

/// Fully decoded source text and the name it is reported under.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourceText {
    text: String,
    resource: Arc<str>,
}

impl SourceText {
    pub fn new(text: impl Into<String>, resource: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            resource: resource.into(),
        }
    }

    /// Decode an in-memory byte buffer.
    pub fn from_bytes(
        bytes: &[u8],
        encoding: TextEncoding,
        resource: impl Into<Arc<str>>,
    ) -> Result<Self, SourceError> {
        let resource = resource.into();
        match encoding.decode(bytes) {
            Ok(text) => Ok(Self { text, resource }),
            Err(offset) => Err(SourceError::Decode {
                resource,
                encoding,
                offset,
            }),
        }
    }

    /// Read and decode a file.
    ///
    /// The resource name is the canonical path, or `path` as given if it
    /// cannot be canonicalized.
    #[tracing::instrument(level = "debug", skip_all, fields(path = %path.display(), %encoding))]
    pub fn load(path: &Path, encoding: TextEncoding) -> Result<Self, SourceError> {
        let bytes = std::fs::read(path).map_err(|source| SourceError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let resource = std::fs::canonicalize(path)
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
        tracing::debug!(bytes = bytes.len(), %resource, "read source");
        Self::from_bytes(&bytes, encoding, resource)
    }

    /// Report this source under a different name.
    #[must_use]
    pub fn with_resource(self, resource: impl Into<Arc<str>>) -> Self {
        Self {
            resource: resource.into(),
            ..self
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn resource(&self) -> &Arc<str> {
        &self.resource
    }

    /// A fresh cursor at line 1, column 1.
    pub fn position(&self) -> SourcePosition<'_> {
        SourcePosition::new(&self.text, Arc::clone(&self.resource))
    }
}
