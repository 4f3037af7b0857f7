//! Front-matter detection and removal for Markdown files.
//!
//! A block is only recognized at the very start of a document: an opening
//! delimiter line, the metadata, and a matching closing delimiter line.
//! The metadata is parsed to make sure it is well formed, then discarded.

use crate::error::FrontMatterError;

/// Metadata syntax of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Parse `metadata` as a mapping and throw the result away.
    ///
    /// A blank block is accepted. Anything that is not a key/value mapping
    /// (a bare scalar, a sequence) is rejected, so prose that happens to sit
    /// between two delimiter lines is never silently dropped.
    fn validate(self, metadata: &str) -> Result<(), FrontMatterError> {
        if metadata.trim().is_empty() {
            return Ok(());
        }
        match self {
            Self::Yaml => {
                // Comment-only blocks deserialize as null.
                serde_yaml::from_str::<Option<serde_yaml::Mapping>>(metadata)?;
            }
            Self::Toml => {
                toml::from_str::<toml::Table>(metadata)?;
            }
            Self::Json => {
                serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(metadata)?;
            }
        }
        Ok(())
    }
}

/// Opening/closing delimiter lines for one recognized block style.
#[derive(Debug, Clone, Copy)]
struct Delimiters {
    open: &'static str,
    close: &'static str,
    format: Format,
    /// The delimiter lines are part of the metadata (`{` ... `}` JSON).
    inclusive: bool,
}

#[rustfmt::skip]
const DELIMITERS: &[Delimiters] = &[
    Delimiters { open: "---", close: "---", format: Format::Yaml, inclusive: false },
    Delimiters { open: "---yaml", close: "---", format: Format::Yaml, inclusive: false },
    Delimiters { open: "+++", close: "+++", format: Format::Toml, inclusive: false },
    Delimiters { open: "---toml", close: "---", format: Format::Toml, inclusive: false },
    Delimiters { open: ";;;", close: ";;;", format: Format::Json, inclusive: false },
    Delimiters { open: "---json", close: "---", format: Format::Json, inclusive: false },
    Delimiters { open: "{", close: "}", format: Format::Json, inclusive: true },
];

/// A leading block located in a document, borrowed from its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    pub format: Format,
    /// Raw metadata text (between the delimiter lines, or including them for `{` ... `}`).
    pub metadata: &'a str,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

/// Locate a front-matter block without parsing it.
///
/// Returns `None` when the first line is not a delimiter, or when the
/// opening delimiter is never closed.
#[must_use]
pub fn split(content: &str) -> Option<FrontMatter<'_>> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    let opener = first.trim_end();
    let delims = DELIMITERS.iter().find(|d| d.open == opener)?;

    let metadata_start = first.len();
    let mut offset = metadata_start;
    for line in lines {
        let line_end = offset + line.len();
        if line.trim_end() == delims.close {
            let metadata = if delims.inclusive {
                &content[..line_end]
            } else {
                &content[metadata_start..offset]
            };
            return Some(FrontMatter {
                format: delims.format,
                metadata,
                body: &content[line_end..],
            });
        }
        offset = line_end;
    }
    None
}

/// Strip a leading front-matter block from `content`.
///
/// Without a block the input is returned as-is. A block whose metadata
/// fails to parse is an error.
pub fn strip(content: &str) -> Result<&str, FrontMatterError> {
    match split(content) {
        None => Ok(content),
        Some(fm) => {
            fm.format.validate(fm.metadata)?;
            Ok(fm.body)
        }
    }
}
