//! Rename settings, persisted as a JSON record
//!
//! The settings record is loaded once at startup and passed explicitly into
//! each operation. Mutations happen only through the `config` command, which
//! saves the record after every change.

use std::fs;
use std::io;
use std::path::Path;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::constants as C;

/// Date component layout for generated filenames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// 2-digit month + 2-digit day
    Mmdd,
    /// 2-digit day + 2-digit month
    Ddmm,
    /// 2-digit year + 2-digit month + 2-digit day
    Yymmdd,
}

impl DateFormat {
    /// Parse a format name, falling back to MMDD for anything unrecognized
    /// so that a stale settings file never aborts an operation.
    pub fn from_name(name: &str) -> Self {
        match name {
            "DDMM" => DateFormat::Ddmm,
            "YYMMDD" => DateFormat::Yymmdd,
            _ => DateFormat::Mmdd,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::Mmdd => "MMDD",
            DateFormat::Ddmm => "DDMM",
            DateFormat::Yymmdd => "YYMMDD",
        }
    }
}

impl Serialize for DateFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DateFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(DateFormat::from_name(&name))
    }
}

/// Output syntax for rewritten image links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkFormat {
    /// `![[name]]` / `![[name|alt]]`
    Wiki,
    /// `![alt](name)`
    Markdown,
}

impl LinkFormat {
    /// Parse a format name, falling back to wiki for anything unrecognized.
    pub fn from_name(name: &str) -> Self {
        match name {
            "markdown" => LinkFormat::Markdown,
            _ => LinkFormat::Wiki,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LinkFormat::Wiki => "wiki",
            LinkFormat::Markdown => "markdown",
        }
    }
}

impl Serialize for LinkFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for LinkFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(LinkFormat::from_name(&name))
    }
}

/// The persisted settings record
///
/// Missing keys in the file fall back to their defaults, so records written
/// by older versions keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Filename prefix for renamed images
    pub prefix: String,
    /// Whether generated names carry a date component
    pub use_date: bool,
    /// Layout of the date component
    pub date_format: DateFormat,
    /// First index assigned in a rename run
    pub start_index: u32,
    /// Minimum digit width for the index (padding, not truncation)
    pub pad_length: usize,
    /// Output syntax for rewritten links
    pub link_format: LinkFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            prefix: C::DEFAULT_PREFIX.to_string(),
            use_date: true,
            date_format: DateFormat::Mmdd,
            start_index: C::DEFAULT_START_INDEX,
            pad_length: C::DEFAULT_PAD_LENGTH,
            link_format: LinkFormat::Wiki,
        }
    }
}

/// Load the settings record, returning defaults when no file exists
pub fn load(path: &Path) -> io::Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Malformed settings file {}: {}", path.display(), e),
        )
    })
}

/// Persist the settings record as pretty-printed JSON
pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
    fs::write(path, content)
}
