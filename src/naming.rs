//! Canonical image name generation
//!
//! A canonical name is `<prefix><dateStr>-<paddedIndex><ext>`. The same
//! shape, anchored and with exactly `pad_length` digits, decides whether an
//! existing reference is already canonical.

use chrono::{DateTime, Local};
use regex::Regex;

use crate::constants as C;
use crate::settings::{DateFormat, Settings};

/// Format the date component for generated names.
///
/// Empty when `use_date` is off, so the dash separator directly follows the
/// prefix.
pub fn format_date(date: &DateTime<Local>, settings: &Settings) -> String {
    if !settings.use_date {
        return String::new();
    }

    match settings.date_format {
        DateFormat::Mmdd => date.format("%m%d").to_string(),
        DateFormat::Ddmm => date.format("%d%m").to_string(),
        DateFormat::Yymmdd => date.format("%y%m%d").to_string(),
    }
}

/// Generate a canonical filename.
///
/// The index is left-zero-padded to `pad_length` digits; wider indices keep
/// all their digits. `ext` carries its leading dot.
pub fn generate_name(
    prefix: &str,
    date_str: &str,
    index: u32,
    pad_length: usize,
    ext: &str,
) -> String {
    format!(
        "{}{}-{:0width$}{}",
        prefix,
        date_str,
        index,
        ext,
        width = pad_length
    )
}

/// Extension of a raw reference, from its last `.` to the end.
///
/// References without a dot get `.png`.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) => &name[pos..],
        None => C::DEFAULT_IMAGE_EXTENSION,
    }
}

/// Anchored pattern matching names that are already canonical for the given
/// prefix and date.
///
/// Prefix and date are escaped so they match literally; the index must be
/// exactly `pad_length` digits.
pub fn canonical_name_pattern(prefix: &str, date_str: &str, pad_length: usize) -> Regex {
    let pattern = format!(
        r"^{}{}-\d{{{}}}\.\w+$",
        regex::escape(prefix),
        regex::escape(date_str),
        pad_length
    );
    // The dynamic parts are escaped, so the pattern is always valid.
    Regex::new(&pattern).unwrap()
}
