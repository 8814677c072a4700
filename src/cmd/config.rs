//! Config command module
//!
//! Settings surface: print all settings, print one value, or set one value
//! and persist the record immediately.

use std::io;
use std::path::Path;

use imglink::settings::{self, DateFormat, LinkFormat, Settings};

pub fn run(settings_path: &Path, key: Option<String>, value: Option<String>) -> io::Result<()> {
    let mut settings = settings::load(settings_path)?;

    match (key, value) {
        (None, _) => {
            print_all(&settings);
            Ok(())
        }
        (Some(key), None) => {
            println!("{}", get_value(&settings, &key)?);
            Ok(())
        }
        (Some(key), Some(value)) => {
            set_value(&mut settings, &key, &value)?;
            settings::save(settings_path, &settings)?;
            println!("{} = {}", key, get_value(&settings, &key)?);
            Ok(())
        }
    }
}

fn print_all(settings: &Settings) {
    println!("prefix = {}", settings.prefix);
    println!("useDate = {}", settings.use_date);
    println!("dateFormat = {}", settings.date_format.as_str());
    println!("startIndex = {}", settings.start_index);
    println!("padLength = {}", settings.pad_length);
    println!("linkFormat = {}", settings.link_format.as_str());
}

fn get_value(settings: &Settings, key: &str) -> io::Result<String> {
    let value = match key {
        "prefix" => settings.prefix.clone(),
        "useDate" => settings.use_date.to_string(),
        "dateFormat" => settings.date_format.as_str().to_string(),
        "startIndex" => settings.start_index.to_string(),
        "padLength" => settings.pad_length.to_string(),
        "linkFormat" => settings.link_format.as_str().to_string(),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

fn set_value(settings: &mut Settings, key: &str, value: &str) -> io::Result<()> {
    match key {
        "prefix" => settings.prefix = value.to_string(),
        "useDate" => {
            settings.use_date = value
                .parse()
                .map_err(|_| invalid_value(key, value, "true or false"))?;
        }
        "dateFormat" => {
            settings.date_format = match value {
                "MMDD" | "DDMM" | "YYMMDD" => DateFormat::from_name(value),
                _ => return Err(invalid_value(key, value, "MMDD, DDMM, or YYMMDD")),
            };
        }
        "startIndex" => {
            settings.start_index = value
                .parse()
                .map_err(|_| invalid_value(key, value, "a non-negative integer"))?;
        }
        "padLength" => {
            let parsed: usize = value
                .parse()
                .map_err(|_| invalid_value(key, value, "an integer >= 1"))?;
            if parsed < 1 {
                return Err(invalid_value(key, value, "an integer >= 1"));
            }
            settings.pad_length = parsed;
        }
        "linkFormat" => {
            settings.link_format = match value {
                "wiki" | "markdown" => LinkFormat::from_name(value),
                _ => return Err(invalid_value(key, value, "wiki or markdown")),
            };
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn unknown_key(key: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!(
            "Unknown setting '{}' (expected prefix, useDate, dateFormat, startIndex, padLength, or linkFormat)",
            key
        ),
    )
}

fn invalid_value(key: &str, value: &str, expected: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Invalid value '{}' for {} (expected {})", value, key, expected),
    )
}
