//! Interactive prompts on stdin/stderr
//!
//! Prompts write to stderr so stdout stays clean for scripting. EOF on stdin
//! is cancellation, reported as `None` rather than an error.

use std::io::{self, BufRead, Write};

/// Ask for a text value, offering a default.
///
/// Empty input accepts the default; EOF cancels.
pub fn prompt_text(label: &str, default: &str) -> io::Result<Option<String>> {
    eprint!("{} [{}]: ", label, default);
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let value = line.trim();
    Ok(Some(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }))
}

/// Ask a yes/no question. Only `y` / `yes` accepts; EOF declines.
pub fn confirm(message: &str) -> io::Result<bool> {
    eprint!("{} [y/N]: ", message);
    io::stderr().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(false);
    }

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Fire-and-forget user-visible message.
pub fn notify(message: &str) {
    println!("{}", message);
}
