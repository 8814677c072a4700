//! Convert command module
//!
//! Shared by `to-markdown` and `to-wiki`; the target syntax is the only
//! difference between the two.

use std::io;

use imglink::engine;
use imglink::prompt;
use imglink::{LinkFormat, Vault};

pub fn run(vault: &Vault, note: &str, target: LinkFormat) -> io::Result<()> {
    let note_path = vault.resolve_note(note)?;

    if engine::convert_note(vault, &note_path, target)? {
        prompt::notify(&format!("Converted image links to {} form", target.as_str()));
    } else {
        prompt::notify("Nothing to convert");
    }

    Ok(())
}
