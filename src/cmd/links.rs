//! Links command module
//!
//! Lists the image references extracted from a note, one per line, marking
//! the ones that do not resolve to a file.

use std::io;

use imglink::extract::extract_image_links;
use imglink::prompt;
use imglink::Vault;

pub fn run(vault: &Vault, note: &str) -> io::Result<()> {
    let note_path = vault.resolve_note(note)?;
    let content = vault.read_note(&note_path)?;

    let links = extract_image_links(&content);
    if links.is_empty() {
        prompt::notify("No image links found");
        return Ok(());
    }

    for link in &links {
        match vault.resolve_reference(link, &note_path) {
            Some(_) => println!("{}", link),
            None => println!("{} (unresolved)", link),
        }
    }

    Ok(())
}
