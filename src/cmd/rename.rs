//! Rename command module
//!
//! Drives one full rename operation: extract, prompt, plan, confirm,
//! execute. Cancelled prompts abort silently; empty results abort with a
//! single message and no side effects.

use std::io;

use imglink::engine;
use imglink::extract::extract_image_links;
use imglink::mapping::build_mapping;
use imglink::naming;
use imglink::prompt;
use imglink::{Settings, Vault};

pub fn run(
    vault: &Vault,
    settings: &Settings,
    note: &str,
    prefix_arg: Option<String>,
    yes: bool,
    dry_run: bool,
) -> io::Result<()> {
    let note_path = vault.resolve_note(note)?;
    let content = vault.read_note(&note_path)?;

    let links = extract_image_links(&content);
    if links.is_empty() {
        prompt::notify("No image links found");
        return Ok(());
    }

    let prefix = match prefix_arg {
        Some(prefix) => prefix,
        None => match prompt::prompt_text("Image prefix", &settings.prefix)? {
            Some(prefix) => prefix,
            None => return Ok(()), // cancelled
        },
    };

    let timestamp = vault.note_timestamp(&note_path)?;
    let date_str = naming::format_date(&timestamp, settings);
    let mapping = build_mapping(&links, &prefix, &date_str, settings);

    if mapping.is_empty() {
        prompt::notify("No images need renaming");
        return Ok(());
    }

    if dry_run {
        for (old, new) in mapping.iter() {
            println!("{} -> {}", old, new);
        }
        return Ok(());
    }

    if !yes {
        let question = format!("Found {} images to rename, continue?", mapping.len());
        if !prompt::confirm(&question)? {
            return Ok(()); // declined
        }
    }

    let outcome = engine::execute_rename(vault, settings, &note_path, &content, &mapping)?;
    if outcome.renamed == 0 {
        prompt::notify("No images were renamed");
        return Ok(());
    }

    prompt::notify(&format!("Renamed {} image files", outcome.renamed));
    Ok(())
}
