//! High-level rename and convert operations
//!
//! The seam between the pure core (extract / naming / mapping / rewrite /
//! convert) and the vault. Per-file rename failures are contained here:
//! logged, skipped, and aggregated into a count, while whole-operation
//! failures propagate to the caller.

use std::io;
use std::path::Path;

use crate::convert;
use crate::mapping::RenameMapping;
use crate::rewrite;
use crate::settings::{LinkFormat, Settings};
use crate::util;
use crate::vault::Vault;

/// Result of one executed rename run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameOutcome {
    /// Number of files physically renamed
    pub renamed: usize,
    /// Whether the note text was rewritten and persisted
    pub content_updated: bool,
}

/// Physically rename the mapped files and rewrite the note.
///
/// Every mapped file is attempted in document order; unresolvable references
/// and target collisions are warned about and skipped without aborting the
/// batch. When nothing was renamed the note is left untouched. Otherwise the
/// content is rewritten and written back only if the text changed.
pub fn execute_rename(
    vault: &Vault,
    settings: &Settings,
    note_path: &Path,
    content: &str,
    mapping: &RenameMapping,
) -> io::Result<RenameOutcome> {
    let renamed = rename_image_files(vault, mapping, note_path);
    if renamed == 0 {
        return Ok(RenameOutcome {
            renamed: 0,
            content_updated: false,
        });
    }

    let new_content = rewrite::rewrite_links(content, mapping, settings.link_format);
    let content_updated = new_content != content;
    if content_updated {
        vault.write_note(note_path, &new_content)?;
    }

    Ok(RenameOutcome {
        renamed,
        content_updated,
    })
}

/// Rename each mapped file, one reference at a time.
///
/// Returns how many renames succeeded. Failures are reported on stderr and
/// never abort the remaining references.
pub fn rename_image_files(vault: &Vault, mapping: &RenameMapping, note_path: &Path) -> usize {
    let mut count = 0;

    for (old, new) in mapping.iter() {
        let old_file = match vault.resolve_reference(old, note_path) {
            Some(path) => path,
            None => {
                eprintln!("warning: image not found: {}", old);
                continue;
            }
        };

        let new_path = old_file
            .parent()
            .unwrap_or(vault.root())
            .join(new);
        if vault.exists(&new_path) {
            eprintln!(
                "warning: target already exists: {}",
                util::display_path(&new_path)
            );
            continue;
        }

        match vault.rename_file(&old_file, &new_path) {
            Ok(()) => count += 1,
            Err(e) => eprintln!("warning: failed to rename {} -> {}: {}", old, new, e),
        }
    }

    count
}

/// Convert a note's embeds to the target syntax.
///
/// Returns `Ok(false)` when there was nothing to convert.
pub fn convert_note(vault: &Vault, note_path: &Path, target: LinkFormat) -> io::Result<bool> {
    let content = vault.read_note(note_path)?;

    let converted = match target {
        LinkFormat::Markdown => convert::wiki_to_markdown(&content),
        LinkFormat::Wiki => convert::markdown_to_wiki(&content),
    };

    match converted {
        Some(new_content) => {
            vault.write_note(note_path, &new_content)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_image_links;
    use crate::mapping::build_mapping;
    use std::fs;
    use tempfile::TempDir;

    fn no_date_settings() -> Settings {
        Settings {
            use_date: false,
            ..Settings::default()
        }
    }

    fn setup_vault(note: &str, images: &[&str]) -> (TempDir, Vault, std::path::PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let note_path = temp_dir.path().join("note.md");
        fs::write(&note_path, note).unwrap();
        for image in images {
            fs::write(temp_dir.path().join(image), "img").unwrap();
        }
        let vault = Vault::open(temp_dir.path()).unwrap();
        let note_path = vault.resolve_note("note").unwrap();
        (temp_dir, vault, note_path)
    }

    fn plan(vault: &Vault, note_path: &Path, settings: &Settings) -> (String, RenameMapping) {
        let content = vault.read_note(note_path).unwrap();
        let links = extract_image_links(&content);
        let mapping = build_mapping(&links, &settings.prefix, "", settings);
        (content, mapping)
    }

    #[test]
    fn test_rename_run_renames_files_and_rewrites_note() {
        let settings = no_date_settings();
        let (tmp, vault, note_path) = setup_vault(
            "![[pic1.png]]\n![alt](pic2.jpg)\n",
            &["pic1.png", "pic2.jpg"],
        );

        let (content, mapping) = plan(&vault, &note_path, &settings);
        let outcome = execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        assert_eq!(outcome.renamed, 2);
        assert!(outcome.content_updated);
        assert!(tmp.path().join("zd-001.png").exists());
        assert!(tmp.path().join("zd-002.jpg").exists());
        assert!(!tmp.path().join("pic1.png").exists());

        let rewritten = fs::read_to_string(&note_path).unwrap();
        assert_eq!(rewritten, "![[zd-001.png]]\n![[zd-002.jpg|alt]]\n");
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let settings = no_date_settings();
        let (_tmp, vault, note_path) = setup_vault("![[pic.png]]\n", &["pic.png"]);

        let (content, mapping) = plan(&vault, &note_path, &settings);
        execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        // Everything in the rewritten note is already canonical.
        let (_, second_mapping) = plan(&vault, &note_path, &settings);
        assert!(second_mapping.is_empty());
    }

    #[test]
    fn test_unresolvable_reference_skipped_not_fatal() {
        let settings = no_date_settings();
        let (tmp, vault, note_path) =
            setup_vault("![[ghost.png]]\n![[pic.png]]\n", &["pic.png"]);

        let (content, mapping) = plan(&vault, &note_path, &settings);
        let outcome = execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        assert_eq!(outcome.renamed, 1);
        // ghost.png got index 1, pic.png index 2.
        assert!(tmp.path().join("zd-002.png").exists());
    }

    #[test]
    fn test_target_collision_skipped_not_fatal() {
        let settings = no_date_settings();
        let (tmp, vault, note_path) =
            setup_vault("![[pic.png]]\n", &["pic.png", "zd-001.png"]);

        let (content, mapping) = plan(&vault, &note_path, &settings);
        let outcome = execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        assert_eq!(outcome.renamed, 0);
        assert!(!outcome.content_updated);
        // The colliding source stays in place.
        assert!(tmp.path().join("pic.png").exists());
    }

    #[test]
    fn test_nothing_renamed_leaves_note_untouched() {
        let settings = no_date_settings();
        let (_tmp, vault, note_path) = setup_vault("![[ghost.png]]\n", &[]);

        let (content, mapping) = plan(&vault, &note_path, &settings);
        let outcome = execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        assert_eq!(outcome.renamed, 0);
        assert_eq!(
            fs::read_to_string(&note_path).unwrap(),
            "![[ghost.png]]\n"
        );
    }

    #[test]
    fn test_rename_resolves_images_in_subdirectories() {
        let settings = no_date_settings();
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("assets")).unwrap();
        fs::write(temp_dir.path().join("note.md"), "![[shot.png]]\n").unwrap();
        fs::write(temp_dir.path().join("assets/shot.png"), "img").unwrap();

        let vault = Vault::open(temp_dir.path()).unwrap();
        let note_path = vault.resolve_note("note").unwrap();
        let (content, mapping) = plan(&vault, &note_path, &settings);
        let outcome = execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        assert_eq!(outcome.renamed, 1);
        // The new file lands next to the old one.
        assert!(temp_dir.path().join("assets/zd-001.png").exists());
    }

    #[test]
    fn test_markdown_output_syntax_respected() {
        let settings = Settings {
            use_date: false,
            link_format: LinkFormat::Markdown,
            ..Settings::default()
        };
        let (_tmp, vault, note_path) = setup_vault("![cap](pic.jpg)\n", &["pic.jpg"]);

        let (content, mapping) = plan(&vault, &note_path, &settings);
        execute_rename(&vault, &settings, &note_path, &content, &mapping).unwrap();

        let rewritten = fs::read_to_string(&note_path).unwrap();
        assert_eq!(rewritten, "![cap](zd-001.jpg)\n");
    }

    #[test]
    fn test_convert_note_to_markdown() {
        let (_tmp, vault, note_path) = setup_vault("![[a.png|cap]]\n", &[]);

        let converted = convert_note(&vault, &note_path, LinkFormat::Markdown).unwrap();
        assert!(converted);
        assert_eq!(
            fs::read_to_string(&note_path).unwrap(),
            "![cap](a.png)\n"
        );
    }

    #[test]
    fn test_convert_note_to_wiki() {
        let (_tmp, vault, note_path) = setup_vault("![](b.png)\n", &[]);

        let converted = convert_note(&vault, &note_path, LinkFormat::Wiki).unwrap();
        assert!(converted);
        assert_eq!(fs::read_to_string(&note_path).unwrap(), "![[b.png]]\n");
    }

    #[test]
    fn test_convert_note_nothing_to_convert() {
        let (_tmp, vault, note_path) = setup_vault("plain text\n", &[]);

        let converted = convert_note(&vault, &note_path, LinkFormat::Wiki).unwrap();
        assert!(!converted);
        assert_eq!(fs::read_to_string(&note_path).unwrap(), "plain text\n");
    }
}
