//! Syntax-aware link rewriting
//!
//! Applies a rename mapping to note text. Every occurrence of each mapped
//! name is rewritten, in either embedding syntax; names outside the mapping
//! are left byte-for-byte unchanged.

use regex::{Captures, Regex};

use crate::mapping::RenameMapping;
use crate::settings::LinkFormat;

/// Rewrite all mapped image links in `content`.
///
/// Wiki occurrences stay wiki and keep a non-empty alt segment. Markdown
/// occurrences follow `output`: converted to wiki (alt text becomes the wiki
/// alt segment) or kept markdown with only the name replaced. An empty
/// mapping returns the content unchanged; callers compare before persisting.
pub fn rewrite_links(content: &str, mapping: &RenameMapping, output: LinkFormat) -> String {
    if mapping.is_empty() {
        return content.to_string();
    }

    // Old names are escaped so literal names with regex metacharacters
    // match exactly.
    let alternation = mapping
        .iter()
        .map(|(old, _)| regex::escape(old))
        .collect::<Vec<_>>()
        .join("|");

    // The dynamic parts are escaped, so both patterns are always valid.
    // Extraction trims whitespace around wiki names, so the pattern must
    // tolerate it here too or padded occurrences would survive the rewrite.
    let wiki_re =
        Regex::new(&format!(r"!\[\[\s*({})\s*(?:\|([^\]]*))?\]\]", alternation)).unwrap();
    let md_re = Regex::new(&format!(r"!\[([^\]]*)\]\(({})\)", alternation)).unwrap();

    let after_wiki = wiki_re.replace_all(content, |caps: &Captures| {
        let new = match mapping.get(&caps[1]) {
            Some(n) => n,
            None => return caps[0].to_string(),
        };
        let alt = caps.get(2).map(|m| m.as_str()).filter(|s| !s.is_empty());
        match alt {
            Some(alt) => format!("![[{}|{}]]", new, alt),
            None => format!("![[{}]]", new),
        }
    });

    let after_markdown = md_re.replace_all(&after_wiki, |caps: &Captures| {
        let new = match mapping.get(&caps[2]) {
            Some(n) => n,
            None => return caps[0].to_string(),
        };
        let alt = &caps[1];
        match output {
            LinkFormat::Wiki => {
                if alt.is_empty() {
                    format!("![[{}]]", new)
                } else {
                    format!("![[{}|{}]]", new, alt)
                }
            }
            LinkFormat::Markdown => format!("![{}]({})", alt, new),
        }
    });

    after_markdown.into_owned()
}
