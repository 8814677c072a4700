//! Image reference extraction from note text
//!
//! Recognizes both embedding syntaxes over the same text: the wiki form
//! `![[name]]` / `![[name|alt]]` and the markdown form `![alt](name)`.
//! Patterns are compiled once and matched with `captures_iter`, so every
//! non-overlapping occurrence is found without any shared resume state.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Wiki embed: the name may not contain `]`, `|`, or `#`; an optional
/// `|alt` segment is consumed but not captured.
static WIKI_EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]|#]+)(?:\|[^\]]*)?\]\]").unwrap());

/// Markdown embed: the name may not contain whitespace or `)`.
static MARKDOWN_EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*\]\(([^\s)]+)\)").unwrap());

/// Extract the distinct image references from note text.
///
/// Returns raw names in first-occurrence order, with wiki embeds scanned
/// before markdown embeds. A name already seen in either syntax is not
/// re-added; later occurrences are handled by the rewriter, not here.
pub fn extract_image_links(content: &str) -> Vec<String> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();

    for re in [&*WIKI_EMBED_RE, &*MARKDOWN_EMBED_RE] {
        for cap in re.captures_iter(content) {
            let name = cap[1].trim().to_string();
            if seen.insert(name.clone()) {
                links.push(name);
            }
        }
    }

    links
}
