//! Standalone embed syntax conversion
//!
//! Bidirectional wiki / markdown transforms over full note text, independent
//! of any rename mapping. Both report "nothing to convert" as `None`,
//! distinct from an error.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Wiki embed with the alt segment captured. Unlike extraction, the name here
/// is the whole target before `|`, so an anchor travels with it.
static WIKI_EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[\[([^\]|]+)(?:\|([^\]]*))?\]\]").unwrap());

/// Markdown embed with the alt text captured.
static MARKDOWN_EMBED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^\s)]+)\)").unwrap());

/// Convert every wiki embed to markdown form.
///
/// `![[name]]` becomes `![](name)`; `![[name|alt]]` becomes `![alt](name)`.
/// Returns `None` when no embed was found.
pub fn wiki_to_markdown(content: &str) -> Option<String> {
    let out = WIKI_EMBED_RE.replace_all(content, |caps: &Captures| {
        let name = caps[1].trim();
        let alt = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        format!("![{}]({})", alt, name)
    });

    if out == content {
        None
    } else {
        Some(out.into_owned())
    }
}

/// Convert every markdown embed to wiki form.
///
/// `![](name)` becomes `![[name]]`; `![alt](name)` becomes `![[name|alt]]`.
/// Returns `None` when no embed was found.
pub fn markdown_to_wiki(content: &str) -> Option<String> {
    let out = MARKDOWN_EMBED_RE.replace_all(content, |caps: &Captures| {
        let alt = &caps[1];
        let name = &caps[2];
        if alt.is_empty() {
            format!("![[{}]]", name)
        } else {
            format!("![[{}|{}]]", name, alt)
        }
    });

    if out == content {
        None
    } else {
        Some(out.into_owned())
    }
}
