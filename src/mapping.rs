//! Rename mapping construction
//!
//! Combines extracted references with the name generator into an ordered
//! old-name to new-name mapping. Built fresh per invocation and discarded
//! after the rewrite completes.

use crate::naming;
use crate::settings::Settings;

/// Ordered mapping from old raw names to new canonical names.
///
/// Keys are unique; iteration follows document order so index assignment is
/// predictable to a reader going top to bottom.
#[derive(Debug, Clone, Default)]
pub struct RenameMapping {
    entries: Vec<(String, String)>,
}

impl RenameMapping {
    /// Look up the new name for an old raw name.
    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(o, _)| o == old)
            .map(|(_, n)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(o, n)| (o.as_str(), n.as_str()))
    }
}

/// Build the rename mapping for one run.
///
/// References already matching the canonical pattern for the current prefix
/// and date are skipped, so re-running over an already-renamed note is a
/// no-op for those entries. The rest keep extractor order and receive
/// strictly increasing indices from `settings.start_index`.
pub fn build_mapping(
    references: &[String],
    prefix: &str,
    date_str: &str,
    settings: &Settings,
) -> RenameMapping {
    let canonical = naming::canonical_name_pattern(prefix, date_str, settings.pad_length);

    let mut entries = Vec::new();
    let mut index = settings.start_index;

    for old in references.iter().filter(|r| !canonical.is_match(r)) {
        let ext = naming::extension_of(old);
        let new = naming::generate_name(prefix, date_str, index, settings.pad_length, ext);
        entries.push((old.clone(), new));
        index += 1;
    }

    RenameMapping { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_basic_mapping() {
        let settings = Settings::default();
        let mapping = build_mapping(&refs(&["pic1.png", "pic2.jpg"]), "zd", "", &settings);

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("pic1.png"), Some("zd-001.png"));
        assert_eq!(mapping.get("pic2.jpg"), Some("zd-002.jpg"));
    }

    #[test]
    fn test_document_order_drives_index_assignment() {
        let settings = Settings::default();
        let mapping = build_mapping(&refs(&["zebra.png", "apple.png"]), "zd", "", &settings);

        // Extractor order, not sorted order.
        let entries: Vec<_> = mapping.iter().collect();
        assert_eq!(entries[0], ("zebra.png", "zd-001.png"));
        assert_eq!(entries[1], ("apple.png", "zd-002.png"));
    }

    #[test]
    fn test_already_canonical_names_skipped() {
        let settings = Settings::default();
        let mapping = build_mapping(
            &refs(&["zd0101-001.png", "holiday.jpg"]),
            "zd",
            "0101",
            &settings,
        );

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("zd0101-001.png"), None);
        assert_eq!(mapping.get("holiday.jpg"), Some("zd0101-001.jpg"));
    }

    #[test]
    fn test_all_canonical_yields_empty_mapping() {
        let settings = Settings::default();
        let mapping = build_mapping(
            &refs(&["zd0101-001.png", "zd0101-002.jpg"]),
            "zd",
            "0101",
            &settings,
        );
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_no_references_yields_empty_mapping() {
        let settings = Settings::default();
        assert!(build_mapping(&[], "zd", "", &settings).is_empty());
    }

    #[test]
    fn test_indices_are_monotonic_from_start_index() {
        let settings = Settings {
            start_index: 5,
            ..Settings::default()
        };
        let mapping = build_mapping(&refs(&["a.png", "b.png", "c.png"]), "zd", "", &settings);

        let news: Vec<_> = mapping.iter().map(|(_, n)| n.to_string()).collect();
        assert_eq!(news, vec!["zd-005.png", "zd-006.png", "zd-007.png"]);
    }

    #[test]
    fn test_canonical_names_from_other_prefix_still_renamed() {
        let settings = Settings::default();
        let mapping = build_mapping(&refs(&["img-001.png"]), "zd", "", &settings);
        assert_eq!(mapping.get("img-001.png"), Some("zd-001.png"));
    }

    #[test]
    fn test_no_two_old_names_share_a_new_name() {
        let settings = Settings::default();
        let mapping = build_mapping(
            &refs(&["a.png", "b.png", "c.jpg", "d.png"]),
            "zd",
            "1128",
            &settings,
        );

        let mut news: Vec<_> = mapping.iter().map(|(_, n)| n.to_string()).collect();
        news.sort();
        news.dedup();
        assert_eq!(news.len(), mapping.len());
    }

    #[test]
    fn test_extension_preserved_and_defaulted() {
        let settings = Settings::default();
        let mapping = build_mapping(&refs(&["scan.webp", "pasted image"]), "zd", "", &settings);

        assert_eq!(mapping.get("scan.webp"), Some("zd-001.webp"));
        assert_eq!(mapping.get("pasted image"), Some("zd-002.png"));
    }
}
