use std::sync::OnceLock;

use regex::Regex;

/// Identifier pattern for pager sections: `p` followed by one or more digits
const SECTION_ID_PATTERN: &str = r"^p\d+$";

fn section_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SECTION_ID_PATTERN).expect("section id pattern is valid"))
}

/// Check whether an element identifier names a pager section
pub fn is_section_id(id: &str) -> bool {
    section_id_regex().is_match(id)
}

/// Ordered, fixed list of section identifiers in document order
///
/// Offsets are deliberately not stored here; the host reports them on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionList {
    ids: Vec<String>,
}

impl SectionList {
    /// Collect sections from document-ordered element identifiers,
    /// keeping only those that match the section pattern.
    pub fn collect<I, S>(element_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = element_ids
            .into_iter()
            .filter(|id| is_section_id(id.as_ref()))
            .map(|id| id.as_ref().to_string())
            .collect();
        Self { ids }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|s| s == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    /// The terminal section
    pub fn last(&self) -> Option<&str> {
        self.ids.last().map(String::as_str)
    }

    pub fn is_first(&self, id: &str) -> bool {
        self.first() == Some(id)
    }

    pub fn is_last(&self, id: &str) -> bool {
        self.last() == Some(id)
    }

    /// Index of the last section
    pub fn last_index(&self) -> Option<usize> {
        self.ids.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_pattern() {
        assert!(is_section_id("p1"));
        assert!(is_section_id("p42"));
        assert!(!is_section_id("p"));
        assert!(!is_section_id("P1"));
        assert!(!is_section_id("p1a"));
        assert!(!is_section_id("pricing"));
        assert!(!is_section_id("xp1"));
    }

    #[test]
    fn test_collect_keeps_document_order() {
        let list = SectionList::collect(["p1", "banner", "p3", "p2", "pricing", "p10"]);
        let ids: Vec<&str> = list.iter().collect();
        assert_eq!(ids, vec!["p1", "p3", "p2", "p10"]);
        assert_eq!(list.last(), Some("p10"));
        assert_eq!(list.index_of("p2"), Some(2));
        assert!(list.is_first("p1"));
        assert!(list.is_last("p10"));
        assert!(!list.is_last("p3"));
    }

    #[test]
    fn test_empty_list() {
        let list = SectionList::collect(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.last_index(), None);
        assert!(!list.is_first("p1"));
        assert!(!list.is_last("p1"));
    }
}
