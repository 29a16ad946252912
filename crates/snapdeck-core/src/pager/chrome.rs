//! Side pager widget items and the header/pager visual state derived from
//! the active section.

use super::section::SectionList;

/// Marker class for hidden header or pager widget
pub const HIDDEN_CLASS: &str = "is-hidden";
/// Marker class for the active widget item
pub const ACTIVE_CLASS: &str = "on";

/// One link in the side pager widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetItem {
    /// Link target in fragment form, e.g. `#p3`
    pub href: String,
    pub label: String,
    active: bool,
}

impl WidgetItem {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            active: false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Section identifier this item points at, if the href is a fragment
    pub fn target_id(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }

    /// Class attribute as a host would render it; `None` means no attribute at all
    pub fn class_attr(&self) -> Option<&'static str> {
        self.active.then_some(ACTIVE_CLASS)
    }
}

/// Ordered link items of the side pager
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagerWidget {
    items: Vec<WidgetItem>,
}

impl PagerWidget {
    pub fn new(items: Vec<WidgetItem>) -> Self {
        Self { items }
    }

    /// One item per section, labelled by position
    pub fn for_sections(sections: &SectionList) -> Self {
        let items = sections
            .iter()
            .enumerate()
            .map(|(idx, id)| WidgetItem::new(format!("#{}", id), format!("{:02}", idx + 1)))
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[WidgetItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.active)
    }

    /// Clear every marker, then mark the first item targeting `id`
    pub(crate) fn mark_active(&mut self, id: &str) {
        for item in &mut self.items {
            item.active = false;
        }
        let target = format!("#{}", id);
        if let Some(item) = self.items.iter_mut().find(|item| item.href == target) {
            item.active = true;
        }
    }
}

/// Header colour variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Ivory foreground over the hero section
    #[default]
    Light,
    /// Black foreground everywhere else
    Dark,
}

impl Tone {
    pub fn class_name(&self) -> &'static str {
        match self {
            Tone::Light => "ivory",
            Tone::Dark => "black",
        }
    }
}

/// Visibility and colour of the header and side pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeState {
    pub pager_hidden: bool,
    pub header_hidden: bool,
    pub tone: Tone,
}

impl ChromeState {
    /// Derive the chrome for an active section identifier
    pub fn for_section(sections: &SectionList, id: &str) -> Self {
        let is_first = sections.is_first(id);
        let is_last = sections.is_last(id);
        Self {
            pager_hidden: is_first || is_last,
            header_hidden: is_last,
            tone: if is_first { Tone::Light } else { Tone::Dark },
        }
    }

    pub fn pager_classes(&self) -> Vec<&'static str> {
        if self.pager_hidden {
            vec![HIDDEN_CLASS]
        } else {
            Vec::new()
        }
    }

    pub fn header_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.header_hidden {
            classes.push(HIDDEN_CLASS);
        }
        classes.push(self.tone.class_name());
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nine() -> SectionList {
        SectionList::collect((1..=9).map(|n| format!("p{}", n)))
    }

    #[test]
    fn test_chrome_first_middle_last() {
        let sections = nine();

        let first = ChromeState::for_section(&sections, "p1");
        assert!(first.pager_hidden);
        assert!(!first.header_hidden);
        assert_eq!(first.tone, Tone::Light);

        let middle = ChromeState::for_section(&sections, "p5");
        assert!(!middle.pager_hidden);
        assert!(!middle.header_hidden);
        assert_eq!(middle.tone, Tone::Dark);

        let last = ChromeState::for_section(&sections, "p9");
        assert!(last.pager_hidden);
        assert!(last.header_hidden);
        assert_eq!(last.tone, Tone::Dark);
        assert_eq!(last.header_classes(), vec![HIDDEN_CLASS, "black"]);
    }

    #[test]
    fn test_mark_active_is_exclusive() {
        let mut widget = PagerWidget::for_sections(&nine());
        widget.mark_active("p3");
        widget.mark_active("p4");
        assert_eq!(widget.active_index(), Some(3));
        assert_eq!(widget.items().iter().filter(|i| i.is_active()).count(), 1);
        assert_eq!(widget.items()[2].class_attr(), None);
        assert_eq!(widget.items()[3].class_attr(), Some(ACTIVE_CLASS));
    }

    #[test]
    fn test_mark_active_stops_at_first_match() {
        let mut widget = PagerWidget::new(vec![
            WidgetItem::new("#p2", "a"),
            WidgetItem::new("#p2", "b"),
        ]);
        widget.mark_active("p2");
        assert_eq!(widget.active_index(), Some(0));
        assert!(!widget.items()[1].is_active());
    }

    #[test]
    fn test_unknown_id_clears_all() {
        let mut widget = PagerWidget::for_sections(&nine());
        widget.mark_active("p2");
        widget.mark_active("nowhere");
        assert_eq!(widget.active_index(), None);
    }

    #[test]
    fn test_target_id() {
        assert_eq!(WidgetItem::new("#p7", "").target_id(), Some("p7"));
        assert_eq!(WidgetItem::new("#", "").target_id(), None);
        assert_eq!(WidgetItem::new("https://example.com", "").target_id(), None);
    }
}
