//! Screen geometry of the header and the side pager
//!
//! Widgets draw from these rects and the app hit-tests pointer events
//! against the same ones.

use ratatui::layout::Rect;
use snapdeck_core::effects::DropdownRegion;
use snapdeck_core::page::LanguageLink;
use snapdeck_core::pager::PagerWidget;
use unicode_width::UnicodeWidthStr;

const TRIGGER_ARROW: &str = " ▾";

pub fn hit(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Label shown on the language trigger
pub fn trigger_label(languages: &[LanguageLink]) -> Option<String> {
    let current = languages
        .iter()
        .find(|l| l.current)
        .or_else(|| languages.first())?;
    Some(format!("{}{}", current.label, TRIGGER_ARROW))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLayout {
    pub bar: Rect,
    pub brand: Rect,
    /// Empty when the page has no languages
    pub trigger: Rect,
    pub nav: Rect,
    pub list: Rect,
    /// One row per language, only while the dropdown is open
    pub items: Vec<Rect>,
}

impl HeaderLayout {
    pub fn compute(area: Rect, brand: &str, languages: &[LanguageLink], open: bool) -> Self {
        if area.width == 0 || area.height == 0 {
            return Self::default();
        }
        let bar = Rect::new(area.x, area.y, area.width, 1);
        let brand = Rect::new(
            area.x.saturating_add(2).min(area.right()),
            area.y,
            (brand.width() as u16).min(area.width.saturating_sub(2)),
            1,
        );

        let Some(label) = trigger_label(languages) else {
            return Self {
                bar,
                brand,
                ..Self::default()
            };
        };

        let trigger_width = (label.width() as u16 + 2).min(area.width);
        let trigger_x = area.right().saturating_sub(trigger_width + 1).max(area.x);
        let trigger = Rect::new(trigger_x, area.y, trigger_width, 1);
        let nav = Rect::new(
            trigger_x.saturating_sub(1).max(area.x),
            area.y,
            (trigger_width + 2).min(area.right() - trigger_x.saturating_sub(1).max(area.x)),
            1,
        );

        let mut list = Rect::default();
        let mut items = Vec::new();
        if open {
            let widest = languages
                .iter()
                .map(|l| l.label.width() as u16 + 2)
                .max()
                .unwrap_or(0)
                .max(trigger_width);
            let width = widest.min(area.right() - trigger_x);
            let rows = (languages.len() as u16).min(area.height.saturating_sub(1));
            list = Rect::new(trigger_x, area.y + 1, width, rows);
            items = (0..rows)
                .map(|row| Rect::new(trigger_x, list.y + row, width, 1))
                .collect();
        }

        Self {
            bar,
            brand,
            trigger,
            nav,
            list,
            items,
        }
    }

    /// Innermost dropdown region under the pointer
    pub fn region_at(&self, col: u16, row: u16) -> Option<DropdownRegion> {
        if hit(self.trigger, col, row) {
            Some(DropdownRegion::Trigger)
        } else if hit(self.list, col, row) {
            Some(DropdownRegion::List)
        } else if hit(self.nav, col, row) {
            Some(DropdownRegion::Nav)
        } else {
            None
        }
    }

    pub fn language_at(&self, col: u16, row: u16) -> Option<usize> {
        self.items.iter().position(|r| hit(*r, col, row))
    }
}

/// Vertical column of pager items along the right edge
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidePagerLayout {
    pub column: Rect,
    pub items: Vec<Rect>,
}

impl SidePagerLayout {
    pub fn compute(area: Rect, widget: &PagerWidget) -> Self {
        let usable = area.height.saturating_sub(2);
        if widget.is_empty() || usable == 0 {
            return Self::default();
        }

        let width = widget
            .items()
            .iter()
            .map(|item| item.label.width() as u16 + 2)
            .max()
            .unwrap_or(0)
            .min(area.width);
        let rows = (widget.items().len() as u16).min(usable);
        let x = area.right().saturating_sub(width + 1).max(area.x);
        let y = area.y + (area.height - rows) / 2;

        Self {
            column: Rect::new(x, y, width, rows),
            items: (0..rows).map(|row| Rect::new(x, y + row, width, 1)).collect(),
        }
    }

    pub fn item_at(&self, col: u16, row: u16) -> Option<usize> {
        self.items.iter().position(|r| hit(*r, col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdeck_core::pager::{SectionList, WidgetItem};

    fn languages() -> Vec<LanguageLink> {
        vec![
            LanguageLink {
                label: "KOR".to_string(),
                href: "/ko/".to_string(),
                current: false,
            },
            LanguageLink {
                label: "ENG".to_string(),
                href: "/en/".to_string(),
                current: true,
            },
        ]
    }

    #[test]
    fn test_trigger_shows_current_language() {
        assert_eq!(trigger_label(&languages()).as_deref(), Some("ENG ▾"));
        assert_eq!(trigger_label(&[]), None);
    }

    #[test]
    fn test_header_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let closed = HeaderLayout::compute(area, "BRAND", &languages(), false);
        assert_eq!(closed.trigger, Rect::new(72, 0, 7, 1));
        assert!(closed.items.is_empty());
        assert_eq!(closed.region_at(73, 0), Some(DropdownRegion::Trigger));
        assert_eq!(closed.region_at(71, 0), Some(DropdownRegion::Nav));
        assert_eq!(closed.region_at(10, 0), None);
        assert_eq!(closed.region_at(73, 1), None);

        let open = HeaderLayout::compute(area, "BRAND", &languages(), true);
        assert_eq!(open.items.len(), 2);
        assert_eq!(open.region_at(73, 1), Some(DropdownRegion::List));
        assert_eq!(open.language_at(73, 2), Some(1));
        assert_eq!(open.language_at(73, 3), None);
    }

    #[test]
    fn test_header_without_languages() {
        let layout = HeaderLayout::compute(Rect::new(0, 0, 40, 10), "BRAND", &[], true);
        assert_eq!(layout.trigger, Rect::default());
        assert_eq!(layout.region_at(39, 0), None);
        assert_eq!(layout.brand.width, 5);
    }

    #[test]
    fn test_side_pager_is_centered_on_right_edge() {
        let widget = PagerWidget::for_sections(&SectionList::collect(["p1", "p2", "p3"]));
        let layout = SidePagerLayout::compute(Rect::new(0, 0, 80, 21), &widget);
        assert_eq!(layout.items.len(), 3);
        assert_eq!(layout.column, Rect::new(75, 9, 4, 3));
        assert_eq!(layout.item_at(76, 10), Some(1));
        assert_eq!(layout.item_at(70, 10), None);
    }

    #[test]
    fn test_side_pager_clips_to_height() {
        let widget = PagerWidget::new(
            (1..=9)
                .map(|n| WidgetItem::new(format!("#p{}", n), format!("{:02}", n)))
                .collect(),
        );
        let layout = SidePagerLayout::compute(Rect::new(0, 0, 80, 6), &widget);
        assert_eq!(layout.items.len(), 4);
    }
}
