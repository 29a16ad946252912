/// Parts of the header language menu the pointer can be over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownRegion {
    /// The button that opens the menu
    Trigger,
    /// The whole language nav (contains the trigger)
    Nav,
    /// The opened list of languages
    List,
}

/// Hover-driven language dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LangDropdown {
    open: bool,
}

impl LangDropdown {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Pointer entered a region; only the trigger opens the menu
    pub fn pointer_enter(&mut self, region: DropdownRegion) {
        if region == DropdownRegion::Trigger {
            self.open = true;
        }
    }

    /// Pointer left `region` towards `related` (`None` when it went somewhere else).
    /// Moving between the nav area and the list keeps the menu open.
    pub fn pointer_leave(&mut self, region: DropdownRegion, related: Option<DropdownRegion>) {
        if region == DropdownRegion::Trigger {
            return;
        }
        if related.is_some() {
            return;
        }
        self.open = false;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_on_trigger_only() {
        let mut dropdown = LangDropdown::default();
        dropdown.pointer_enter(DropdownRegion::Nav);
        assert!(!dropdown.is_open());
        dropdown.pointer_enter(DropdownRegion::Trigger);
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_moving_between_nav_and_list_keeps_open() {
        let mut dropdown = LangDropdown::default();
        dropdown.pointer_enter(DropdownRegion::Trigger);
        dropdown.pointer_leave(DropdownRegion::Nav, Some(DropdownRegion::List));
        assert!(dropdown.is_open());
        dropdown.pointer_leave(DropdownRegion::List, Some(DropdownRegion::Trigger));
        assert!(dropdown.is_open());
    }

    #[test]
    fn test_leaving_the_area_closes() {
        let mut dropdown = LangDropdown::default();
        dropdown.pointer_enter(DropdownRegion::Trigger);
        dropdown.pointer_leave(DropdownRegion::List, None);
        assert!(!dropdown.is_open());

        dropdown.pointer_enter(DropdownRegion::Trigger);
        dropdown.pointer_leave(DropdownRegion::Nav, None);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_leaving_trigger_alone_has_no_handler() {
        let mut dropdown = LangDropdown::default();
        dropdown.pointer_enter(DropdownRegion::Trigger);
        dropdown.pointer_leave(DropdownRegion::Trigger, None);
        assert!(dropdown.is_open());
    }
}
