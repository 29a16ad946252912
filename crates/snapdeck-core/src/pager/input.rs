/// Navigation keys the pager understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerKey {
    Up,
    Down,
    Left,
    Right,
}

impl PagerKey {
    /// Down and right move forward; up and left move back
    #[inline]
    pub fn is_next(&self) -> bool {
        matches!(self, PagerKey::Down | PagerKey::Right)
    }
}

/// What currently holds input focus on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusKind {
    #[default]
    None,
    TextField,
    TextArea,
    Select,
    ContentEditable,
    Other,
}

impl FocusKind {
    /// Controls where arrow keys belong to the user, not the pager
    #[inline]
    pub fn is_text_input(&self) -> bool {
        matches!(
            self,
            FocusKind::TextField | FocusKind::TextArea | FocusKind::Select | FocusKind::ContentEditable
        )
    }
}

/// What the host should do with the raw event after the pager looked at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutcome {
    /// Suppress the host's native handling (e.g. native scrolling)
    pub prevent_default: bool,
    /// Section index a transition was started towards
    pub transition: Option<usize>,
    /// Drop focus from the element that received the event
    pub blur: bool,
}

impl InputOutcome {
    /// Pager did nothing; let the host proceed
    pub fn ignored() -> Self {
        Self::default()
    }

    /// Native handling suppressed without starting a transition
    pub fn blocked() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }

    pub fn requested(index: usize) -> Self {
        Self {
            prevent_default: true,
            transition: Some(index),
            blur: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_focus() {
        assert!(FocusKind::TextField.is_text_input());
        assert!(FocusKind::TextArea.is_text_input());
        assert!(FocusKind::Select.is_text_input());
        assert!(FocusKind::ContentEditable.is_text_input());
        assert!(!FocusKind::None.is_text_input());
        assert!(!FocusKind::Other.is_text_input());
    }

    #[test]
    fn test_key_direction() {
        assert!(PagerKey::Down.is_next());
        assert!(PagerKey::Right.is_next());
        assert!(!PagerKey::Up.is_next());
        assert!(!PagerKey::Left.is_next());
    }
}
