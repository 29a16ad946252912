//! Full-page section pager
//!
//! Maps continuous scroll position onto a discrete active section, keeps the
//! side pager widget and header chrome in sync with it, and turns wheel,
//! keyboard and widget clicks into eased programmatic transitions.
//!
//! The pager never touches a page directly. Hosts implement [`Surface`],
//! forward their input events to the `on_*` handlers and call
//! [`Pager::frame`] once per display tick while [`Pager::is_animating`].

mod chrome;
mod input;
mod section;
mod surface;

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::PagerConfig;
use crate::motion::timing::{is_complete, lerp, progress};
use crate::motion::Easing;

pub use chrome::{ChromeState, PagerWidget, Tone, WidgetItem, ACTIVE_CLASS, HIDDEN_CLASS};
pub use input::{FocusKind, InputOutcome, PagerKey};
pub use section::{is_section_id, SectionList};
pub use surface::Surface;

/// Curve used for section transitions
const TRANSITION_EASING: Easing = Easing::SineInOut;

/// An in-flight programmatic scroll
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Section index being scrolled to
    pub target: usize,
    /// Scroll offset when the transition started
    pub from: f64,
    /// Top offset of the target section, refreshed from the surface every frame
    pub to: f64,
    pub started: Instant,
    pub duration: Duration,
    /// Identifies this transition; completions carrying an older value are ignored
    pub generation: u64,
}

impl Transition {
    /// Scroll offset the transition prescribes at `now`
    pub fn offset_at(&self, now: Instant) -> f64 {
        let t = progress(self.started, now, self.duration);
        if t >= 1.0 {
            self.to
        } else {
            lerp(self.from, self.to, TRANSITION_EASING.apply(t))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PagerState {
    #[default]
    Idle,
    Transitioning(Transition),
}

/// Section pager state machine
#[derive(Debug, Clone)]
pub struct Pager {
    sections: SectionList,
    widget: PagerWidget,
    chrome: ChromeState,
    current_index: usize,
    state: PagerState,
    generation: u64,
    config: PagerConfig,
}

impl Pager {
    pub fn new(sections: SectionList, widget: PagerWidget, config: PagerConfig) -> Self {
        Self {
            sections,
            widget,
            chrome: ChromeState::default(),
            current_index: 0,
            state: PagerState::Idle,
            generation: 0,
            config,
        }
    }

    /// Resolve the initial active section from the surface and apply its state
    pub fn init<S: Surface>(&mut self, surface: &S) {
        self.update_from_scroll(surface);
        if let Some(id) = self.current_id().map(str::to_string) {
            self.activate(&id);
        }
        debug!(
            sections = self.sections.len(),
            current = self.current_index,
            "pager initialised"
        );
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn widget(&self) -> &PagerWidget {
        &self.widget
    }

    pub fn chrome(&self) -> ChromeState {
        self.chrome
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_id(&self) -> Option<&str> {
        self.sections.get(self.current_index)
    }

    pub fn state(&self) -> &PagerState {
        &self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, PagerState::Transitioning(_))
    }

    /// Index of the furthest section whose top has crossed the viewport midpoint.
    /// Keeps the current index when no section qualifies.
    pub fn resolve_index<S: Surface>(&self, surface: &S) -> usize {
        let scroll_top = surface.scroll_top();
        let half_viewport = surface.viewport_height() / 2.0;
        let mut resolved = self.current_index;
        for (idx, id) in self.sections.iter().enumerate() {
            if let Some(top) = surface.section_top(id) {
                if scroll_top >= top - half_viewport {
                    resolved = idx;
                }
            }
        }
        resolved
    }

    /// Recompute the active section after native scrolling.
    /// Returns true when the active section changed.
    pub fn update_from_scroll<S: Surface>(&mut self, surface: &S) -> bool {
        if self.is_animating() || self.sections.is_empty() {
            return false;
        }
        let resolved = self.resolve_index(surface);
        trace!(scroll_top = surface.scroll_top(), resolved, "resolved active section");
        if resolved == self.current_index {
            return false;
        }
        self.current_index = resolved;
        if let Some(id) = self.current_id().map(str::to_string) {
            self.activate(&id);
        }
        true
    }

    /// Native scroll notification
    pub fn on_scroll<S: Surface>(&mut self, surface: &S) -> bool {
        self.update_from_scroll(surface)
    }

    /// Viewport resize notification
    pub fn on_resize<S: Surface>(&mut self, surface: &S) -> bool {
        self.update_from_scroll(surface)
    }

    /// Mark the widget item for `id` active and recompute header/pager chrome
    pub fn activate(&mut self, id: &str) {
        self.widget.mark_active(id);
        self.chrome = ChromeState::for_section(&self.sections, id);
    }

    /// Start a transition to the section with the given identifier
    pub fn transition_to_id<S: Surface>(&mut self, id: &str, surface: &S, now: Instant) -> Option<u64> {
        let index = self.sections.index_of(id)?;
        self.transition_to(index, surface, now)
    }

    /// Start a transition to a section index, replacing any transition in flight.
    /// Returns the new transition's generation, or `None` when the target cannot be resolved.
    pub fn transition_to<S: Surface>(&mut self, index: usize, surface: &S, now: Instant) -> Option<u64> {
        let id = self.sections.get(index)?.to_string();
        let to = surface.section_top(&id)?;

        if let PagerState::Transitioning(previous) = self.state {
            debug!(
                superseded = previous.generation,
                from_target = previous.target,
                to_target = index,
                "superseding in-flight transition"
            );
        }

        self.generation += 1;
        let transition = Transition {
            target: index,
            from: surface.scroll_top(),
            to,
            started: now,
            duration: self.config.transition_duration(),
            generation: self.generation,
        };
        self.state = PagerState::Transitioning(transition);
        self.current_index = index;
        self.activate(&id);

        debug!(
            target = %id,
            from = transition.from,
            to = transition.to,
            generation = transition.generation,
            "transition started"
        );
        Some(transition.generation)
    }

    /// Advance the in-flight transition to `now`, writing the eased offset to the surface.
    /// The target top is looked up again on every frame so layout changes
    /// mid-flight still land on the section. Returns true while a transition is still running.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now: Instant) -> bool {
        let PagerState::Transitioning(mut transition) = self.state else {
            return false;
        };
        if let Some(top) = self
            .sections
            .get(transition.target)
            .and_then(|id| surface.section_top(id))
        {
            if top != transition.to {
                trace!(from = transition.to, to = top, "target section moved");
                transition.to = top;
            }
        }
        self.state = PagerState::Transitioning(transition);

        surface.set_scroll_top(transition.offset_at(now));
        if is_complete(transition.started, now, transition.duration) {
            self.complete(transition.generation);
            return false;
        }
        true
    }

    /// Finish the transition with the given generation.
    /// Stale completions from superseded transitions are ignored.
    pub fn complete(&mut self, generation: u64) -> bool {
        match self.state {
            PagerState::Transitioning(current) if current.generation == generation => {
                self.state = PagerState::Idle;
                debug!(generation, target = current.target, "transition complete");
                true
            }
            _ => {
                trace!(generation, "ignoring stale transition completion");
                false
            }
        }
    }

    /// Click on a side pager link
    pub fn on_widget_click<S: Surface>(&mut self, href: &str, surface: &S, now: Instant) -> InputOutcome {
        if href.is_empty() {
            return InputOutcome::blocked();
        }
        let target = href
            .strip_prefix('#')
            .and_then(|id| self.sections.index_of(id));
        let transition = match target {
            Some(index) => self.transition_to(index, surface, now).map(|_| index),
            None => None,
        };
        InputOutcome {
            prevent_default: true,
            transition,
            blur: true,
        }
    }

    /// Wheel input; positive `delta_y` scrolls down
    pub fn on_wheel<S: Surface>(&mut self, delta_y: f64, surface: &S, now: Instant) -> InputOutcome {
        if self.is_animating() {
            return if self.config.wheel_block_during_transition {
                InputOutcome::blocked()
            } else {
                InputOutcome::ignored()
            };
        }
        if self.sections.is_empty() {
            return InputOutcome::ignored();
        }

        let target = if delta_y > 0.0 {
            self.next_index()
        } else if delta_y < 0.0 {
            self.prev_index()
        } else {
            None
        };
        self.request(target, surface, now)
    }

    /// Arrow key input. Ignored while a text-input-like control has focus.
    pub fn on_key<S: Surface>(&mut self, key: PagerKey, focus: FocusKind, surface: &S, now: Instant) -> InputOutcome {
        if !self.config.keyboard_navigation
            || focus.is_text_input()
            || self.is_animating()
            || self.sections.is_empty()
        {
            return InputOutcome::ignored();
        }
        let target = if key.is_next() {
            self.next_index()
        } else {
            self.prev_index()
        };
        self.request(target, surface, now)
    }

    fn next_index(&self) -> Option<usize> {
        let last = self.sections.last_index()?;
        (self.current_index < last).then_some(self.current_index + 1)
    }

    fn prev_index(&self) -> Option<usize> {
        self.current_index.checked_sub(1)
    }

    fn request<S: Surface>(&mut self, target: Option<usize>, surface: &S, now: Instant) -> InputOutcome {
        match target {
            Some(index) if self.transition_to(index, surface, now).is_some() => {
                InputOutcome::requested(index)
            }
            _ => InputOutcome::ignored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Equal-height sections stacked from offset zero
    struct StackSurface {
        ids: Vec<String>,
        section_height: f64,
        viewport: f64,
        top: f64,
    }

    impl StackSurface {
        fn new(count: usize, height: f64) -> Self {
            Self {
                ids: (1..=count).map(|n| format!("p{}", n)).collect(),
                section_height: height,
                viewport: height,
                top: 0.0,
            }
        }

        /// Far enough for the last section's top to reach the viewport top
        fn max_scroll(&self) -> f64 {
            let content = self.ids.len() as f64 * self.section_height;
            let last_top = self.ids.len().saturating_sub(1) as f64 * self.section_height;
            (content - self.viewport).max(last_top).max(0.0)
        }
    }

    impl Surface for StackSurface {
        fn scroll_top(&self) -> f64 {
            self.top
        }

        fn viewport_height(&self) -> f64 {
            self.viewport
        }

        fn section_top(&self, id: &str) -> Option<f64> {
            self.ids
                .iter()
                .position(|s| s == id)
                .map(|idx| idx as f64 * self.section_height)
        }

        fn set_scroll_top(&mut self, top: f64) {
            self.top = top.clamp(0.0, self.max_scroll());
        }
    }

    fn pager_for(surface: &StackSurface, config: PagerConfig) -> Pager {
        let sections = SectionList::collect(&surface.ids);
        let widget = PagerWidget::for_sections(&sections);
        let mut pager = Pager::new(sections, widget, config);
        pager.init(surface);
        pager
    }

    fn run_to_end(pager: &mut Pager, surface: &mut StackSurface, start: Instant) {
        let end = start + pager.config().transition_duration();
        pager.frame(surface, end);
    }

    #[test]
    fn test_init_resolves_from_scroll_position() {
        let mut surface = StackSurface::new(5, 40.0);
        surface.top = 85.0;
        let pager = pager_for(&surface, PagerConfig::default());
        // 85 >= 80 - 20 for p3, but 85 < 120 - 20 for p4
        assert_eq!(pager.current_index(), 2);
        assert_eq!(pager.widget().active_index(), Some(2));
    }

    #[test]
    fn test_resolution_uses_viewport_midpoint() {
        let mut surface = StackSurface::new(3, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());

        surface.top = 19.0;
        assert!(!pager.on_scroll(&surface));
        assert_eq!(pager.current_index(), 0);

        surface.top = 20.0;
        assert!(pager.on_scroll(&surface));
        assert_eq!(pager.current_index(), 1);
    }

    #[test]
    fn test_resolution_is_monotonic() {
        let mut surface = StackSurface::new(6, 30.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let mut prev = 0;
        for step in 0..=150 {
            surface.set_scroll_top(step as f64);
            pager.on_scroll(&surface);
            assert!(pager.current_index() >= prev, "index decreased at {}", step);
            prev = pager.current_index();
        }
        assert_eq!(prev, 5);
    }

    #[test]
    fn test_activate_is_idempotent() {
        let surface = StackSurface::new(4, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        pager.activate("p2");
        let (chrome, active) = (pager.chrome(), pager.widget().active_index());
        pager.activate("p2");
        assert_eq!(pager.chrome(), chrome);
        assert_eq!(pager.widget().active_index(), active);
        assert_eq!(
            pager.widget().items().iter().filter(|i| i.is_active()).count(),
            1
        );
    }

    #[test]
    fn test_transition_updates_state_immediately() {
        let surface = StackSurface::new(5, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let now = Instant::now();

        let generation = pager.transition_to(3, &surface, now);
        assert!(generation.is_some());
        assert!(pager.is_animating());
        assert_eq!(pager.current_index(), 3);
        assert_eq!(pager.widget().active_index(), Some(3));
        assert_eq!(pager.chrome().tone, Tone::Dark);
        // Surface has not moved yet
        assert_eq!(surface.scroll_top(), 0.0);
    }

    #[test]
    fn test_transition_eases_and_lands_exactly() {
        let mut surface = StackSurface::new(5, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();
        pager.transition_to(2, &surface, start);

        assert!(pager.frame(&mut surface, start + Duration::from_millis(400)));
        // Cosine ease-in-out is exactly half way at half time
        assert!((surface.scroll_top() - 40.0).abs() < 1e-9);

        assert!(pager.frame(&mut surface, start + Duration::from_millis(100)));
        assert!(surface.scroll_top() < 40.0);

        assert!(!pager.frame(&mut surface, start + Duration::from_millis(900)));
        assert_eq!(surface.scroll_top(), 80.0);
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_scroll_ignored_while_animating() {
        let mut surface = StackSurface::new(5, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();
        pager.transition_to(4, &surface, start);

        surface.top = 0.0;
        assert!(!pager.on_scroll(&surface));
        assert!(!pager.on_resize(&surface));
        assert_eq!(pager.current_index(), 4);

        run_to_end(&mut pager, &mut surface, start);
        assert_eq!(pager.current_index(), 4);
    }

    #[test]
    fn test_layout_change_mid_transition_lands_on_target() {
        let mut surface = StackSurface::new(5, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();
        pager.transition_to(4, &surface, start);
        pager.frame(&mut surface, start + Duration::from_millis(300));

        // Sections grow while the transition is running
        surface.section_height = 64.0;
        surface.viewport = 64.0;
        assert!(!pager.on_resize(&surface));

        assert!(!pager.frame(&mut surface, start + Duration::from_millis(900)));
        assert_eq!(surface.scroll_top(), 256.0);
        assert!(!pager.on_scroll(&surface));
        assert_eq!(pager.current_id(), Some("p5"));
    }

    #[test]
    fn test_short_last_section_stays_active_after_landing() {
        let mut surface = StackSurface::new(3, 40.0);
        // Surface allows the last section's top to reach the viewport top
        surface.viewport = 100.0;
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();

        pager.transition_to(2, &surface, start);
        assert!(pager.chrome().header_hidden);
        run_to_end(&mut pager, &mut surface, start);
        assert!(!pager.on_scroll(&surface));
        assert_eq!(pager.current_id(), Some("p3"));
        assert!(pager.chrome().header_hidden);
        assert!(pager.chrome().pager_hidden);
    }

    #[test]
    fn test_new_transition_supersedes_old() {
        let mut surface = StackSurface::new(6, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();

        let first = pager.transition_to(5, &surface, start).unwrap();
        pager.frame(&mut surface, start + Duration::from_millis(200));
        let mid = surface.scroll_top();
        let second = pager.transition_to(1, &surface, start + Duration::from_millis(200)).unwrap();
        assert_ne!(first, second);

        match pager.state() {
            PagerState::Transitioning(t) => {
                assert_eq!(t.target, 1);
                assert_eq!(t.from, mid);
            }
            PagerState::Idle => panic!("expected a transition"),
        }

        // Stale completion must not clear the newer transition
        assert!(!pager.complete(first));
        assert!(pager.is_animating());
        assert!(pager.complete(second));
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_wheel_moves_one_section() {
        let mut surface = StackSurface::new(4, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();

        let outcome = pager.on_wheel(3.0, &surface, start);
        assert_eq!(outcome, InputOutcome::requested(1));
        run_to_end(&mut pager, &mut surface, start);

        let outcome = pager.on_wheel(-1.0, &surface, start);
        assert_eq!(outcome.transition, Some(0));
    }

    #[test]
    fn test_wheel_at_edges_is_noop() {
        let mut surface = StackSurface::new(3, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let now = Instant::now();

        assert_eq!(pager.on_wheel(-5.0, &surface, now), InputOutcome::ignored());
        assert_eq!(pager.current_index(), 0);

        surface.top = surface.max_scroll();
        pager.on_scroll(&surface);
        assert_eq!(pager.current_index(), 2);
        assert_eq!(pager.on_wheel(5.0, &surface, now), InputOutcome::ignored());
        assert!(!pager.is_animating());
    }

    #[test]
    fn test_wheel_blocking_variants() {
        let surface = StackSurface::new(4, 40.0);
        let now = Instant::now();

        let mut blocking = pager_for(&surface, PagerConfig::default());
        blocking.transition_to(2, &surface, now);
        assert_eq!(blocking.on_wheel(1.0, &surface, now), InputOutcome::blocked());

        let config = PagerConfig {
            wheel_block_during_transition: false,
            ..Default::default()
        };
        let mut passthrough = pager_for(&surface, config);
        passthrough.transition_to(2, &surface, now);
        assert_eq!(passthrough.on_wheel(1.0, &surface, now), InputOutcome::ignored());
        assert_eq!(passthrough.current_index(), 2);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut surface = StackSurface::new(3, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let start = Instant::now();

        assert_eq!(
            pager.on_key(PagerKey::Up, FocusKind::None, &surface, start),
            InputOutcome::ignored()
        );
        let outcome = pager.on_key(PagerKey::Right, FocusKind::None, &surface, start);
        assert_eq!(outcome.transition, Some(1));

        // Input is refused mid-transition
        assert_eq!(
            pager.on_key(PagerKey::Down, FocusKind::None, &surface, start),
            InputOutcome::ignored()
        );
        run_to_end(&mut pager, &mut surface, start);

        let outcome = pager.on_key(PagerKey::Left, FocusKind::Other, &surface, start);
        assert_eq!(outcome.transition, Some(0));
    }

    #[test]
    fn test_keyboard_ignored_in_text_input() {
        let surface = StackSurface::new(3, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let now = Instant::now();
        for focus in [
            FocusKind::TextField,
            FocusKind::TextArea,
            FocusKind::Select,
            FocusKind::ContentEditable,
        ] {
            assert_eq!(
                pager.on_key(PagerKey::Down, focus, &surface, now),
                InputOutcome::ignored()
            );
        }
        assert_eq!(pager.current_index(), 0);
    }

    #[test]
    fn test_widget_click() {
        let surface = StackSurface::new(4, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let now = Instant::now();

        let outcome = pager.on_widget_click("#p3", &surface, now);
        assert!(outcome.prevent_default);
        assert!(outcome.blur);
        assert_eq!(outcome.transition, Some(2));

        let outcome = pager.on_widget_click("#missing", &surface, now);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.transition, None);
        assert_eq!(pager.current_index(), 2);

        assert_eq!(pager.on_widget_click("", &surface, now), InputOutcome::blocked());
    }

    #[test]
    fn test_empty_pager_degrades_silently() {
        let surface = StackSurface::new(0, 40.0);
        let mut pager = pager_for(&surface, PagerConfig::default());
        let now = Instant::now();
        assert_eq!(pager.current_id(), None);
        assert_eq!(pager.on_wheel(1.0, &surface, now), InputOutcome::ignored());
        assert_eq!(
            pager.on_key(PagerKey::Down, FocusKind::None, &surface, now),
            InputOutcome::ignored()
        );
        assert_eq!(pager.transition_to(0, &surface, now), None);
        assert!(!pager.on_scroll(&surface));
    }
}
