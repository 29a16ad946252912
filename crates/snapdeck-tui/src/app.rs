use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rand::Rng;
use ratatui::layout::Rect;
use snapdeck_core::effects::{
    DropdownRegion, Extent, FloatField, LangDropdown, LinkAction, LinkGate, QuoteReveal,
    RevealTracker, Rotation,
};
use snapdeck_core::page::{Block, IconMotion};
use snapdeck_core::pager::{FocusKind, PagerKey};
use snapdeck_core::{AppConfig, PageDocument, Pager, Surface};
use tracing::{debug, info};

use crate::input::Action;
use crate::layout::{HeaderLayout, SidePagerLayout};
use crate::surface::TerminalSurface;
use crate::theme::Theme;

/// Section jump prompt opened with `/`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JumpPrompt {
    pub input: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl JumpPrompt {
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index();
        self.input.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.input.chars().count());
    }

    /// Section id typed by the user; a bare number means `p<number>`
    pub fn target_id(&self) -> Option<String> {
        let typed = self.input.trim();
        if typed.is_empty() {
            None
        } else if typed.chars().all(|c| c.is_ascii_digit()) {
            Some(format!("p{}", typed))
        } else {
            Some(typed.to_string())
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }
}

/// Which control receives typed keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Page,
    Prompt(JumpPrompt),
}

impl Focus {
    pub fn kind(&self) -> FocusKind {
        match self {
            Focus::Page => FocusKind::None,
            Focus::Prompt(_) => FocusKind::TextField,
        }
    }
}

/// Dropdown regions containing the pointer, innermost first
fn hover_chain(region: Option<DropdownRegion>) -> &'static [DropdownRegion] {
    match region {
        Some(DropdownRegion::Trigger) => &[DropdownRegion::Trigger, DropdownRegion::Nav],
        Some(DropdownRegion::List) => &[DropdownRegion::List, DropdownRegion::Nav],
        Some(DropdownRegion::Nav) => &[DropdownRegion::Nav],
        None => &[],
    }
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub page: PageDocument,
    pub pager: Pager,
    pub surface: TerminalSurface,
    pub theme: Theme,
    pub dropdown: LangDropdown,
    pub links: LinkGate,
    pub reveal: RevealTracker,
    pub quote: Option<QuoteReveal>,
    pub floats: FloatField,
    /// (block, icon) of every floating icon, indexed like `floats`
    float_slots: Vec<(usize, usize)>,
    pub rotation: Rotation,
    pub focus: Focus,
    hover: Option<DropdownRegion>,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// Time of the last tick; widgets render at this instant
    pub clock: Instant,
    width: u16,
    height: u16,
}

impl App {
    pub fn new(config: Arc<AppConfig>, page: PageDocument, size: (u16, u16), now: Instant) -> Self {
        Self::with_rng(config, page, size, now, &mut rand::thread_rng())
    }

    /// Build the app with an explicit random source for float staggering
    pub fn with_rng<R: Rng + ?Sized>(
        config: Arc<AppConfig>,
        page: PageDocument,
        size: (u16, u16),
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let (width, height) = size;
        let surface = TerminalSurface::new(&page, height.saturating_sub(1));

        let mut pager = Pager::new(page.section_list(), page.pager_widget(), config.pager.clone());
        pager.init(&surface);

        let float_slots: Vec<(usize, usize)> = page
            .blocks
            .iter()
            .enumerate()
            .flat_map(|(b, block)| {
                block
                    .icons
                    .iter()
                    .enumerate()
                    .filter(|(_, icon)| icon.motion == IconMotion::Float)
                    .map(move |(i, _)| (b, i))
            })
            .collect();
        let floats = FloatField::new(float_slots.len(), &config.effects, now, rng);
        let rotation = Rotation::new(Duration::from_millis(config.effects.rotate_duration_ms), now);
        let quote = page
            .quote()
            .and_then(|(_, text)| QuoteReveal::new(text, &config.effects, now));

        let mut app = Self {
            reveal: RevealTracker::new(config.reveal.clone(), page.blocks.len()),
            links: LinkGate::new(&config.lang),
            config,
            page,
            pager,
            surface,
            theme: Theme::default(),
            dropdown: LangDropdown::default(),
            quote,
            floats,
            float_slots,
            rotation,
            focus: Focus::Page,
            hover: None,
            status_message: None,
            should_quit: false,
            clock: now,
            width,
            height,
        };
        app.observe_reveals(now);
        info!(
            sections = app.pager.sections().len(),
            blocks = app.page.blocks.len(),
            "page loaded"
        );
        app
    }

    pub fn page_area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height.saturating_sub(1))
    }

    pub fn status_area(&self) -> Rect {
        if self.height == 0 {
            return Rect::default();
        }
        Rect::new(0, self.height - 1, self.width, 1)
    }

    pub fn header_layout(&self) -> HeaderLayout {
        HeaderLayout::compute(
            self.page_area(),
            &self.page.site.brand,
            &self.page.languages,
            self.dropdown.is_open(),
        )
    }

    pub fn side_pager_layout(&self) -> SidePagerLayout {
        SidePagerLayout::compute(self.page_area(), self.pager.widget())
    }

    pub fn is_input_mode(&self) -> bool {
        matches!(self.focus, Focus::Prompt(_))
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Block drawn at `row` of the page area
    pub fn block_at_row(&self, row: u16) -> Option<&Block> {
        let y = self.surface.row_offset() as f64 + row as f64;
        (0..self.surface.block_count())
            .find(|&idx| {
                let top = self.surface.block_top(idx).unwrap_or(f64::MAX);
                y >= top && y < top + self.surface.block_height(idx) as f64
            })
            .and_then(|idx| self.page.blocks.get(idx))
    }

    /// Reveal progress of a block; blocks opted out are always fully shown
    pub fn reveal_progress(&self, index: usize) -> f64 {
        match self.page.blocks.get(index) {
            Some(block) if block.reveal => self.reveal.progress(index, self.clock),
            _ => 1.0,
        }
    }

    /// Float offset in rows of icon `icon` in block `block`
    pub fn icon_offset(&self, block: usize, icon: usize) -> f64 {
        self.float_slots
            .iter()
            .position(|&slot| slot == (block, icon))
            .map(|idx| self.floats.offset(idx, self.clock))
            .unwrap_or(0.0)
    }

    /// Glyph to draw for an icon; rotating icons cycle through their characters
    pub fn icon_glyph(&self, block: usize, icon: usize) -> String {
        let Some(icon) = self.page.blocks.get(block).and_then(|b| b.icons.get(icon)) else {
            return String::new();
        };
        match icon.motion {
            IconMotion::Rotate => {
                let frames: Vec<char> = icon.glyph.chars().collect();
                let idx = self.rotation.frame_index(self.clock, frames.len());
                frames.get(idx).map(|c| c.to_string()).unwrap_or_default()
            }
            _ => icon.glyph.clone(),
        }
    }

    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.width = width;
        self.height = height;
        self.surface.set_viewport(self.page_area().height);
        self.pager.on_resize(&self.surface);
        self.observe_reveals(now);
    }

    /// Advance animations to `now`
    pub fn tick(&mut self, now: Instant) {
        self.clock = now;
        if self.pager.is_animating() {
            self.pager.frame(&mut self.surface, now);
            // Programmatic scrolling fires scroll notifications like any other
            self.pager.on_scroll(&self.surface);
            self.observe_reveals(now);
        }
    }

    /// True while something needs the animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.pager.is_animating()
            || self.reveal.is_animating(self.clock)
            || self.quote.as_ref().is_some_and(|q| !q.is_complete(self.clock))
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Arrow(key) => self.arrow(key, now),
            Action::NextSection => self.section_key(PagerKey::Down, now),
            Action::PrevSection => self.section_key(PagerKey::Up, now),
            Action::ScrollLines(n) => {
                let step = self.config.ui.scroll_lines as f64;
                self.native_scroll(n as f64 * step, now);
            }
            Action::ScrollPages(n) => {
                let page = self.surface.viewport_height();
                self.native_scroll(n as f64 * page, now);
            }
            Action::ScrollToTop => self.native_scroll_to(0.0, now),
            Action::ScrollToBottom => {
                let bottom = self.surface.max_scroll();
                self.native_scroll_to(bottom, now);
            }
            Action::OpenPrompt => {
                self.clear_status();
                self.focus = Focus::Prompt(JumpPrompt::default());
            }
            Action::Confirm => self.submit_prompt(now),
            Action::Cancel => self.focus = Focus::Page,
            Action::InputChar(c) => {
                if let Focus::Prompt(prompt) = &mut self.focus {
                    prompt.insert(c);
                }
            }
            Action::Backspace => {
                if let Focus::Prompt(prompt) = &mut self.focus {
                    prompt.backspace();
                }
            }
            Action::None => {}
        }
    }

    /// Arrow keys go to the pager first; whatever it lets through reaches the focused control
    fn arrow(&mut self, key: PagerKey, now: Instant) {
        let outcome = self.pager.on_key(key, self.focus.kind(), &self.surface, now);
        if outcome.prevent_default {
            return;
        }
        if let Focus::Prompt(prompt) = &mut self.focus {
            match key {
                PagerKey::Left => prompt.move_left(),
                PagerKey::Right => prompt.move_right(),
                _ => {}
            }
            return;
        }
        match key {
            PagerKey::Down => self.native_scroll(1.0, now),
            PagerKey::Up => self.native_scroll(-1.0, now),
            _ => {}
        }
    }

    fn section_key(&mut self, key: PagerKey, now: Instant) {
        let outcome = self.pager.on_key(key, self.focus.kind(), &self.surface, now);
        if !outcome.prevent_default && self.focus == Focus::Page {
            let page = self.surface.viewport_height();
            let rows = if key.is_next() { page } else { -page };
            self.native_scroll(rows, now);
        }
    }

    fn wheel(&mut self, delta_y: f64, now: Instant) {
        let outcome = self.pager.on_wheel(delta_y, &self.surface, now);
        if !outcome.prevent_default {
            let step = self.config.ui.scroll_lines as f64;
            self.native_scroll(delta_y.signum() * step, now);
        }
    }

    /// Host scrolling that the pager only observes
    pub fn native_scroll(&mut self, rows: f64, now: Instant) {
        self.surface.scroll_by(rows);
        self.pager.on_scroll(&self.surface);
        self.observe_reveals(now);
    }

    fn native_scroll_to(&mut self, top: f64, now: Instant) {
        self.surface.set_scroll_top(top);
        self.pager.on_scroll(&self.surface);
        self.observe_reveals(now);
    }

    fn submit_prompt(&mut self, now: Instant) {
        let Focus::Prompt(prompt) = std::mem::take(&mut self.focus) else {
            return;
        };
        let Some(id) = prompt.target_id() else {
            return;
        };
        match self.pager.transition_to_id(&id, &self.surface, now) {
            Some(generation) => debug!(target = %id, generation, "jump prompt"),
            None => self.set_status(format!("No section '{}'", id)),
        }
    }

    fn observe_reveals(&mut self, now: Instant) {
        let scroll_top = self.surface.scroll_top();
        let viewport = self.surface.viewport_height();
        for (idx, block) in self.page.blocks.iter().enumerate() {
            if !block.reveal {
                continue;
            }
            let Some(top) = self.surface.block_top(idx) else {
                continue;
            };
            let extent = Extent {
                top,
                height: self.surface.block_height(idx) as f64,
            };
            self.reveal.observe(idx, extent, scroll_top, viewport, now);
        }
    }

    /// Handle a mouse event. Returns the language link action of a click, if any.
    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) -> Option<LinkAction> {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.wheel(1.0, now),
            MouseEventKind::ScrollUp => self.wheel(-1.0, now),
            MouseEventKind::Down(MouseButton::Left) => {
                return self.click(mouse.column, mouse.row, now);
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.update_hover(mouse.column, mouse.row);
            }
            _ => {}
        }
        None
    }

    fn click(&mut self, col: u16, row: u16, now: Instant) -> Option<LinkAction> {
        let chrome = self.pager.chrome();

        if !chrome.header_hidden {
            let header = self.header_layout();
            if let Some(link) = header
                .language_at(col, row)
                .and_then(|idx| self.page.languages.get(idx))
            {
                let action = self.links.click(link);
                if action == LinkAction::Suppressed {
                    self.set_status("Language links are disabled");
                }
                self.dropdown.close();
                return Some(action);
            }
            if header.region_at(col, row) == Some(DropdownRegion::Trigger) {
                self.dropdown.pointer_enter(DropdownRegion::Trigger);
                return None;
            }
        }

        if !chrome.pager_hidden {
            let href = self
                .side_pager_layout()
                .item_at(col, row)
                .and_then(|idx| self.pager.widget().items().get(idx))
                .map(|item| item.href.clone());
            if let Some(href) = href {
                let outcome = self.pager.on_widget_click(&href, &self.surface, now);
                if outcome.blur {
                    self.focus = Focus::Page;
                }
                return None;
            }
        }

        // Clicking the page takes focus away from the prompt
        self.focus = Focus::Page;
        None
    }

    fn update_hover(&mut self, col: u16, row: u16) {
        let region = if self.pager.chrome().header_hidden {
            None
        } else {
            self.header_layout().region_at(col, row)
        };
        if region == self.hover {
            return;
        }

        let before = hover_chain(self.hover);
        let after = hover_chain(region);
        for left in before.iter().filter(|r| !after.contains(*r)) {
            self.dropdown.pointer_leave(*left, region);
        }
        for entered in after.iter().filter(|r| !before.contains(*r)) {
            self.dropdown.pointer_enter(*entered);
        }
        self.hover = region;
    }
}
