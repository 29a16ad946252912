//! Terminal rows as a scrollable page surface
//!
//! Blocks are stacked top to bottom. A block without an explicit height
//! fills one viewport, so section tops move whenever the terminal is resized;
//! they are recomputed on every query.

use snapdeck_core::{PageDocument, Surface};

#[derive(Debug, Clone)]
pub struct TerminalSurface {
    ids: Vec<String>,
    heights: Vec<Option<u16>>,
    viewport: u16,
    top: f64,
}

impl TerminalSurface {
    pub fn new(page: &PageDocument, viewport: u16) -> Self {
        Self {
            ids: page.blocks.iter().map(|b| b.id.clone()).collect(),
            heights: page.blocks.iter().map(|b| b.height).collect(),
            viewport,
            top: 0.0,
        }
    }

    /// Resize the viewport, keeping the offset inside the page
    pub fn set_viewport(&mut self, rows: u16) {
        self.viewport = rows;
        self.top = self.top.clamp(0.0, self.max_scroll());
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport
    }

    pub fn block_count(&self) -> usize {
        self.ids.len()
    }

    pub fn block_height(&self, index: usize) -> u16 {
        match self.heights.get(index) {
            Some(Some(rows)) => (*rows).max(1),
            Some(None) => self.viewport.max(1),
            None => 0,
        }
    }

    pub fn block_top(&self, index: usize) -> Option<f64> {
        if index >= self.ids.len() {
            return None;
        }
        Some((0..index).map(|i| self.block_height(i) as f64).sum())
    }

    pub fn content_height(&self) -> f64 {
        (0..self.ids.len()).map(|i| self.block_height(i) as f64).sum()
    }

    /// Furthest offset; a last block shorter than the viewport can still reach the top
    pub fn max_scroll(&self) -> f64 {
        let last_top = self
            .ids
            .len()
            .checked_sub(1)
            .and_then(|last| self.block_top(last))
            .unwrap_or(0.0);
        (self.content_height() - self.viewport as f64).max(last_top)
    }

    /// Free scroll by a number of rows (negative is up)
    pub fn scroll_by(&mut self, rows: f64) {
        self.set_scroll_top(self.top + rows);
    }

    /// First visible row, snapped to the cell grid
    pub fn row_offset(&self) -> u16 {
        self.top.round().clamp(0.0, u16::MAX as f64) as u16
    }
}

impl Surface for TerminalSurface {
    fn scroll_top(&self) -> f64 {
        self.top
    }

    fn viewport_height(&self) -> f64 {
        self.viewport as f64
    }

    fn section_top(&self, id: &str) -> Option<f64> {
        let index = self.ids.iter().position(|b| b == id)?;
        self.block_top(index)
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.top = top.clamp(0.0, self.max_scroll());
    }
}
