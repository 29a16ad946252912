//! Per-character font-weight reveal for the hero quote

use std::time::{Duration, Instant};

use crate::config::EffectsConfig;
use crate::motion::timing::{lerp, progress};
use crate::motion::Easing;

const QUOTE_EASING: Easing = Easing::Power3Out;
const NBSP: char = '\u{00A0}';

/// One unit of the split quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteGlyph {
    /// A character animated on its own; spaces become non-breaking spaces
    Char(char),
    LineBreak,
}

/// Split text into animatable glyphs, preserving line breaks
pub fn split_quote(text: &str) -> Vec<QuoteGlyph> {
    text.chars()
        .filter(|&c| c != '\r')
        .map(|c| match c {
            '\n' => QuoteGlyph::LineBreak,
            ' ' => QuoteGlyph::Char(NBSP),
            other => QuoteGlyph::Char(other),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct QuoteReveal {
    glyphs: Vec<QuoteGlyph>,
    char_count: usize,
    started: Instant,
    duration: Duration,
    stagger: Duration,
    weight_from: u16,
    weight_to: u16,
}

impl QuoteReveal {
    /// `None` when the text has no characters to animate
    pub fn new(text: &str, config: &EffectsConfig, started: Instant) -> Option<Self> {
        let glyphs = split_quote(text);
        let char_count = glyphs
            .iter()
            .filter(|g| matches!(g, QuoteGlyph::Char(_)))
            .count();
        if char_count == 0 {
            return None;
        }
        Some(Self {
            glyphs,
            char_count,
            started,
            duration: Duration::from_millis(config.quote_duration_ms),
            stagger: Duration::from_millis(config.quote_stagger_ms),
            weight_from: config.quote_weight_from,
            weight_to: config.quote_weight_to,
        })
    }

    pub fn glyphs(&self) -> &[QuoteGlyph] {
        &self.glyphs
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Font weight of the `char_index`-th character (line breaks not counted)
    pub fn weight(&self, char_index: usize, now: Instant) -> u16 {
        let start = self.started + self.stagger * char_index as u32;
        let t = QUOTE_EASING.apply(progress(start, now, self.duration));
        lerp(self.weight_from as f64, self.weight_to as f64, t).round() as u16
    }

    /// Time at which the last character reaches its final weight
    pub fn finishes_at(&self) -> Instant {
        let last = self.char_count.saturating_sub(1) as u32;
        self.started + self.stagger * last + self.duration
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        now >= self.finishes_at()
    }
}
