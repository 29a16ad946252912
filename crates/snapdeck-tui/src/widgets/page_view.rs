use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use snapdeck_core::effects::{QuoteGlyph, QuoteReveal};
use snapdeck_core::page::Block;
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Reveal progress below which block text is not drawn at all
const HIDDEN_BELOW: f64 = 0.15;
/// Reveal progress below which block text is dimmed
const DIM_BELOW: f64 = 0.6;
/// Rows the text rises while revealing
const REVEAL_RISE: f64 = 2.0;
const ICON_GAP: &str = "   ";

/// Stacked page blocks, clipped to the viewport
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.surface.row_offset() as i64;

        for (idx, block) in app.page.blocks.iter().enumerate() {
            let Some(top) = app.surface.block_top(idx) else {
                continue;
            };
            let height = app.surface.block_height(idx);
            let top = top as i64 - offset;
            let visible_top = top.max(0);
            let visible_bottom = (top + height as i64).min(area.height as i64);
            if visible_top >= visible_bottom {
                continue;
            }

            let rect = Rect::new(
                area.x,
                area.y + visible_top as u16,
                area.width,
                (visible_bottom - visible_top) as u16,
            );
            let skip = (visible_top - top) as u16;
            let style = Style::default()
                .bg(app.theme.backdrop_bg(block.backdrop))
                .fg(app.theme.backdrop_fg(block.backdrop));

            let paragraph = Paragraph::new(block_lines(app, idx, height))
                .alignment(Alignment::Center)
                .style(style)
                .scroll((skip, 0));
            frame.render_widget(paragraph, rect);
        }

        // Scrolled past the end: extend the last block's backdrop
        let below = app.surface.content_height() as i64 - offset;
        if below < area.height as i64 {
            if let Some(last) = app.page.blocks.last() {
                let from = below.max(0) as u16;
                let rect = Rect::new(area.x, area.y + from, area.width, area.height - from);
                let style = Style::default().bg(app.theme.backdrop_bg(last.backdrop));
                frame.render_widget(Paragraph::new("").style(style), rect);
            }
        }
    }
}

/// Lines of one block, vertically centred within `height` rows
pub fn block_lines(app: &App, index: usize, height: u16) -> Vec<Line<'static>> {
    let Some(block) = app.page.blocks.get(index) else {
        return Vec::new();
    };

    let mut lead: Vec<Line<'static>> = Vec::new();
    if !block.icons.is_empty() {
        lead.extend(icon_strip(app, index));
        lead.push(Line::default());
    }
    if let (Some(quote), Some((quote_block, _))) = (&app.quote, app.page.quote()) {
        if quote_block == index {
            lead.extend(quote_lines(quote, app.clock));
            lead.push(Line::default());
        }
    }

    let progress = app.reveal_progress(index);
    let text = text_lines(block, app.theme.backdrop_fg(block.backdrop), app.theme.accent);
    let content_len = lead.len() + text.len();

    // Row 0 belongs to the header
    let start = ((height as usize).saturating_sub(content_len) / 2).max(1);
    let mut lines = vec![Line::default(); start];
    lines.extend(lead);
    lines.extend(reveal(text, progress));
    lines.truncate(height as usize);
    lines
}

fn text_lines(block: &Block, fg: Color, accent: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !block.title.is_empty() {
        lines.push(Line::styled(
            block.title.clone(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::default());
    }
    lines.extend(
        block
            .body
            .lines()
            .map(|l| Line::styled(l.to_string(), Style::default().fg(fg))),
    );
    lines
}

/// Fade-up: text starts lower and dim, then settles in place
fn reveal(text: Vec<Line<'static>>, progress: f64) -> Vec<Line<'static>> {
    if progress < HIDDEN_BELOW {
        return vec![Line::default(); text.len()];
    }
    let rise = ((1.0 - progress) * REVEAL_RISE).round() as usize;
    let mut lines = vec![Line::default(); rise];
    if progress < DIM_BELOW {
        lines.extend(
            text.into_iter()
                .map(|l| l.patch_style(Style::default().add_modifier(Modifier::DIM))),
        );
    } else {
        lines.extend(text);
    }
    lines
}

/// Two rows of icons; a floating icon sits on the upper row while lifted
fn icon_strip(app: &App, index: usize) -> [Line<'static>; 2] {
    let mut upper = Vec::new();
    let mut lower = Vec::new();
    let Some(block) = app.page.blocks.get(index) else {
        return [Line::default(), Line::default()];
    };

    for icon in 0..block.icons.len() {
        if icon > 0 {
            upper.push(Span::raw(ICON_GAP));
            lower.push(Span::raw(ICON_GAP));
        }
        let glyph = app.icon_glyph(index, icon);
        let blank = " ".repeat(glyph.width().max(1));
        let style = Style::default().fg(app.theme.accent);
        if app.icon_offset(index, icon).round() <= -1.0 {
            upper.push(Span::styled(glyph, style));
            lower.push(Span::raw(blank));
        } else {
            upper.push(Span::raw(blank));
            lower.push(Span::styled(glyph, style));
        }
    }
    [Line::from(upper), Line::from(lower)]
}

fn quote_lines(quote: &QuoteReveal, now: Instant) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans = Vec::new();
    let mut char_index = 0;
    for glyph in quote.glyphs() {
        match glyph {
            QuoteGlyph::LineBreak => lines.push(Line::from(std::mem::take(&mut spans))),
            QuoteGlyph::Char(c) => {
                let style = weight_style(quote.weight(char_index, now));
                spans.push(Span::styled(c.to_string(), style));
                char_index += 1;
            }
        }
    }
    lines.push(Line::from(spans));
    lines
}

/// Terminal approximation of a font weight
pub fn weight_style(weight: u16) -> Style {
    match weight {
        0..=349 => Style::default().add_modifier(Modifier::DIM),
        350..=599 => Style::default(),
        _ => Style::default().add_modifier(Modifier::BOLD),
    }
}
