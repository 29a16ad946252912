use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Section dots along the right edge
pub struct SidePagerWidget;

impl SidePagerWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let chrome = app.pager.chrome();
        let fg = app.theme.tone_fg(chrome.tone);
        let layout = app.side_pager_layout();

        for (rect, item) in layout.items.iter().zip(app.pager.widget().items()) {
            let bg = app
                .block_at_row(rect.y)
                .map(|b| app.theme.backdrop_bg(b.backdrop))
                .unwrap_or(app.theme.dark_bg);
            let style = if item.is_active() {
                Style::default()
                    .fg(app.theme.accent)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::DIM)
            };
            frame.render_widget(
                Paragraph::new(Span::styled(format!(" {} ", item.label), style)),
                *rect,
            );
        }
    }
}
