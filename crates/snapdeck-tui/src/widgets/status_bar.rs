use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let base = Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg);

        if let Focus::Prompt(prompt) = &app.focus {
            let label = " jump to section: ";
            let line = Line::from(vec![
                Span::styled(label, base.add_modifier(Modifier::BOLD)),
                Span::styled(prompt.input.clone(), base),
            ]);
            frame.render_widget(Paragraph::new(line).style(base), area);

            let typed: String = prompt.input.chars().take(prompt.cursor).collect();
            let x = area.x + (label.width() + typed.width()) as u16;
            if x < area.right() {
                frame.set_cursor_position((x, area.y));
            }
            return;
        }

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => {
                let total = app.pager.sections().len();
                let current = app.pager.current_id().unwrap_or("-");
                let moving = if app.pager.is_animating() { " ~" } else { "" };
                format!(
                    " {} | {}/{}{}",
                    current,
                    (app.pager.current_index() + 1).min(total),
                    total,
                    moving
                )
            }
        };

        let help_hint = " q:quit ↑↓:section j/k:scroll /:jump ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, base),
            Span::styled(" ".repeat(padding_len), base),
            Span::styled(help_hint, base.fg(app.theme.muted)),
        ]);
        frame.render_widget(Paragraph::new(line).style(base), area);
    }
}
