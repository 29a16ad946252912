use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::layout::trigger_label;

/// Brand and language menu over the first page row
pub struct HeaderWidget;

impl HeaderWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let layout = app.header_layout();
        if layout.bar.width == 0 {
            return;
        }

        let chrome = app.pager.chrome();
        let fg = app.theme.tone_fg(chrome.tone);
        let bg = app
            .block_at_row(0)
            .map(|b| app.theme.backdrop_bg(b.backdrop))
            .unwrap_or(app.theme.dark_bg);
        let bar_style = Style::default().fg(fg).bg(bg);

        frame.render_widget(Paragraph::new("").style(bar_style), layout.bar);
        frame.render_widget(
            Paragraph::new(Span::styled(
                app.page.site.brand.clone(),
                bar_style.add_modifier(Modifier::BOLD),
            )),
            layout.brand,
        );

        let Some(label) = trigger_label(&app.page.languages) else {
            return;
        };
        let presentation = app.links.presentation();
        let link_style = if presentation.interactive {
            bar_style
        } else {
            bar_style.add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(format!(" {} ", label)).style(link_style),
            layout.trigger,
        );

        if layout.items.is_empty() {
            return;
        }
        let list_style = Style::default()
            .fg(app.theme.status_fg)
            .bg(app.theme.status_bg);
        frame.render_widget(Clear, layout.list);
        for (rect, link) in layout.items.iter().zip(&app.page.languages) {
            let mut style = if link.current {
                list_style.fg(app.theme.accent)
            } else {
                list_style
            };
            if !presentation.interactive {
                style = style.add_modifier(Modifier::DIM);
            }
            let line = Line::from(Span::styled(format!(" {}", link.label), style));
            frame.render_widget(Paragraph::new(line).style(list_style), *rect);
        }
    }
}

