mod header;
mod page_view;
mod side_pager;
mod status_bar;

use ratatui::Frame;

pub use header::HeaderWidget;
pub use page_view::PageViewWidget;
pub use side_pager::SidePagerWidget;
pub use status_bar::StatusBarWidget;

use crate::app::App;

/// Draw one frame: page blocks, then the chrome the pager leaves visible
pub fn draw(frame: &mut Frame, app: &App) {
    let chrome = app.pager.chrome();

    PageViewWidget::render(frame, app.page_area(), app);
    if !chrome.pager_hidden {
        SidePagerWidget::render(frame, app);
    }
    if !chrome.header_hidden {
        HeaderWidget::render(frame, app);
    }
    StatusBarWidget::render(frame, app.status_area(), app);
}
