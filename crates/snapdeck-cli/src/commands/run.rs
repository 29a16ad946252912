use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};

use snapdeck_core::effects::LinkAction;
use snapdeck_core::{AppConfig, PageDocument};
use snapdeck_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    widgets,
};

pub async fn run(config: Arc<AppConfig>, page: PageDocument) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);
    let title = page.site.brand.clone();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle(title))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    let size = terminal.size()?;

    let mut app = App::new(config.clone(), page, (size.width, size.height), Instant::now());
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let result = event_loop(&mut terminal, &mut app, &keymap, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    events: &EventHandler,
) -> Result<()> {
    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = app.needs_fast_update();

    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| widgets::draw(frame, app))?;

        let event = if needs_fast_update {
            events.next_animation()?
        } else {
            events.next()?
        };
        let now = Instant::now();
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, app, keymap);
                    app.clear_status();
                    app.apply(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    if let Some(LinkAction::Navigate(url)) = app.on_mouse(mouse, now) {
                        open_link(app, &url);
                    }
                }
                AppEvent::Resize(width, height) => app.on_resize(width, height, now),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_update();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn open_link(app: &mut App, href: &str) {
    let url = match app.page.resolve_link(href) {
        Ok(url) => url,
        Err(e) => {
            warn!("Not opening language link: {}", e);
            app.set_status(e.to_string());
            return;
        }
    };
    if let Err(e) = open::that(url.as_str()) {
        warn!("Failed to open {}: {}", url, e);
        app.set_status(format!("Failed to open link: {}", e));
    } else {
        info!("Opened language link {}", url);
        app.set_status(format!("Opened {}", url));
    }
}
