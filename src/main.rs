//! Terminal lifecycle, event loop, and launch hand-off for rapp.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
        EnableFocusChange, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use rapp_tui::app::{App, Flow};
use rapp_tui::catalog::Catalog;
use rapp_tui::clipboard::SystemClipboard;
use rapp_tui::config::{self, Config};
use rapp_tui::events::{mouse_to_input, InputTracker};
use rapp_tui::usage::UsageRanking;
use rapp_tui::{launcher, logging, ui};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("rapp: {e:#}; using defaults");
        Config::from_env()
    });
    let _log_guard = logging::init(&config::data_dir().join(config::APP_DIR), config.debug_logging);
    tracing::info!(?config, "starting");

    let catalog = Catalog::load(&config.application_dirs);
    let ranking = UsageRanking::load(&config.history_path);
    tracing::info!(items = catalog.len(), "catalog loaded");

    let mut app = App::new(catalog, ranking, Box::new(SystemClipboard), &config);

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste,
        EnableFocusChange
    )?;
    let release_reporting = supports_keyboard_enhancement().unwrap_or(false);
    if release_reporting {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let mut tracker = InputTracker::new(release_reporting);
    let result = run_loop(&mut terminal, &mut app, &mut tracker, config.tick_rate());

    // Always restore the terminal, even on error.
    if release_reporting {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();

    match result? {
        Flow::Launch(item) => app
            .launch_with(item, launcher::spawn_detached)
            .inspect_err(|e| tracing::error!("{e:#}")),
        Flow::Quit | Flow::Continue => Ok(()),
    }
}

/// One tick: drain pending events, fire key repeats, draw, wait.
fn run_loop(
    terminal: &mut Term,
    app: &mut App,
    tracker: &mut InputTracker,
    tick_rate: Duration,
) -> Result<Flow> {
    loop {
        let (width, height) = crossterm::terminal::size()?;
        let regions = ui::layout::compute(ratatui::layout::Rect::new(0, 0, width, height));
        app.set_list_area(regions.list_area());

        while event::poll(Duration::ZERO)? {
            let now = Instant::now();
            let flow = match event::read()? {
                Event::Key(key) => match tracker.on_key(&key) {
                    Some(input) => app.on_key(input, now),
                    None => Flow::Continue,
                },
                Event::Mouse(mouse) => match mouse_to_input(&mouse) {
                    Some(input) => app.on_mouse(input),
                    None => Flow::Continue,
                },
                Event::Paste(text) => {
                    app.paste_text(&text);
                    Flow::Continue
                }
                Event::FocusLost => {
                    tracker.release_all();
                    Flow::Continue
                }
                _ => Flow::Continue,
            };
            if flow != Flow::Continue {
                return Ok(flow);
            }
        }

        let flow = app.tick(Instant::now(), &tracker.held());
        if flow != Flow::Continue {
            return Ok(flow);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        event::poll(tick_rate)?;
    }
}
