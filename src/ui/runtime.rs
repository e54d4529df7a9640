use crate::config::Config;
use crate::selection::{restore_selection, StateBackend};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::{error, info, warn};

/// Runs the screen until the user quits.
///
/// With a `state` backend, the previous selection is restored before the
/// first frame and the final selection is saved after the terminal is
/// restored, also when the loop ends on a draw error.
pub fn run(config: &Config, state: Option<&dyn StateBackend>) -> io::Result<()> {
    let restored = state.and_then(restore_selection);
    let size = crossterm::terminal::size().unwrap_or((80, 24));
    let mut app = App::new(&config.ui, restored, size);
    info!(
        cols = size.0,
        rows = size.1,
        state = ?app.screen().state(),
        "starting screen"
    );

    let (mut terminal, guard) = setup_terminal()?;
    let redraw = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new();

    let outcome = event_loop(&mut terminal, &mut app, &events, redraw);

    drop(events);
    drop(guard);

    finish(&app, state, outcome)
}

/// Draws and dispatches until quit. With no input the frame is redrawn
/// every `redraw`.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    redraw: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(redraw) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Mouse(mouse)) => {
                app.on_mouse(mouse);
            }
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

/// Saves the final selection, then hands back the loop outcome.
fn finish(
    app: &App,
    state: Option<&dyn StateBackend>,
    outcome: io::Result<()>,
) -> io::Result<()> {
    if let Err(err) = &outcome {
        error!(error = %err, "event loop failed");
    }
    if let Some(backend) = state {
        if let Err(err) = app.save_state(backend) {
            warn!(error = %err, "failed to save selection");
        }
    }
    outcome
}
