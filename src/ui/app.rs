use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, Product};
use crate::config::UiConfig;
use crate::selection::{
    persist_selection, MemoryStateBackend, SelectionStore, StateBackend, StateError,
};
use crate::ui::host::HostAdapter;
use crate::ui::screen::AdaptiveScreen;
use crate::window::{classify, WindowDescriptor};

/// Top-level application state.
///
/// Holds the host adapter and the current [`AdaptiveScreen`]. An orientation
/// change tears the screen down and rebuilds it from its saved form, the way
/// a mobile host recreates its view tree on rotation.
pub struct App {
    should_quit: bool,
    host: HostAdapter,
    screen: AdaptiveScreen,
    /// Carries the saved form across a screen recreation.
    recreation_slot: MemoryStateBackend,
    recreations: u64,
    currency: String,
}

impl App {
    pub fn new(config: &UiConfig, restored: Option<Product>, size: (u16, u16)) -> Self {
        let (cols, rows) = size;
        let host = HostAdapter::new(config.orientation, config.cell_aspect, cols, rows);
        let window = classify(&host.report());
        let screen = AdaptiveScreen::new(
            Catalog::builtin(),
            SelectionStore::with_selection(restored),
            window,
            config.currency_symbol.clone(),
        );
        Self {
            should_quit: false,
            host,
            screen,
            recreation_slot: MemoryStateBackend::new(),
            recreations: 0,
            currency: config.currency_symbol.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> &AdaptiveScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut AdaptiveScreen {
        &mut self.screen
    }

    pub fn window(&self) -> WindowDescriptor {
        self.screen.window()
    }

    pub fn selection(&self) -> Option<Product> {
        self.screen.selection()
    }

    pub fn is_rotated(&self) -> bool {
        self.host.is_rotated()
    }

    /// Number of times the screen has been rebuilt by an orientation change.
    pub fn recreations(&self) -> u64 {
        self.recreations
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.host.resize(cols, rows);
        self.apply_host_config();
    }

    pub fn rotate(&mut self) {
        self.host.toggle_rotation();
        info!(rotated = self.host.is_rotated(), "rotation toggled");
        self.apply_host_config();
    }

    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        self.screen.handle_key(key)
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) -> bool {
        self.screen.handle_mouse(mouse)
    }

    pub fn render_body(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.screen.render(frame, area);
    }

    /// Writes the current selection to `backend`.
    pub fn save_state(&self, backend: &dyn StateBackend) -> Result<(), StateError> {
        persist_selection(backend, self.selection().as_ref())
    }

    fn apply_host_config(&mut self) {
        let window = classify(&self.host.report());
        if window.orientation == self.screen.window().orientation {
            self.screen.on_window(window);
        } else {
            self.recreate_screen(window);
        }
    }

    fn recreate_screen(&mut self, window: WindowDescriptor) {
        let snapshot = self.screen.snapshot();
        if let Err(err) = self.recreation_slot.save(&snapshot) {
            warn!(error = %err, "failed to stash selection for recreation");
        }
        let saved = self.recreation_slot.take().unwrap_or(snapshot);
        self.screen = AdaptiveScreen::restore(
            Catalog::builtin(),
            window,
            self.currency.clone(),
            &saved,
        );
        self.recreations += 1;
        debug!(
            orientation = window.orientation.label(),
            state = ?self.screen.state(),
            recreations = self.recreations,
            "screen recreated"
        );
    }
}
