use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;
use ratatui::Frame;
use tracing::debug;

use crate::catalog::{Catalog, Product};
use crate::selection::{deserialize, serialize, SelectionStore, SerializedForm, SubscriptionId};
use crate::ui::layout::{pane_regions, PaneAreas};
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::reducer::ScreenReducer;
use crate::ui::screen::state::ScreenState;
use crate::ui::views::{DetailView, ProductListView};
use crate::window::WindowDescriptor;

/// Pane receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneFocus {
    List,
    Detail,
}

/// One product list/detail screen.
///
/// Owns the selection store for its lifetime and hands it to the views
/// through their callbacks. Store writes arrive back as
/// [`ScreenIntent::SelectionChanged`] via a subscription and are reduced
/// before the input handler returns.
pub struct AdaptiveScreen {
    catalog: Catalog,
    store: SelectionStore,
    subscription: SubscriptionId,
    inbox: Arc<Mutex<Vec<ScreenIntent>>>,
    state: ScreenState,
    window: WindowDescriptor,
    list_state: ListState,
    focus: PaneFocus,
    currency: String,
    areas: PaneAreas,
}

impl AdaptiveScreen {
    pub fn new(
        catalog: Catalog,
        store: SelectionStore,
        window: WindowDescriptor,
        currency: impl Into<String>,
    ) -> Self {
        let inbox = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&inbox);
        let subscription = store.subscribe(move |selected| {
            sink.lock().push(ScreenIntent::SelectionChanged {
                has_selection: selected.is_some(),
            });
        });

        let selected = store.get();
        let state = ScreenState::resolve(window.orientation, selected.is_some());
        let cursor = selected
            .as_ref()
            .and_then(|p| catalog.position(p))
            .unwrap_or(0);
        let mut list_state = ListState::default();
        if !catalog.is_empty() {
            list_state.select(Some(cursor));
        }
        debug!(?state, orientation = window.orientation.label(), "screen created");

        Self {
            catalog,
            store,
            subscription,
            inbox,
            state,
            window,
            list_state,
            focus: PaneFocus::List,
            currency: currency.into(),
            areas: PaneAreas::default(),
        }
    }

    /// Rebuilds a screen from a saved form, as after a teardown.
    /// A malformed form restores to no selection.
    pub fn restore(
        catalog: Catalog,
        window: WindowDescriptor,
        currency: impl Into<String>,
        saved: &SerializedForm,
    ) -> Self {
        let store = SelectionStore::with_selection(deserialize(saved));
        Self::new(catalog, store, window, currency)
    }

    pub fn snapshot(&self) -> SerializedForm {
        serialize(self.store.get().as_ref())
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn window(&self) -> WindowDescriptor {
        self.window
    }

    pub fn store(&self) -> &SelectionStore {
        &self.store
    }

    pub fn selection(&self) -> Option<Product> {
        self.store.get()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Pane rectangles from the most recent render.
    pub fn areas(&self) -> PaneAreas {
        self.areas
    }

    /// Focused pane. In portrait this is whichever pane is visible.
    pub fn focus(&self) -> PaneFocus {
        match self.state {
            ScreenState::PortraitList => PaneFocus::List,
            ScreenState::PortraitDetail => PaneFocus::Detail,
            ScreenState::Landscape => self.focus,
        }
    }

    /// Host configuration changed. Never touches the selection.
    pub fn on_window(&mut self, window: WindowDescriptor) {
        self.window = window;
        self.dispatch(ScreenIntent::OrientationChanged {
            orientation: window.orientation,
            has_selection: self.store.is_selected(),
        });
    }

    /// List row activation.
    pub fn select_index(&mut self, index: usize) -> bool {
        let store = self.store.clone();
        let activated = ProductListView::activate(self.catalog.products(), index, |product| {
            store.select(product.clone());
        });
        if activated {
            self.list_state.select(Some(index));
        }
        self.pump();
        activated
    }

    /// Detail clear action.
    pub fn clear_selection(&mut self) {
        self.store.clear();
        self.pump();
    }

    pub fn toggle_focus(&mut self) {
        if self.state.is_dual_pane() {
            self.focus = match self.focus {
                PaneFocus::List => PaneFocus::Detail,
                PaneFocus::Detail => PaneFocus::List,
            };
        }
    }

    /// Returns true if the key was consumed by the screen.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let focus = self.focus();
        let handled = match key.code {
            KeyCode::Up | KeyCode::Char('k') if focus == PaneFocus::List => {
                self.move_cursor(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') if focus == PaneFocus::List => {
                self.move_cursor(1);
                true
            }
            KeyCode::Enter if focus == PaneFocus::List => match self.list_state.selected() {
                Some(index) => self.select_index(index),
                None => false,
            },
            KeyCode::Char('c') | KeyCode::Backspace | KeyCode::Delete
                if self.state.panes().detail =>
            {
                self.clear_selection();
                true
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right
                if self.state.is_dual_pane() =>
            {
                self.toggle_focus();
                true
            }
            // Back from the portrait detail pane.
            KeyCode::Esc if self.state == ScreenState::PortraitDetail => {
                self.clear_selection();
                true
            }
            _ => false,
        };
        self.pump();
        handled
    }

    /// Returns true if the mouse event hit an interactive element.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        let handled = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp if self.over_list(mouse.column, mouse.row) => {
                self.move_cursor(-1);
                true
            }
            MouseEventKind::ScrollDown if self.over_list(mouse.column, mouse.row) => {
                self.move_cursor(1);
                true
            }
            _ => false,
        };
        self.pump();
        handled
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        self.pump();
        self.areas = pane_regions(area, self.state.panes());
        let selected = self.store.get();
        let focus = self.focus();

        if let Some(list_area) = self.areas.list {
            ProductListView::render(
                frame,
                list_area,
                self.catalog.products(),
                selected.as_ref(),
                &mut self.list_state,
                focus == PaneFocus::List,
            );
        }
        if let Some(detail_area) = self.areas.detail {
            DetailView::render(
                frame,
                detail_area,
                selected.as_ref(),
                &self.currency,
                focus == PaneFocus::Detail,
            );
        }
    }

    fn click(&mut self, column: u16, row: u16) -> bool {
        if let Some(list_area) = self.areas.list {
            let hit = ProductListView::row_at(
                list_area,
                column,
                row,
                self.list_state.offset(),
                self.catalog.len(),
            );
            if let Some(index) = hit {
                self.focus = PaneFocus::List;
                return self.select_index(index);
            }
        }
        if let Some(detail_area) = self.areas.detail {
            let selected = self.store.get();
            if DetailView::button_hit(
                detail_area,
                selected.as_ref(),
                &self.currency,
                column,
                row,
            ) {
                self.focus = PaneFocus::Detail;
                self.clear_selection();
                return true;
            }
        }
        false
    }

    fn over_list(&self, column: u16, row: u16) -> bool {
        self.areas
            .list
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    fn move_cursor(&mut self, delta: isize) {
        ProductListView::move_cursor(&mut self.list_state, delta, self.catalog.len());
    }

    fn dispatch(&mut self, intent: ScreenIntent) {
        let previous = self.state;
        self.state = ScreenReducer::reduce(previous, intent);
        if self.state != previous {
            debug!(?previous, next = ?self.state, ?intent, "screen transition");
        }
    }

    /// Reduces every selection intent queued by the store subscription.
    fn pump(&mut self) {
        let pending = std::mem::take(&mut *self.inbox.lock());
        for intent in pending {
            self.dispatch(intent);
        }
    }
}

impl Drop for AdaptiveScreen {
    fn drop(&mut self) {
        self.store.unsubscribe(self.subscription);
    }
}
