//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use paneshop::catalog::{Catalog, Product};
use paneshop::selection::SelectionStore;
use paneshop::ui::screen::AdaptiveScreen;
use paneshop::window::{Orientation, WindowDescriptor};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 30;

pub fn window(orientation: Orientation) -> WindowDescriptor {
    WindowDescriptor {
        width_units: WIDTH,
        height_units: HEIGHT,
        orientation,
    }
}

pub fn banana() -> Product {
    Product::new("Banana", "Yellow fruit", 0.16)
}

pub fn screen(orientation: Orientation, selected: Option<Product>) -> AdaptiveScreen {
    AdaptiveScreen::new(
        Catalog::builtin(),
        SelectionStore::with_selection(selected),
        window(orientation),
        "$",
    )
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Renders the screen into a fresh test terminal and returns its rows.
pub fn render_screen(screen: &mut AdaptiveScreen) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| screen.render(frame, frame.area()))
        .unwrap();
    buffer_lines(terminal.backend().buffer())
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}
