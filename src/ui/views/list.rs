use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::catalog::Product;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT};

const TITLE: &str = " Items ";
const SELECTED_MARKER: &str = "● ";
const UNSELECTED_MARKER: &str = "  ";

/// Selectable product list.
///
/// Stateless: the cursor lives in a [`ListState`] owned by the caller, and
/// activation is reported through the `on_select` callback. Rendering goes
/// through ratatui's [`List`], which only draws the rows that fit.
pub struct ProductListView;

impl ProductListView {
    pub fn items(products: &[Product], selected: Option<&Product>) -> Vec<ListItem<'static>> {
        products
            .iter()
            .map(|product| {
                let is_selected = selected == Some(product);
                let (marker, style) = if is_selected {
                    (
                        SELECTED_MARKER,
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    )
                } else {
                    (UNSELECTED_MARKER, Style::default().fg(HEADER_TEXT))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(product.name.clone(), style),
                ]))
            })
            .collect()
    }

    pub fn render(
        frame: &mut Frame<'_>,
        area: Rect,
        products: &[Product],
        selected: Option<&Product>,
        state: &mut ListState,
        focused: bool,
    ) {
        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let list = List::new(Self::items(products, selected))
            .block(
                Block::default()
                    .title(Span::styled(
                        TITLE,
                        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, state);
    }

    /// Invokes `on_select` once with `products[index]`. Returns false, and
    /// invokes nothing, for an out-of-range index.
    pub fn activate<F>(products: &[Product], index: usize, mut on_select: F) -> bool
    where
        F: FnMut(&Product),
    {
        match products.get(index) {
            Some(product) => {
                on_select(product);
                true
            }
            None => false,
        }
    }

    /// Row index under `(column, row)` for a list drawn in `area` and
    /// scrolled by `offset`.
    pub fn row_at(area: Rect, column: u16, row: u16, offset: usize, len: usize) -> Option<usize> {
        let inner = Self::inner(area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = offset + usize::from(row - inner.y);
        (index < len).then_some(index)
    }

    /// Moves the cursor by `delta`, clamped to the list bounds.
    pub fn move_cursor(state: &mut ListState, delta: isize, len: usize) {
        if len == 0 {
            state.select(None);
            return;
        }
        let current = state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        state.select(Some(next as usize));
    }

    fn inner(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }
}
