use ratatui::layout::{Constraint, Layout, Rect};

use crate::ui::screen::Panes;

/// Columns between the list and detail panes in dual-pane mode.
pub const PANE_GAP: u16 = 2;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Screen rectangles for each visible pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneAreas {
    pub list: Option<Rect>,
    pub detail: Option<Rect>,
}

/// Splits `body` for the given panes: a single pane takes the whole body,
/// two panes share it evenly around a [`PANE_GAP`] spacer.
pub fn pane_regions(body: Rect, panes: Panes) -> PaneAreas {
    match (panes.list, panes.detail) {
        (true, true) => {
            let [list, _, detail] = Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(PANE_GAP),
                Constraint::Fill(1),
            ])
            .areas(body);
            PaneAreas {
                list: Some(list),
                detail: Some(detail),
            }
        }
        (true, false) => PaneAreas {
            list: Some(body),
            detail: None,
        },
        (false, true) => PaneAreas {
            list: None,
            detail: Some(body),
        },
        (false, false) => PaneAreas::default(),
    }
}
