use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Product;
use crate::ui::theme::{ACCENT, BUTTON_TEXT, FOCUS_BORDER, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub const EMPTY_MESSAGE: &str = "Select a product to view details.";
pub const CLEAR_BUTTON_LABEL: &str = "[ Clear Selected ]";

const TITLE: &str = " Details ";

/// Detail pane for the current selection.
///
/// The clear button is drawn in both branches; with nothing selected,
/// activating it just reports `on_clear` again.
pub struct DetailView;

impl DetailView {
    /// Content lines, top to bottom. The clear button is always last.
    pub fn lines(selected: Option<&Product>, currency: &str) -> Vec<Line<'static>> {
        let body = Style::default().fg(HEADER_TEXT);
        let mut lines = match selected {
            Some(product) => vec![
                Line::from(Span::styled(
                    format!("Details for {}", product.name),
                    Style::default()
                        .fg(ACCENT)
                        .add_modifier(Modifier::BOLD | Modifier::ITALIC),
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("Description: {}", product.description),
                    body,
                )),
                Line::default(),
                Line::from(Span::styled(
                    format!("Price: {}", product.formatted_price(currency)),
                    body,
                )),
            ],
            None => vec![Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
            ))],
        };
        lines.push(Line::default());
        lines.push(Self::button_line());
        lines
    }

    pub fn render(
        frame: &mut Frame<'_>,
        area: Rect,
        selected: Option<&Product>,
        currency: &str,
        focused: bool,
    ) {
        let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let block = Block::default()
            .title(Span::styled(
                TITLE,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let paragraph = Self::paragraph(Self::lines(selected, currency));
        let content = Self::content_rect(inner, paragraph.line_count(inner.width));
        frame.render_widget(paragraph, content);
    }

    /// True if `(column, row)` lands on the clear button of a pane drawn in
    /// `area` for `selected`.
    pub fn button_hit(
        area: Rect,
        selected: Option<&Product>,
        currency: &str,
        column: u16,
        row: u16,
    ) -> bool {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let total = Self::paragraph(Self::lines(selected, currency)).line_count(inner.width);
        let button = Self::paragraph(vec![Self::button_line()]).line_count(inner.width);
        let content = Self::content_rect(inner, total);

        // The button is the last wrapped block; rows past the clipped
        // content fall outside `content`.
        let bottom = content.y.saturating_add(total as u16);
        let top = bottom.saturating_sub(button as u16);
        content.contains(Position::new(column, row)) && (top..bottom).contains(&row)
    }

    fn button_line() -> Line<'static> {
        Line::from(Span::styled(
            CLEAR_BUTTON_LABEL,
            Style::default().fg(BUTTON_TEXT).add_modifier(Modifier::BOLD),
        ))
    }

    fn paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Vertically centred block of `rows` rows inside `inner`.
    fn content_rect(inner: Rect, rows: usize) -> Rect {
        let height = u16::try_from(rows).unwrap_or(u16::MAX).min(inner.height);
        Rect {
            x: inner.x,
            y: inner.y + (inner.height - height) / 2,
            width: inner.width,
            height,
        }
    }
}
