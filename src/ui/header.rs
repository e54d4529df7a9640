use crate::ui::app::App;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let window = app.window();

        let mut orientation = window.orientation.label().to_string();
        if app.is_rotated() {
            orientation.push_str(" (rotated)");
        }
        let selection = match app.selection() {
            Some(product) => Span::styled(product.name, Style::default().fg(ACCENT)),
            None => Span::styled("none", Style::default().fg(MUTED_TEXT)),
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Paneshop",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(orientation, text_style),
            Span::styled(
                format!(" {}x{}", window.width_units, window.height_units),
                Style::default().fg(MUTED_TEXT),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Selected: ", text_style),
            selection,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
