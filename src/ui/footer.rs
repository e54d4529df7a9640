use crate::ui::screen::ScreenState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn hints(state: ScreenState) -> &'static str {
        match state {
            ScreenState::PortraitList => " ↑/↓: Move │ Enter: Select │ o: Rotate │ q: Quit",
            ScreenState::PortraitDetail => " c: Clear │ Esc: Back │ o: Rotate │ q: Quit",
            ScreenState::Landscape => {
                " ↑/↓: Move │ Enter: Select │ c: Clear │ Tab: Focus │ o: Rotate │ q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect, state: ScreenState) -> Paragraph<'static> {
        let hints = Self::hints(state);
        let hints_width = hints.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders

        // Hints win over the version when both do not fit.
        let version = format!("v{} ", VERSION);
        let version_width = version.chars().count();
        let (padding, version) = if hints_width + version_width <= content_width {
            (content_width - hints_width - version_width, version)
        } else {
            (0, String::new())
        };

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
