use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Clear, body);
    app.render_body(frame, body);

    // Header and footer read state after the body has reduced pending intents.
    frame.render_widget(Header::new().widget(app), header);
    let state = app.screen().state();
    frame.render_widget(Footer::new().widget(footer, state), footer);
}
