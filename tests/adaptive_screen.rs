mod common;

use common::{banana, buffer_lines, contains, key, left_click, render_screen, screen, window};
use crossterm::event::KeyCode;
use paneshop::catalog::{Catalog, Product};
use paneshop::config::UiConfig;
use paneshop::selection::{serialize, Primitive, SelectionStore, SerializedForm};
use paneshop::ui::app::App;
use paneshop::ui::render::draw;
use paneshop::ui::screen::{AdaptiveScreen, PaneFocus, ScreenState};
use paneshop::ui::views::{CLEAR_BUTTON_LABEL, EMPTY_MESSAGE};
use paneshop::window::Orientation;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn all_names() -> Vec<String> {
    Catalog::builtin()
        .products()
        .iter()
        .map(|p| p.name.clone())
        .collect()
}

#[test]
fn initial_state_follows_orientation_and_selection() {
    assert_eq!(
        screen(Orientation::Portrait, None).state(),
        ScreenState::PortraitList
    );
    assert_eq!(
        screen(Orientation::Portrait, Some(banana())).state(),
        ScreenState::PortraitDetail
    );
    assert_eq!(
        screen(Orientation::Landscape, None).state(),
        ScreenState::Landscape
    );
}

#[test]
fn selecting_each_product_updates_store() {
    let catalog = Catalog::builtin();
    let mut screen = screen(Orientation::Landscape, None);
    for (index, product) in catalog.products().iter().enumerate() {
        assert!(screen.select_index(index));
        assert_eq!(screen.selection().as_ref(), Some(product));
        assert_eq!(screen.store().get().as_ref(), Some(product));
    }
}

#[test]
fn clicking_each_row_in_sequence_has_no_carry_over() {
    let catalog = Catalog::builtin();
    let mut screen = screen(Orientation::Landscape, None);
    render_screen(&mut screen);
    let list = screen.areas().list.unwrap();

    for (index, product) in catalog.products().iter().enumerate() {
        let row = list.y + 1 + index as u16;
        assert!(screen.handle_mouse(left_click(list.x + 3, row)));
        assert_eq!(screen.selection().as_ref(), Some(product));
    }
}

#[test]
fn portrait_select_then_clear_round_trips_panes() {
    let mut screen = screen(Orientation::Portrait, None);
    assert!(screen.handle_key(key(KeyCode::Down)));
    assert!(screen.handle_key(key(KeyCode::Down)));
    assert!(screen.handle_key(key(KeyCode::Enter)));
    assert_eq!(screen.state(), ScreenState::PortraitDetail);
    assert_eq!(screen.selection().map(|p| p.name), Some("Orange".to_string()));
    assert_eq!(screen.focus(), PaneFocus::Detail);

    assert!(screen.handle_key(key(KeyCode::Char('c'))));
    assert_eq!(screen.state(), ScreenState::PortraitList);
    assert_eq!(screen.selection(), None);
    assert_eq!(screen.cursor(), Some(2));
}

#[test]
fn escape_goes_back_from_portrait_detail() {
    let mut screen = screen(Orientation::Portrait, Some(banana()));
    assert!(screen.handle_key(key(KeyCode::Esc)));
    assert_eq!(screen.state(), ScreenState::PortraitList);
    assert_eq!(screen.selection(), None);
    // Nothing left to go back from.
    assert!(!screen.handle_key(key(KeyCode::Esc)));
}

#[test]
fn portrait_without_selection_shows_list_only() {
    let mut screen = screen(Orientation::Portrait, None);
    let lines = render_screen(&mut screen);
    for name in all_names() {
        assert!(contains(&lines, &name), "missing {name}");
    }
    assert!(!contains(&lines, EMPTY_MESSAGE));
    assert!(screen.areas().detail.is_none());
}

#[test]
fn landscape_without_selection_shows_both_panes() {
    let mut screen = screen(Orientation::Landscape, None);
    let lines = render_screen(&mut screen);
    for name in all_names() {
        assert!(contains(&lines, &name), "missing {name}");
    }
    assert!(contains(&lines, EMPTY_MESSAGE));
    assert!(contains(&lines, CLEAR_BUTTON_LABEL));
    let areas = screen.areas();
    assert!(areas.list.unwrap().right() <= areas.detail.unwrap().x);
}

#[test]
fn portrait_with_banana_shows_detail_only() {
    let mut screen = screen(Orientation::Portrait, Some(banana()));
    let lines = render_screen(&mut screen);
    assert!(contains(&lines, "Details for Banana"));
    assert!(contains(&lines, "Description: Yellow fruit"));
    assert!(contains(&lines, "Price: $0.16"));
    assert!(!contains(&lines, "Apples"));
    assert!(screen.areas().list.is_none());
}

#[test]
fn landscape_with_banana_shows_list_and_detail() {
    let mut screen = screen(Orientation::Landscape, Some(banana()));
    let lines = render_screen(&mut screen);
    for name in all_names() {
        assert!(contains(&lines, &name), "missing {name}");
    }
    assert!(contains(&lines, "Details for Banana"));
    assert!(contains(&lines, "Price: $0.16"));
    assert!(!contains(&lines, EMPTY_MESSAGE));
}

#[test]
fn orientation_flips_keep_selection() {
    let mut screen = screen(Orientation::Portrait, Some(banana()));
    screen.on_window(window(Orientation::Landscape));
    assert_eq!(screen.state(), ScreenState::Landscape);
    assert_eq!(screen.selection(), Some(banana()));

    screen.on_window(window(Orientation::Portrait));
    assert_eq!(screen.state(), ScreenState::PortraitDetail);
    assert_eq!(screen.selection(), Some(banana()));
}

#[test]
fn clear_with_nothing_selected_is_a_no_op() {
    let mut screen = screen(Orientation::Landscape, None);
    assert!(screen.handle_key(key(KeyCode::Char('c'))));
    assert_eq!(screen.selection(), None);
    assert_eq!(screen.state(), ScreenState::Landscape);
}

#[test]
fn clicking_clear_button_clears_selection() {
    let mut screen = screen(Orientation::Portrait, Some(banana()));
    let lines = render_screen(&mut screen);
    // Full-body detail: inner height 28, seven content rows starting at 11.
    assert!(lines[17].contains(CLEAR_BUTTON_LABEL));

    assert!(!screen.handle_mouse(left_click(50, 16)));
    assert_eq!(screen.selection(), Some(banana()));

    assert!(screen.handle_mouse(left_click(50, 17)));
    assert_eq!(screen.selection(), None);
    assert_eq!(screen.state(), ScreenState::PortraitList);
}

#[test]
fn external_store_writes_are_reduced_before_render() {
    let mut screen = screen(Orientation::Portrait, None);
    let handle: SelectionStore = screen.store().clone();
    handle.select(banana());
    let lines = render_screen(&mut screen);
    assert_eq!(screen.state(), ScreenState::PortraitDetail);
    assert!(contains(&lines, "Details for Banana"));
}

#[test]
fn tab_moves_focus_only_in_landscape() {
    let mut landscape = screen(Orientation::Landscape, None);
    assert_eq!(landscape.focus(), PaneFocus::List);
    assert!(landscape.handle_key(key(KeyCode::Tab)));
    assert_eq!(landscape.focus(), PaneFocus::Detail);
    // List keys are ignored while the detail pane has focus.
    assert!(!landscape.handle_key(key(KeyCode::Enter)));

    let mut portrait = screen(Orientation::Portrait, None);
    assert!(!portrait.handle_key(key(KeyCode::Tab)));
    assert_eq!(portrait.focus(), PaneFocus::List);
}

#[test]
fn snapshot_and_restore_preserve_selection() {
    let screen = screen(Orientation::Portrait, Some(banana()));
    let saved = screen.snapshot();
    assert_eq!(saved, serialize(Some(&banana())));
    drop(screen);

    let restored = AdaptiveScreen::restore(
        Catalog::builtin(),
        window(Orientation::Landscape),
        "$",
        &saved,
    );
    assert_eq!(restored.selection(), Some(banana()));
    assert_eq!(restored.state(), ScreenState::Landscape);
    assert_eq!(restored.cursor(), Some(1));
}

#[test]
fn restore_from_malformed_form_starts_empty() {
    let malformed = SerializedForm::from(vec![
        Primitive::Text("Banana".to_string()),
        Primitive::Text("Yellow fruit".to_string()),
    ]);
    let restored = AdaptiveScreen::restore(
        Catalog::builtin(),
        window(Orientation::Portrait),
        "$",
        &malformed,
    );
    assert_eq!(restored.selection(), None);
    assert_eq!(restored.state(), ScreenState::PortraitList);
}

#[test]
fn restore_of_product_outside_catalog_still_shows_it() {
    let melon = Product::new("Melon", "Green fruit", 5.5);
    let mut restored = AdaptiveScreen::restore(
        Catalog::builtin(),
        window(Orientation::Portrait),
        "$",
        &serialize(Some(&melon)),
    );
    assert_eq!(restored.cursor(), Some(0));
    let lines = render_screen(&mut restored);
    assert!(contains(&lines, "Price: $5.50"));
}

#[test]
fn dropping_screen_unsubscribes() {
    let store = SelectionStore::new();
    let screen = AdaptiveScreen::new(
        Catalog::builtin(),
        store.clone(),
        window(Orientation::Portrait),
        "$",
    );
    assert_eq!(store.subscriber_count(), 1);
    drop(screen);
    assert_eq!(store.subscriber_count(), 0);
}

fn blueberries() -> Product {
    Product::new("Blueberries", "Small, blue, circular fruit", 4.95)
}

fn draw_app(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    buffer_lines(terminal.backend().buffer())
}

/// Renders Blueberries at `size`, checks the wrapped description and the
/// button are on screen, then clicks the button at `button`.
fn assert_long_description_fits(size: (u16, u16), expected: ScreenState, button: (u16, u16)) {
    let mut app = App::new(&UiConfig::default(), Some(blueberries()), size);
    assert_eq!(app.screen().state(), expected);

    let lines = draw_app(&mut app, size.0, size.1);
    assert!(contains(&lines, "Details for Blueberries"));
    let row = lines
        .iter()
        .position(|line| line.contains("Description: Small, blue, circular"))
        .expect("description row");
    assert!(lines[row + 1].contains("fruit"), "{:?}", &lines[row..=row + 1]);
    assert!(contains(&lines, "Price: $4.95"));
    assert!(lines[usize::from(button.1)].contains(CLEAR_BUTTON_LABEL));

    assert!(app.on_mouse(left_click(button.0, button.1)));
    assert_eq!(app.selection(), None);
}

#[test]
fn long_description_wraps_in_default_landscape() {
    // Detail pane spans columns 41..80 below the header; eight wrapped rows
    // centred in 16 put the button on row 15.
    assert_long_description_fits((80, 24), ScreenState::Landscape, (60, 15));
}

#[test]
fn long_description_wraps_in_narrow_portrait() {
    assert_long_description_fits((40, 24), ScreenState::PortraitDetail, (20, 15));
}
