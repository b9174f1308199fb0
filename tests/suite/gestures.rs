//! Mouse gestures driven through the terminal input layer.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::Position;

use gamefolio_engine::{App, HINT_RELEASE, Z_INDEX_DRAGGING};

use crate::common::{
    card, card_center, center, drag, drag_card_into_zone, feed, key, layout_for, press, release,
};

#[test]
fn drag_and_drop_selects_card() {
    let mut app = App::new(None);
    drag_card_into_zone(&mut app, "about");
    assert_eq!(app.state().selected_id().unwrap(), "about");
    assert!(!app.state().is_hovering());
    assert_eq!(app.view().info.title, "Über mich");
}

#[test]
fn hover_flag_follows_the_pointer() {
    let mut app = App::new(None);
    let layout = layout_for(&app);
    let from = card_center(&layout, "contact");
    let zone = center(layout.drop_zone);
    let panel = center(layout.info_panel);

    feed(&mut app, [press(from), drag(zone)]);
    assert!(app.state().is_hovering());
    assert_eq!(app.view().drop_zone.hint, HINT_RELEASE);

    feed(&mut app, [drag(panel)]);
    assert!(!app.state().is_hovering());

    feed(&mut app, [drag(zone), Event::FocusLost]);
    assert!(!app.state().is_hovering());
    assert!(app.is_dragging());
}

#[test]
fn dragged_card_is_raised_while_held() {
    let mut app = App::new(None);
    let layout = layout_for(&app);
    feed(&mut app, [press(card_center(&layout, "projects"))]);

    let layout = layout_for(&app);
    let top = layout.cards.last().unwrap();
    assert_eq!(top.id, card("projects"));
    assert_eq!(top.z_index, Z_INDEX_DRAGGING);
}

#[test]
fn release_over_info_panel_keeps_selection() {
    let mut app = App::new(None);
    drag_card_into_zone(&mut app, "about");

    let layout = layout_for(&app);
    let from = card_center(&layout, "projects");
    let panel = center(layout.info_panel);
    feed(&mut app, [press(from), drag(panel), release(panel)]);

    assert_eq!(app.state().selected_id().unwrap(), "about");
    assert!(!app.is_dragging());
}

#[test]
fn escape_mid_gesture_cancels() {
    let mut app = App::new(None);
    let layout = layout_for(&app);
    let from = card_center(&layout, "playground");
    let zone = center(layout.drop_zone);

    feed(&mut app, [press(from), drag(zone), key(KeyCode::Esc)]);
    assert!(!app.is_dragging());
    assert!(!app.state().is_hovering());

    // The release that follows belongs to no gesture.
    feed(&mut app, [release(zone)]);
    assert!(app.state().selected_id().is_none());
}

#[test]
fn release_without_press_is_ignored() {
    let mut app = App::new(None);
    let layout = layout_for(&app);
    feed(&mut app, [release(center(layout.drop_zone))]);
    assert!(app.state().selected_id().is_none());
    assert!(app.announcement().is_none());
}

#[test]
fn press_on_empty_space_does_not_start_a_gesture() {
    let mut app = App::new(None);
    feed(&mut app, [press(Position::new(0, 0))]);
    assert!(!app.is_dragging());
}

#[test]
fn sequential_gestures_replace_selection() {
    let mut app = App::new(None);
    drag_card_into_zone(&mut app, "about");
    drag_card_into_zone(&mut app, "playground");
    assert_eq!(app.state().selected_id().unwrap(), "playground");
    assert_eq!(app.announcement(), Some("Karte abgelegt: Playground"));
}

#[test]
fn q_quits() {
    let mut app = App::new(None);
    assert!(feed(&mut app, [key(KeyCode::Char('q'))]));
    assert!(app.should_quit());
}
