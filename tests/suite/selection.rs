//! Selection behavior observed through the public `App` surface.

use gamefolio_engine::{
    App, DragPayload, DropTarget, HINT_IDLE, HINT_RELEASE, PLACEHOLDER_TEXT, Registry, Transition,
};

use crate::common::card;

fn select(app: &mut App, id: &str) {
    app.begin_drag(card(id), None);
    app.drag_to(DropTarget::DropZone, None);
    app.release(DropTarget::DropZone);
}

#[test]
fn every_registered_card_is_found_by_id() {
    let registry = Registry::reference();
    assert_eq!(registry.len(), 4);
    for entry in registry.cards() {
        let found = registry.get(entry.id().as_str()).unwrap();
        assert_eq!(found, entry);
    }
    assert!(registry.get("missing").is_none());
}

#[test]
fn initial_page_shows_placeholder() {
    let app = App::new(None);
    assert!(app.state().selected_id().is_none());
    assert!(!app.state().is_hovering());
    let view = app.view();
    assert_eq!(view.info.text, PLACEHOLDER_TEXT);
    assert_eq!(view.drop_zone.hint, HINT_IDLE);
}

#[test]
fn hovering_changes_hint_but_not_selection() {
    let mut app = App::new(None);
    app.begin_drag(card("about"), None);
    assert!(!app.state().is_hovering());

    app.drag_to(DropTarget::DropZone, None);
    assert!(app.state().is_hovering());
    assert_eq!(app.view().drop_zone.hint, HINT_RELEASE);
    assert!(app.state().selected_id().is_none());

    // Repeated drag-over is idempotent.
    assert_eq!(app.drag_to(DropTarget::DropZone, None), Transition::Unchanged);

    app.drag_leave();
    assert!(!app.state().is_hovering());
    assert_eq!(app.view().drop_zone.hint, HINT_IDLE);
}

#[test]
fn drop_on_zone_selects_card() {
    let mut app = App::new(None);
    select(&mut app, "projects");
    assert_eq!(app.state().selected_id().unwrap(), "projects");
    assert!(!app.state().is_hovering());
    let view = app.view();
    assert_eq!(view.info.title, "Projekte");
    assert_eq!(view.info.text, "Mini-Projekte ... (Itch.io usw.)");
    assert!(!view.info.placeholder);
}

#[test]
fn drop_elsewhere_keeps_previous_selection() {
    let mut app = App::new(None);
    select(&mut app, "about");

    app.begin_drag(card("projects"), None);
    app.drag_to(DropTarget::DropZone, None);
    app.drag_to(DropTarget::Elsewhere, None);
    assert_eq!(app.release(DropTarget::Elsewhere), Transition::Released);

    assert_eq!(app.state().selected_id().unwrap(), "about");
    assert!(!app.state().is_hovering());
}

#[test]
fn last_successful_drop_wins() {
    let mut app = App::new(None);
    select(&mut app, "about");
    select(&mut app, "contact");
    assert_eq!(app.state().selected_id().unwrap(), "contact");
    let view = app.view();
    let selected: Vec<&str> = view
        .hand
        .iter()
        .filter(|card| card.selected)
        .map(|card| card.id.as_str())
        .collect();
    assert_eq!(selected, ["contact"]);
}

#[test]
fn unknown_payload_is_a_noop() {
    let mut app = App::new(None);
    select(&mut app, "playground");
    app.take_redraw();

    let payload = DragPayload::parse("does-not-exist").unwrap();
    assert_eq!(
        app.drop_payload(&payload, DropTarget::DropZone),
        Transition::Ignored
    );
    assert_eq!(app.begin_drag_raw("   ", None), Transition::Ignored);
    assert_eq!(
        app.begin_drag(card("does-not-exist"), None),
        Transition::Ignored
    );

    assert_eq!(app.state().selected_id().unwrap(), "playground");
    assert!(!app.is_dragging());
    assert!(!app.take_redraw());
}

#[test]
fn cancel_is_drop_elsewhere() {
    let mut app = App::new(None);
    select(&mut app, "about");
    app.begin_drag(card("contact"), None);
    app.drag_to(DropTarget::DropZone, None);

    app.cancel_drag();
    assert!(!app.state().is_hovering());
    assert!(!app.is_dragging());
    assert_eq!(app.state().selected_id().unwrap(), "about");
}

#[test]
fn host_drop_with_its_own_payload() {
    let mut app = App::new(None);
    let payload = DragPayload::parse("contact").unwrap();
    let transition = app.drop_payload(&payload, DropTarget::from_id(Some("drop-zone")));
    assert_eq!(
        transition,
        Transition::Selected {
            card_id: card("contact"),
            previous: None,
        }
    );
    assert_eq!(app.announcement(), Some("Karte abgelegt: Kontakt"));
}
