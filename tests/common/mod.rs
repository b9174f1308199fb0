//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use gamefolio_engine::{App, CardId};
use gamefolio_tui::{PageLayout, apply_event};

pub const WIDTH: u16 = 80;
pub const HEIGHT: u16 = 30;

pub fn card(id: &str) -> CardId {
    CardId::new(id).expect("fixture ids are non-blank")
}

/// Layout of an 80x30 terminal for the app's current page.
pub fn layout_for(app: &App) -> PageLayout {
    PageLayout::compute(Rect::new(0, 0, WIDTH, HEIGHT), &app.view())
}

pub fn center(rect: Rect) -> Position {
    Position::new(rect.x + rect.width / 2, rect.y + rect.height / 2)
}

pub fn card_center(layout: &PageLayout, id: &str) -> Position {
    let slot = layout.slot(&card(id)).expect("card is laid out");
    center(slot.rect)
}

pub fn mouse(kind: MouseEventKind, at: Position) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: at.x,
        row: at.y,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn press(at: Position) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), at)
}

pub fn drag(at: Position) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), at)
}

pub fn release(at: Position) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), at)
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Feeds events through the input layer, recomputing the layout after each
/// one the way the render loop does.
pub fn feed(app: &mut App, events: impl IntoIterator<Item = Event>) -> bool {
    let mut quit = false;
    for event in events {
        let layout = layout_for(app);
        quit |= apply_event(app, event, &layout);
    }
    quit
}

/// Full mouse gesture: pick up `id`, move over the drop zone and let go there.
pub fn drag_card_into_zone(app: &mut App, id: &str) {
    let layout = layout_for(app);
    let from = card_center(&layout, id);
    let to = center(layout.drop_zone);
    feed(app, [press(from), drag(to), release(to)]);
}
