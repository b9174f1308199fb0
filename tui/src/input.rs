//! Input handling for the Gamefolio TUI.
//!
//! Mouse gestures are hit-tested against the layout of the last drawn frame
//! and translated into drag-and-drop callbacks on [`App`].

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use gamefolio_engine::{App, DragVisual, PointerPosition};

use crate::layout::PageLayout;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drains pending input for this frame. Returns `true` when the app should exit.
pub fn handle_events(app: &mut App, input: &mut InputPump, layout: &PageLayout) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev, layout) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Applies a single terminal event. Returns `true` when the app should exit.
pub fn apply_event(app: &mut App, event: Event, layout: &PageLayout) -> bool {
    match event {
        Event::Key(key) => {
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }
            // Ctrl+C exits immediately without going through request_quit.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return true;
            }
            handle_key(app, key);
        }
        Event::Mouse(mouse) => handle_mouse(app, mouse, layout),
        Event::FocusLost => {
            app.drag_leave();
        }
        Event::Resize(..) => app.request_redraw(),
        _ => {}
    }
    app.should_quit()
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.cancel_drag();
        }
        KeyCode::Char('q') => {
            if app.is_dragging() {
                app.cancel_drag();
            }
            app.request_quit();
        }
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, layout: &PageLayout) {
    let position = Position::new(mouse.column, mouse.row);
    let pointer = PointerPosition {
        column: mouse.column,
        row: mouse.row,
    };

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(slot) = layout.card_at(position) else {
                return;
            };
            let visual = DragVisual {
                pointer,
                grab_column: mouse.column.saturating_sub(slot.rect.x),
                grab_row: mouse.row.saturating_sub(slot.rect.y),
            };
            debug!(card_id = %slot.id, column = mouse.column, row = mouse.row, "Card picked up");
            app.begin_drag(slot.id.clone(), Some(visual));
        }
        MouseEventKind::Moved => {
            app.point_at(layout.card_at(position).map(|slot| slot.id.clone()));
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if app.is_dragging() {
                app.drag_to(layout.drop_target_at(position), Some(pointer));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if app.is_dragging() {
                app.release(layout.drop_target_at(position));
            }
        }
        _ => {}
    }
}
