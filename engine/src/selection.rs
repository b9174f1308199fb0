//! Drag-and-drop selection state machine.
//!
//! Two independent axes are tracked: which card is selected (if any) and
//! whether an active drag is hovering the drop zone. Only a drop on the drop
//! zone changes the selection; every other way a gesture can end (drop
//! elsewhere, cancel, leaving the window) just clears the hover flag.

use serde::Serialize;
use tracing::debug;

use gamefolio_types::{Card, CardId, DragPayload, DropTarget};

use crate::Registry;

/// Transient selection state for one view instance.
///
/// Fields are only written by [`SelectionController`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    selected_id: Option<CardId>,
    is_hovering: bool,
}

impl SelectionState {
    #[must_use]
    pub fn selected_id(&self) -> Option<&CardId> {
        self.selected_id.as_ref()
    }

    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.is_hovering
    }
}

/// Outcome of feeding one gesture event to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The event referenced an unknown card or arrived outside a gesture.
    Ignored,
    /// Valid event, nothing changed.
    Unchanged,
    DragStarted { card_id: CardId },
    HoverChanged { hovering: bool },
    /// The gesture ended without touching the selection.
    Released,
    Selected {
        card_id: CardId,
        previous: Option<CardId>,
    },
}

impl Transition {
    /// Whether the visible page differs after this transition.
    #[must_use]
    pub fn changes_view(&self) -> bool {
        !matches!(self, Self::Ignored | Self::Unchanged)
    }
}

#[derive(Debug)]
pub struct SelectionController {
    registry: Registry,
    state: SelectionState,
    active: Option<DragPayload>,
}

impl SelectionController {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            state: SelectionState::default(),
            active: None,
        }
    }

    #[must_use]
    pub fn registry(&self) -> Registry {
        self.registry
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Payload of the gesture in progress, if any.
    #[must_use]
    pub fn active_drag(&self) -> Option<&DragPayload> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<&'static Card> {
        self.state
            .selected_id
            .as_ref()
            .and_then(|id| self.registry.get(id.as_str()))
    }

    /// Begins a gesture. The selection and hover flag are not touched.
    pub fn drag_start(&mut self, payload: DragPayload) -> Transition {
        if !self.registry.contains(payload.card_id.as_str()) {
            debug!(card_id = %payload.card_id, "Ignoring drag start for unknown card");
            return Transition::Ignored;
        }
        // A new press while a gesture is still open means the old one was lost.
        self.state.is_hovering = false;
        let card_id = payload.card_id.clone();
        debug!(card_id = %card_id, "Drag started");
        self.active = Some(payload);
        Transition::DragStarted { card_id }
    }

    /// Pointer moved during a gesture; `target` is the region now under it.
    pub fn drag_over(&mut self, target: DropTarget) -> Transition {
        if self.active.is_none() {
            return Transition::Ignored;
        }
        match target {
            DropTarget::DropZone => self.set_hovering(true),
            DropTarget::Elsewhere => self.set_hovering(false),
        }
    }

    /// Pointer left the drop zone, or left the window entirely.
    pub fn drag_leave(&mut self) -> Transition {
        if self.active.is_none() {
            return Transition::Ignored;
        }
        self.set_hovering(false)
    }

    /// Ends a gesture with a drop on `target`.
    ///
    /// A payload naming an unknown card leaves all state untouched.
    pub fn drop(&mut self, payload: &DragPayload, target: DropTarget) -> Transition {
        if !self.registry.contains(payload.card_id.as_str()) {
            debug!(card_id = %payload.card_id, "Ignoring drop for unknown card");
            return Transition::Ignored;
        }

        self.active = None;
        self.state.is_hovering = false;

        if target.is_drop_zone() {
            let previous = self.state.selected_id.replace(payload.card_id.clone());
            debug!(card_id = %payload.card_id, "Card dropped on drop zone");
            Transition::Selected {
                card_id: payload.card_id.clone(),
                previous,
            }
        } else {
            debug!(card_id = %payload.card_id, "Card dropped outside drop zone");
            Transition::Released
        }
    }

    /// Ends the active gesture with a drop on `target`.
    pub fn drop_active(&mut self, target: DropTarget) -> Transition {
        match self.active.clone() {
            Some(payload) => self.drop(&payload, target),
            None => Transition::Ignored,
        }
    }

    /// Gesture aborted (Esc, platform cancel). Same as a drop elsewhere.
    pub fn cancel(&mut self) -> Transition {
        if self.active.take().is_none() {
            return Transition::Ignored;
        }
        self.state.is_hovering = false;
        debug!("Drag cancelled");
        Transition::Released
    }

    fn set_hovering(&mut self, hovering: bool) -> Transition {
        if self.state.is_hovering == hovering {
            return Transition::Unchanged;
        }
        self.state.is_hovering = hovering;
        debug!(hovering, "Drop zone hover changed");
        Transition::HoverChanged { hovering }
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(Registry::reference())
    }
}
