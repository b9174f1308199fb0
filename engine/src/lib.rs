//! Core engine for Gamefolio - card registry, selection state machine and render model.
//!
//! This crate contains the App state owner without TUI dependencies. Every
//! gesture callback funnels through [`App`], which applies it to the
//! [`SelectionController`] and requests a redraw when the page changed.

mod fan;
mod registry;
mod selection;
mod view;

pub use fan::{
    FAN_ANGLE_STEP_DEG, FAN_OFFSET_STEP_PX, FanPose, Z_INDEX_BASE, Z_INDEX_DRAGGING, fan_pose,
    z_index,
};
pub use registry::Registry;
pub use selection::{SelectionController, SelectionState, Transition};
pub use view::{
    CardView, DROP_ZONE_LABEL, DropZoneView, HAND_LABEL, HINT_IDLE, HINT_RELEASE, InfoPanelView,
    PLACEHOLDER_TEXT, PLACEHOLDER_TITLE, PageView, ShellView,
};

pub use gamefolio_config::{ConfigError, GamefolioConfig, PageMeta};
pub use gamefolio_types::ui::UiOptions;
pub use gamefolio_types::{Card, CardId, DragPayload, DropTarget, EmptyCardIdError};

use std::mem;

use tracing::{Level, debug, info, trace};

/// Pointer position in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerPosition {
    pub column: u16,
    pub row: u16,
}

/// Where the dragged card is drawn while it follows the pointer.
///
/// `grab_column`/`grab_row` is the offset inside the card where it was picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragVisual {
    pub pointer: PointerPosition,
    pub grab_column: u16,
    pub grab_row: u16,
}

pub struct App {
    selection: SelectionController,
    page: PageMeta,
    ui_options: UiOptions,
    drag_visual: Option<DragVisual>,
    pointer_over: Option<CardId>,
    announcement: Option<String>,
    redraw: bool,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&GamefolioConfig>) -> Self {
        let registry = Registry::reference();
        // No config file still honours the environment overrides.
        let fallback = GamefolioConfig::default();
        let config = config.unwrap_or(&fallback);
        let page = config.page_meta();
        let ui_options = config.ui_options();
        info!(cards = registry.len(), title = %page.title, "Gamefolio page initialized");
        Self {
            selection: SelectionController::new(registry),
            page,
            ui_options,
            drag_visual: None,
            pointer_over: None,
            announcement: None,
            redraw: true,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        self.selection.state()
    }

    #[must_use]
    pub fn registry(&self) -> Registry {
        self.selection.registry()
    }

    #[must_use]
    pub fn page(&self) -> &PageMeta {
        &self.page
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn drag_visual(&self) -> Option<DragVisual> {
        self.drag_visual
    }

    #[must_use]
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    /// Current render tree.
    #[must_use]
    pub fn view(&self) -> PageView<'_> {
        PageView::build(&self.selection, &self.page, self.announcement.as_deref())
            .with_pointer_over(self.pointer_over.as_ref())
    }

    /// Starts dragging `card_id`. `visual` is where the pointer grabbed the card.
    pub fn begin_drag(&mut self, card_id: CardId, visual: Option<DragVisual>) -> Transition {
        let transition = self.selection.drag_start(DragPayload::new(card_id));
        if transition.changes_view() {
            self.drag_visual = visual;
        }
        self.apply(transition)
    }

    /// Starts a drag from an untyped transport payload. Blank payloads are ignored.
    pub fn begin_drag_raw(&mut self, raw: &str, visual: Option<DragVisual>) -> Transition {
        match CardId::new(raw) {
            Ok(card_id) => self.begin_drag(card_id, visual),
            Err(err) => {
                debug!(%err, "Ignoring malformed drag payload");
                Transition::Ignored
            }
        }
    }

    /// Pointer motion during a drag.
    pub fn drag_to(&mut self, target: DropTarget, pointer: Option<PointerPosition>) -> Transition {
        let transition = self.selection.drag_over(target);
        if let (Some(visual), Some(pointer)) = (self.drag_visual.as_mut(), pointer)
            && visual.pointer != pointer
        {
            visual.pointer = pointer;
            self.redraw = true;
        }
        self.apply(transition)
    }

    /// Pointer left the drop zone or the window.
    pub fn drag_leave(&mut self) -> Transition {
        let transition = self.selection.drag_leave();
        self.apply(transition)
    }

    /// Releases the active drag over `target`.
    pub fn release(&mut self, target: DropTarget) -> Transition {
        let transition = self.selection.drop_active(target);
        self.finish_gesture();
        self.apply(transition)
    }

    /// Drop reported by a host that carries its own payload.
    pub fn drop_payload(&mut self, payload: &DragPayload, target: DropTarget) -> Transition {
        let transition = self.selection.drop(payload, target);
        if transition.changes_view() {
            self.finish_gesture();
        }
        self.apply(transition)
    }

    pub fn cancel_drag(&mut self) -> Transition {
        let transition = self.selection.cancel();
        self.finish_gesture();
        self.apply(transition)
    }

    /// Pointer moved with no button held; `card_id` is the card under it.
    pub fn point_at(&mut self, card_id: Option<CardId>) {
        if self.pointer_over != card_id {
            self.pointer_over = card_id;
            self.redraw = true;
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.selection.is_dragging()
    }

    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Returns whether a redraw is pending and clears the request.
    pub fn take_redraw(&mut self) -> bool {
        mem::take(&mut self.redraw)
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    fn finish_gesture(&mut self) {
        if self.drag_visual.take().is_some() {
            self.redraw = true;
        }
    }

    fn apply(&mut self, transition: Transition) -> Transition {
        if let Transition::Selected { card_id, previous } = &transition {
            if let Some(card) = self.selection.registry().get(card_id.as_str()) {
                self.announcement = Some(format!("Karte abgelegt: {}", card.title()));
            }
            info!(
                card_id = %card_id,
                previous = previous.as_ref().map(CardId::as_str),
                "Card selected"
            );
        }

        if transition.changes_view() {
            self.redraw = true;
            if tracing::enabled!(Level::TRACE) {
                trace!(view = %self.view().to_json(), "Render tree updated");
            }
        }
        transition
    }
}
