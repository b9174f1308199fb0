//! Page geometry and hit-testing.
//!
//! The layout computed for the last drawn frame is what mouse events are
//! resolved against, so drawing and hit-testing can never disagree.

use ratatui::layout::{Constraint, Layout, Position, Rect};

use gamefolio_engine::{CardId, DragVisual, DropTarget, FanPose, PageView};

pub const TOP_BAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const CARD_WIDTH: u16 = 16;
pub const CARD_HEIGHT: u16 = 6;
const CARD_GAP: u16 = 1;
const MIN_MIDDLE_HEIGHT: u16 = 5;
/// Fan offsets are specified in pixels; a terminal row is roughly two of them.
const PX_PER_ROW: f32 = 2.0;

/// Rows a card drops below the top of the hand.
#[must_use]
pub fn fan_rows(pose: FanPose) -> u16 {
    (pose.offset_px / PX_PER_ROW).round().max(0.0) as u16
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSlot {
    pub id: CardId,
    /// Position of the card in the registry.
    pub index: usize,
    /// Resting place in the hand.
    pub rect: Rect,
    pub z_index: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub area: Rect,
    pub top_bar: Rect,
    pub drop_zone: Rect,
    pub info_panel: Rect,
    pub hand: Rect,
    pub status_bar: Rect,
    /// Card slots in paint order, topmost last.
    pub cards: Vec<CardSlot>,
}

impl PageLayout {
    #[must_use]
    pub fn compute(area: Rect, view: &PageView<'_>) -> Self {
        let max_lift = view
            .hand
            .iter()
            .map(|card| fan_rows(card.pose))
            .max()
            .unwrap_or(0);
        let hand_height = CARD_HEIGHT + max_lift;

        let [top_bar, middle, hand, status_bar] = Layout::vertical([
            Constraint::Length(TOP_BAR_HEIGHT),
            Constraint::Min(MIN_MIDDLE_HEIGHT),
            Constraint::Length(hand_height),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        let [drop_zone, info_panel] =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
                .spacing(1)
                .areas(middle);

        let card_width = CARD_WIDTH.min(hand.width);
        let count = u16::try_from(view.hand.len()).unwrap_or(u16::MAX);
        let step = card_step(hand.width, card_width, count);
        let total = step
            .saturating_mul(count.saturating_sub(1))
            .saturating_add(card_width);
        let start_x = hand.x + hand.width.saturating_sub(total) / 2;

        let cards: Vec<CardSlot> = view
            .hand_in_paint_order()
            .into_iter()
            .map(|card| {
                let index = u16::try_from(card.index).unwrap_or(u16::MAX);
                let lift = fan_rows(card.pose).min(hand.height);
                CardSlot {
                    id: card.id.clone(),
                    index: card.index,
                    rect: Rect {
                        x: start_x.saturating_add(step.saturating_mul(index)),
                        y: hand.y + lift,
                        width: card_width,
                        height: CARD_HEIGHT.min(hand.height - lift),
                    },
                    z_index: card.z_index,
                }
            })
            .collect();

        Self {
            area,
            top_bar,
            drop_zone,
            info_panel,
            hand,
            status_bar,
            cards,
        }
    }

    /// Topmost card under the pointer.
    #[must_use]
    pub fn card_at(&self, position: Position) -> Option<&CardSlot> {
        self.cards
            .iter()
            .rev()
            .find(|slot| slot.rect.contains(position))
    }

    #[must_use]
    pub fn drop_target_at(&self, position: Position) -> DropTarget {
        if self.drop_zone.contains(position) {
            DropTarget::DropZone
        } else {
            DropTarget::Elsewhere
        }
    }

    #[must_use]
    pub fn slot(&self, id: &CardId) -> Option<&CardSlot> {
        self.cards.iter().find(|slot| &slot.id == id)
    }

    /// Where a card picked up at `visual` is drawn, kept inside the page.
    #[must_use]
    pub fn dragged_rect(&self, slot: &CardSlot, visual: DragVisual) -> Rect {
        let width = slot.rect.width;
        let height = slot.rect.height;
        let max_x = self.area.right().saturating_sub(width).max(self.area.x);
        let max_y = self.area.bottom().saturating_sub(height).max(self.area.y);
        let x = visual
            .pointer
            .column
            .saturating_sub(visual.grab_column)
            .clamp(self.area.x, max_x);
        let y = visual
            .pointer
            .row
            .saturating_sub(visual.grab_row)
            .clamp(self.area.y, max_y);
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Horizontal distance between neighbouring cards; cards overlap when the
/// hand does not fit side by side.
fn card_step(available: u16, card_width: u16, count: u16) -> u16 {
    if count <= 1 {
        return 0;
    }
    let natural = card_width + CARD_GAP;
    let needed = natural.saturating_mul(count - 1).saturating_add(card_width);
    if needed <= available {
        natural
    } else {
        (available.saturating_sub(card_width) / (count - 1)).max(1)
    }
}
