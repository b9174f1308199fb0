//! Render model.
//!
//! [`PageView`] is the full render tree of the page, recomputed from the
//! registry and selection state after every transition. Front ends draw it;
//! it holds no state of its own.

use serde::Serialize;

use gamefolio_config::PageMeta;
use gamefolio_types::{Card, CardId};

use crate::fan::{FanPose, fan_pose, z_index};
use crate::selection::SelectionController;

pub const HINT_IDLE: &str = "Ziehe eine Karte hierher";
pub const HINT_RELEASE: &str = "Loslassen, um Karte abzulegen";
pub const DROP_ZONE_LABEL: &str = "Karten-Bereich (ziehe eine Karte hierher)";
pub const HAND_LABEL: &str = "Karten-Hand";
pub const PLACEHOLDER_TITLE: &str = "Info";
pub const PLACEHOLDER_TEXT: &str =
    "Noch keine Karte abgelegt. Ziehe unten eine Karte in den linken Bereich.";

#[derive(Debug, Clone, Serialize)]
pub struct PageView<'a> {
    pub shell: ShellView<'a>,
    pub drop_zone: DropZoneView,
    pub info: InfoPanelView,
    pub hand: Vec<CardView>,
    /// Polite live-region message for the latest selection.
    pub announcement: Option<&'a str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShellView<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub brand: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropZoneView {
    pub hovering: bool,
    pub hint: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPanelView {
    pub title: &'static str,
    pub text: &'static str,
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: CardId,
    pub title: &'static str,
    pub label: String,
    pub index: usize,
    pub pose: FanPose,
    pub z_index: u16,
    pub dragging: bool,
    pub selected: bool,
    /// The pointer rests on this card outside a gesture.
    pub under_pointer: bool,
}

impl<'a> PageView<'a> {
    #[must_use]
    pub fn build(
        selection: &SelectionController,
        meta: &'a PageMeta,
        announcement: Option<&'a str>,
    ) -> Self {
        let state = selection.state();
        let hovering = state.is_hovering();
        let drop_zone = DropZoneView {
            hovering,
            hint: if hovering { HINT_RELEASE } else { HINT_IDLE },
            label: DROP_ZONE_LABEL,
        };

        let info = match selection.selected_card() {
            Some(card) => InfoPanelView {
                title: card.title(),
                text: card.text(),
                placeholder: false,
            },
            None => InfoPanelView {
                title: PLACEHOLDER_TITLE,
                text: PLACEHOLDER_TEXT,
                placeholder: true,
            },
        };

        let cards = selection.registry().cards();
        let dragged = selection.active_drag().map(|payload| &payload.card_id);
        let selected = state.selected_id();
        let hand = cards
            .iter()
            .enumerate()
            .map(|(index, card)| card_view(card, index, cards.len(), dragged, selected))
            .collect();

        Self {
            shell: ShellView {
                title: &meta.title,
                description: &meta.description,
                brand: &meta.brand,
            },
            drop_zone,
            info,
            hand,
            announcement,
        }
    }

    /// Marks the card the pointer rests on, so its label can be shown.
    #[must_use]
    pub fn with_pointer_over(mut self, card_id: Option<&CardId>) -> Self {
        for card in &mut self.hand {
            card.under_pointer = card_id == Some(&card.id);
        }
        self
    }

    /// Label of the card under the pointer.
    #[must_use]
    pub fn tooltip(&self) -> Option<&str> {
        self.hand
            .iter()
            .find(|card| card.under_pointer)
            .map(|card| card.label.as_str())
    }

    /// Cards in paint order: lowest stacking order first.
    #[must_use]
    pub fn hand_in_paint_order(&self) -> Vec<&CardView> {
        let mut cards: Vec<&CardView> = self.hand.iter().collect();
        cards.sort_by_key(|card| card.z_index);
        cards
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn card_view(
    card: &'static Card,
    index: usize,
    total: usize,
    dragged: Option<&CardId>,
    selected: Option<&CardId>,
) -> CardView {
    let dragging = dragged == Some(card.id());
    CardView {
        id: card.id().clone(),
        title: card.title(),
        label: card.label(),
        index,
        pose: fan_pose(index, total),
        z_index: z_index(index, dragging),
        dragging,
        selected: selected == Some(card.id()),
        under_pointer: false,
    }
}
