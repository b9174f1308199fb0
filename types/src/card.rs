//! Card records.

use serde::Serialize;

use crate::CardId;

/// A titled, immutable text unit offered in the card hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    id: CardId,
    title: &'static str,
    text: &'static str,
}

impl Card {
    #[must_use]
    pub const fn new(id: &'static str, title: &'static str, text: &'static str) -> Self {
        Self {
            id: CardId::from_static(id),
            title,
            text,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Hover label shown for the card in the hand.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Karte: {}", self.title)
    }
}
