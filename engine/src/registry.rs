//! The card registry: a fixed, ordered list of cards built at compile time.

use gamefolio_types::Card;

static CARDS: [Card; 4] = [
    Card::new(
        "about",
        "Über mich",
        "Hi, ich bin Fabio ... (About-Text gekürzt)",
    ),
    Card::new("projects", "Projekte", "Mini-Projekte ... (Itch.io usw.)"),
    Card::new(
        "contact",
        "Kontakt",
        "Kontaktformular / Mail / LinkedIn ...",
    ),
    Card::new(
        "playground",
        "Playground",
        "Dev-Diary, Experimente, UI-Patterns ...",
    ),
];

/// Read-only view over a static card list.
///
/// Lookups that miss return `None`; callers treat that as "no card", never as
/// an error.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    cards: &'static [Card],
}

impl Registry {
    /// The portfolio's card hand.
    #[must_use]
    pub fn reference() -> Self {
        Self { cards: &CARDS }
    }

    #[must_use]
    pub fn cards(&self) -> &'static [Card] {
        self.cards
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static Card> {
        self.cards.iter().find(|card| card.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::reference()
    }
}
