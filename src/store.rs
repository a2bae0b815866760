//! Card collection store.
//!
//! Holds the ordered cards of one editing session. Identifiers come from a
//! counter owned by the store, not from the collection length, so they stay
//! unique even if cards are ever removed.

use crate::cards::{Card, CardId, CardOptions, CardRegistry, CardTag, Rendered};
use crate::{Error, Result};

#[derive(Clone, Debug)]
pub struct CardStore {
    registry: CardRegistry,
    cards: Vec<Card>,
    next_id: u32,
}

impl CardStore {
    pub fn new(registry: CardRegistry) -> Self {
        Self {
            registry,
            cards: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Append a card with default options.
    ///
    /// Always succeeds: an unknown tag produces a card whose content is
    /// `Rendered::Unsupported`.
    pub fn add_card(&mut self, tag: impl Into<CardTag>) -> &Card {
        let tag = tag.into();
        let id = CardId::new(self.next_id);
        self.next_id += 1;

        let content = self.render(&tag, None);
        log::debug!("adding card {} ({})", id, tag);
        self.cards.push(Card::new(id, tag, content));
        &self.cards[self.cards.len() - 1]
    }

    /// Replace the options of card `id` and re-render it.
    ///
    /// Options are replaced wholesale, never merged. The card's id and tag
    /// are unchanged.
    pub fn update_card(&mut self, id: CardId, options: CardOptions) -> Result<&Card> {
        let Some(index) = self.cards.iter().position(|c| c.id() == id) else {
            log::debug!("update for missing card {}", id);
            return Err(Error::NotFound(id));
        };

        let content = self.render(self.cards[index].tag(), Some(&options));
        self.cards[index].set_options(options, content);
        Ok(&self.cards[index])
    }

    /// Cards in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Switch the user that profile and stats cards render for. Every card is
    /// re-rendered so content keeps matching its inputs.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.registry.set_username(username);
        for i in 0..self.cards.len() {
            let content = self.render(self.cards[i].tag(), self.cards[i].options());
            self.cards[i].set_content(content);
        }
    }

    fn render(&self, tag: &CardTag, options: Option<&CardOptions>) -> Rendered {
        let rendered = self.registry.render(tag, options);
        if let Rendered::Unsupported(raw) = &rendered {
            log::warn!("Unsupported card type: {}", raw);
        }
        rendered
    }
}

impl Default for CardStore {
    fn default() -> Self {
        Self::new(CardRegistry::default())
    }
}
