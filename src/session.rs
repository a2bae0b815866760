//! Customization session: the single in-flight card edit.
//!
//! ```text
//! Idle --begin--> Editing --commit/cancel--> Idle
//! ```
//!
//! `begin` while already editing replaces the selection.

use crate::cards::{Card, CardId, CardKind, CardOptions, CardTag, TextStyle};
use crate::store::CardStore;
use crate::{Error, Result};

/// Option fields an editing surface can expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EditField {
    Text,
    TextSize,
    TextWeight,
    Markdown,
    ImageUrl,
    Caption,
    Color,
    Shadow,
    LinkUrl,
    LinkText,
    Icon,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum SessionState {
    #[default]
    Idle,
    Editing { card: CardId, kind: CardTag },
}

#[derive(Clone, Debug, Default)]
pub struct CustomizationSession {
    state: SessionState,
}

impl CustomizationSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `card` for editing, replacing any earlier selection.
    pub fn begin(&mut self, card: &Card) {
        if let SessionState::Editing { card: previous, .. } = &self.state {
            log::debug!("customization of {} replaced by {}", previous, card.id());
        }
        self.state = SessionState::Editing {
            card: card.id(),
            kind: card.tag().clone(),
        };
    }

    /// Write `options` into the selected card and end the session.
    ///
    /// With nothing selected this returns `NoActiveSelection` and touches
    /// nothing. Otherwise the session ends whether or not the update succeeds.
    pub fn commit<'s>(&mut self, store: &'s mut CardStore, options: CardOptions) -> Result<&'s Card> {
        match std::mem::take(&mut self.state) {
            SessionState::Idle => Err(Error::NoActiveSelection),
            SessionState::Editing { card, .. } => store.update_card(card, options),
        }
    }

    pub fn cancel(&mut self) {
        self.state = SessionState::Idle;
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == SessionState::Idle
    }

    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        match &self.state {
            SessionState::Editing { card, .. } => Some(*card),
            SessionState::Idle => None,
        }
    }

    /// Tag of the card being edited.
    #[must_use]
    pub fn kind(&self) -> Option<&CardTag> {
        match &self.state {
            SessionState::Editing { kind, .. } => Some(kind),
            SessionState::Idle => None,
        }
    }

    /// Fields the editing surface shows for the current kind. Empty when idle.
    #[must_use]
    pub fn fields(&self) -> Vec<EditField> {
        let Some(kind) = self.kind() else {
            return Vec::new();
        };
        let mut fields = match kind.kind() {
            Some(CardKind::Text) => vec![EditField::Text, EditField::TextSize, EditField::TextWeight],
            Some(CardKind::Markdown) => vec![EditField::Markdown],
            Some(CardKind::Image) => vec![EditField::ImageUrl, EditField::Caption],
            Some(CardKind::Link) => vec![EditField::LinkUrl, EditField::LinkText, EditField::Icon],
            Some(CardKind::Profile) => vec![EditField::TextSize, EditField::TextWeight, EditField::ImageUrl],
            Some(CardKind::Views) => vec![EditField::Text, EditField::Caption],
            Some(CardKind::Stats | CardKind::Social | CardKind::Template) | None => Vec::new(),
        };
        fields.extend([EditField::Color, EditField::Shadow]);
        fields
    }

    /// The starting values of the edit form.
    #[must_use]
    pub fn draft() -> CardOptions {
        CardOptions {
            text_style: Some(TextStyle::default()),
            image_url: Some(String::new()),
            color: Some("#000000".to_string()),
            shadow: Some("shadow-md".to_string()),
            link_url: Some(String::new()),
            link_text: Some(String::new()),
            icon: Some(String::new()),
            ..Default::default()
        }
    }
}
