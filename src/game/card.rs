//! Cards and half-deck templates.

use serde::{Deserialize, Serialize};

/// An id-less entry of a half-deck, as supplied by the card data source.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Reference to the artwork shown on the face of the card
    pub artwork: String,
}

impl CardTemplate {
    /// A template showing `artwork`.
    pub fn new(artwork: impl Into<String>) -> Self {
        Self {
            artwork: artwork.into(),
        }
    }
}

/// A card on the board.
///
/// `id` is the pairing key: exactly two cards on a board share it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: u32,
    pub is_flipped: bool,
    pub is_matched: bool,
    pub artwork: String,
}

impl Card {
    /// A face-down, unmatched card built from a template.
    pub fn from_template(id: u32, template: &CardTemplate) -> Self {
        Self {
            id,
            is_flipped: false,
            is_matched: false,
            artwork: template.artwork.clone(),
        }
    }

    /// Turn the card face down and forget any match.
    pub(crate) fn reset(&mut self) {
        self.is_flipped = false;
        self.is_matched = false;
    }
}
