use std::fmt;
use tracing::{debug, trace};

use super::basic::{Rank, Suit};
use super::errors::HoldingError;
use super::format::{FormatMode, VOID_MARKER};

/// One hand's holding in a single suit.
///
/// Construction is the only validation gate: the ranks are strictly
/// descending, except that the `x` placeholder may repeat. A holding is
/// never modified once built.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawSuitHolding", into = "RawSuitHolding")]
pub struct SuitHolding {
    suit: Suit,
    ranks: Vec<Rank>,
}

/// Serialized form, `{"suit": "S", "cards": "AKQ"}`.
#[derive(serde::Serialize, serde::Deserialize)]
struct RawSuitHolding {
    suit: char,
    cards: String,
}

impl SuitHolding {
    /// Validate a suit designator and a card string, both case-insensitive.
    pub fn new(suit: char, cards: &str) -> Result<Self, HoldingError> {
        let suit = Suit::try_from(suit).inspect_err(|err| {
            debug!(suit = %suit, error = %err, "Rejected suit designator");
        })?;
        Self::with_suit(suit, cards)
    }

    /// Validate a card string for an already-known suit.
    pub fn with_suit(suit: Suit, cards: &str) -> Result<Self, HoldingError> {
        let ranks = parse_ranks(cards).inspect_err(|err| {
            debug!(suit = %suit, cards, error = %err, "Rejected card holding");
        })?;
        trace!(suit = %suit, cards, "Accepted card holding");
        Ok(Self { suit, ranks })
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Canonical card string: uppercase ranks, lowercase `x`.
    pub fn cards(&self) -> String {
        self.ranks.iter().map(|rank| rank.symbol()).collect()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_void(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Render with a single-character directive; see [`FormatMode::from_directive`].
    pub fn format(&self, directive: Option<char>) -> String {
        self.render(FormatMode::from_directive(directive))
    }

    pub fn render(&self, mode: FormatMode) -> String {
        let cards = if self.ranks.is_empty() {
            VOID_MARKER.to_string()
        } else {
            self.ranks
                .iter()
                .map(|rank| rank.label())
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!("{} {}", mode.pip(self.suit), cards)
    }
}

/// Fail-fast scan; the first offending card is reported.
fn parse_ranks(cards: &str) -> Result<Vec<Rank>, HoldingError> {
    let mut ranks: Vec<Rank> = Vec::with_capacity(cards.len());

    for (position, c) in cards.chars().enumerate() {
        let invalid = || HoldingError::InvalidCards {
            cards: cards.to_string(),
            position,
        };

        let rank = Rank::from_char(c).ok_or_else(invalid)?;
        if let Some(&previous) = ranks.last() {
            let repeats_placeholder = rank == Rank::Small && previous == Rank::Small;
            if rank >= previous && !repeats_placeholder {
                return Err(invalid());
            }
        }
        ranks.push(rank);
    }

    Ok(ranks)
}

impl fmt::Display for SuitHolding {
    /// `{}` renders for the console, `{:#}` renders HTML.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if f.alternate() {
            FormatMode::Html
        } else {
            FormatMode::Plain
        };
        f.write_str(&self.render(mode))
    }
}

impl fmt::Debug for SuitHolding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuitHolding")
            .field("suit", &self.suit.symbol())
            .field("cards", &self.cards())
            .finish()
    }
}

impl TryFrom<RawSuitHolding> for SuitHolding {
    type Error = HoldingError;

    fn try_from(raw: RawSuitHolding) -> Result<Self, Self::Error> {
        Self::new(raw.suit, &raw.cards)
    }
}

impl From<SuitHolding> for RawSuitHolding {
    fn from(holding: SuitHolding) -> Self {
        Self {
            suit: holding.suit.symbol(),
            cards: holding.cards(),
        }
    }
}
