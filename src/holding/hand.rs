use std::fmt;
use tracing::debug;

use super::basic::Suit;
use super::errors::HandError;
use super::format::FormatMode;
use super::suit_holding::SuitHolding;

/// One hand's holdings in all four suits.
///
/// Each suit is validated on its own. Nothing checks the hand as a whole:
/// a hand may hold any number of cards.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawHand", into = "RawHand")]
pub struct Hand {
    spades: SuitHolding,
    hearts: SuitHolding,
    diamonds: SuitHolding,
    clubs: SuitHolding,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct RawHand {
    spades: String,
    hearts: String,
    diamonds: String,
    clubs: String,
}

impl Hand {
    /// Build a hand from four card strings in spades, hearts, diamonds, clubs
    /// order. The first suit that fails validation is reported.
    pub fn new(spades: &str, hearts: &str, diamonds: &str, clubs: &str) -> Result<Self, HandError> {
        Ok(Self {
            spades: holding(Suit::Spades, spades)?,
            hearts: holding(Suit::Hearts, hearts)?,
            diamonds: holding(Suit::Diamonds, diamonds)?,
            clubs: holding(Suit::Clubs, clubs)?,
        })
    }

    pub fn spades(&self) -> String {
        self.spades.cards()
    }

    pub fn hearts(&self) -> String {
        self.hearts.cards()
    }

    pub fn diamonds(&self) -> String {
        self.diamonds.cards()
    }

    pub fn clubs(&self) -> String {
        self.clubs.cards()
    }

    pub fn holding(&self, suit: Suit) -> &SuitHolding {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    /// Holdings in fixed S, H, D, C order.
    pub fn holdings(&self) -> [&SuitHolding; 4] {
        [&self.spades, &self.hearts, &self.diamonds, &self.clubs]
    }

    /// Render with a single-character directive, forwarded to every suit.
    pub fn format(&self, directive: Option<char>) -> String {
        self.render(FormatMode::from_directive(directive))
    }

    pub fn render(&self, mode: FormatMode) -> String {
        self.holdings()
            .iter()
            .map(|holding| holding.render(mode))
            .collect::<Vec<_>>()
            .join(mode.separator())
    }
}

fn holding(suit: Suit, cards: &str) -> Result<SuitHolding, HandError> {
    SuitHolding::with_suit(suit, cards).map_err(|source| {
        debug!(suit = %suit, "Hand rejected");
        HandError::InvalidHolding { suit, source }
    })
}

impl fmt::Display for Hand {
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

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("spades", &self.spades())
            .field("hearts", &self.hearts())
            .field("diamonds", &self.diamonds())
            .field("clubs", &self.clubs())
            .finish()
    }
}

impl TryFrom<RawHand> for Hand {
    type Error = HandError;

    fn try_from(raw: RawHand) -> Result<Self, Self::Error> {
        Self::new(&raw.spades, &raw.hearts, &raw.diamonds, &raw.clubs)
    }
}

impl From<Hand> for RawHand {
    fn from(hand: Hand) -> Self {
        Self {
            spades: hand.spades(),
            hearts: hand.hearts(),
            diamonds: hand.diamonds(),
            clubs: hand.clubs(),
        }
    }
}
