use std::fmt;
use strum_macros::EnumIter;

use super::errors::HoldingError;

/// One-character representations for ace through ten.
pub const HONORS: &str = "AKQJT";
/// One-character representations for spades, hearts, diamonds and clubs.
pub const SUITS: &str = "SHDC";
/// Spot cards below the ten, followed by the small-card placeholder.
pub const SPOT_CARDS: &str = "98765432x";

/// Suit glyphs for console display, indexed by `Suit::index`.
pub const SUIT_PIPS: [&str; 4] = ["\u{2660}", "\u{2661}", "\u{2662}", "\u{2663}"];

/// Suit markup for HTML display, indexed by `Suit::index`.
pub const SUIT_PIPS_HTML: [&str; 4] = [
    "&#9824;",
    "<span style=\"color: rgb(192, 22, 22);\">&#9829;</span>",
    "<span style=\"color: rgb(192, 22, 22);\">&#9830;</span>",
    "&#9827;",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(into = "char", try_from = "char")]
pub enum Suit {
    Spades = 0,
    Hearts = 1,
    Diamonds = 2,
    Clubs = 3,
}

impl Suit {
    /// Position of the suit in the fixed S, H, D, C order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn pip(self) -> &'static str {
        SUIT_PIPS[self.index()]
    }

    pub fn pip_html(self) -> &'static str {
        SUIT_PIPS_HTML[self.index()]
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Suit {
    type Error = HoldingError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'S' => Ok(Suit::Spades),
            'H' => Ok(Suit::Hearts),
            'D' => Ok(Suit::Diamonds),
            'C' => Ok(Suit::Clubs),
            _ => Err(HoldingError::InvalidSuit { suit: c }),
        }
    }
}

impl From<Suit> for char {
    fn from(suit: Suit) -> char {
        suit.symbol()
    }
}

/// A card rank within a holding, listed from the highest card down.
///
/// `Small` is the `x` placeholder: an unspecified low card. It ranks below
/// every named rank and is the only rank that may repeat in a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Rank {
    Ace = 0,
    King = 1,
    Queen = 2,
    Jack = 3,
    Ten = 4,
    Nine = 5,
    Eight = 6,
    Seven = 7,
    Six = 8,
    Five = 9,
    Four = 10,
    Three = 11,
    Two = 12,
    Small = 13,
}

impl Rank {
    /// Case-insensitive lookup of a rank symbol.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Rank::Ace),
            'K' => Some(Rank::King),
            'Q' => Some(Rank::Queen),
            'J' => Some(Rank::Jack),
            'T' => Some(Rank::Ten),
            '9' => Some(Rank::Nine),
            '8' => Some(Rank::Eight),
            '7' => Some(Rank::Seven),
            '6' => Some(Rank::Six),
            '5' => Some(Rank::Five),
            '4' => Some(Rank::Four),
            '3' => Some(Rank::Three),
            '2' => Some(Rank::Two),
            'X' => Some(Rank::Small),
            _ => None,
        }
    }

    /// Canonical one-character form: uppercase, except the lowercase `x`.
    pub fn symbol(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::King => 'K',
            Rank::Queen => 'Q',
            Rank::Jack => 'J',
            Rank::Ten => 'T',
            Rank::Nine => '9',
            Rank::Eight => '8',
            Rank::Seven => '7',
            Rank::Six => '6',
            Rank::Five => '5',
            Rank::Four => '4',
            Rank::Three => '3',
            Rank::Two => '2',
            Rank::Small => 'x',
        }
    }

    /// Text used when rendering a holding.
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::King => "K",
            Rank::Queen => "Q",
            Rank::Jack => "J",
            Rank::Ten => "10",
            Rank::Nine => "9",
            Rank::Eight => "8",
            Rank::Seven => "7",
            Rank::Six => "6",
            Rank::Five => "5",
            Rank::Four => "4",
            Rank::Three => "3",
            Rank::Two => "2",
            Rank::Small => "x",
        }
    }

    pub fn is_honor(self) -> bool {
        HONORS.contains(self.symbol())
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    // Lower discriminant is the stronger card.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*other as u8).cmp(&(*self as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_suit_try_from() {
        assert_eq!(Suit::try_from('S'), Ok(Suit::Spades));
        assert_eq!(Suit::try_from('h'), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from('D'), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from('c'), Ok(Suit::Clubs));

        assert_eq!(
            Suit::try_from('N'),
            Err(HoldingError::InvalidSuit { suit: 'N' })
        );
        assert!(Suit::try_from(' ').is_err());
    }

    #[test]
    fn test_suit_order_matches_tables() {
        let symbols: String = Suit::iter().map(Suit::symbol).collect();
        assert_eq!(symbols, SUITS);

        for suit in Suit::iter() {
            assert_eq!(SUIT_PIPS[suit.index()], suit.pip());
            assert_eq!(SUIT_PIPS_HTML[suit.index()], suit.pip_html());
        }
    }

    #[test]
    fn test_suit_display() {
        assert_eq!(Suit::Spades.to_string(), "S");
        assert_eq!(Suit::Hearts.to_string(), "H");
        assert_eq!(Suit::Diamonds.to_string(), "D");
        assert_eq!(Suit::Clubs.to_string(), "C");
    }

    #[test]
    fn test_rank_alphabet_order() {
        let alphabet: String = Rank::iter().map(Rank::symbol).collect();
        assert_eq!(alphabet, format!("{HONORS}{SPOT_CARDS}"));
    }

    #[test]
    fn test_rank_from_char() {
        for rank in Rank::iter() {
            assert_eq!(Rank::from_char(rank.symbol()), Some(rank));
            assert_eq!(
                Rank::from_char(rank.symbol().to_ascii_lowercase()),
                Some(rank)
            );
        }

        assert_eq!(Rank::from_char('X'), Some(Rank::Small));
        assert_eq!(Rank::from_char('1'), None);
        assert_eq!(Rank::from_char('0'), None);
        assert_eq!(Rank::from_char('Z'), None);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Ten > Rank::Nine);
        assert!(Rank::Two > Rank::Small);

        let ranks: Vec<Rank> = Rank::iter().collect();
        assert!(ranks.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn test_rank_label() {
        assert_eq!(Rank::Ten.label(), "10");
        assert_eq!(Rank::Small.label(), "x");
        assert_eq!(Rank::Ace.label(), "A");
    }

    #[test]
    fn test_honors() {
        let honors: Vec<Rank> = Rank::iter().filter(|rank| rank.is_honor()).collect();
        assert_eq!(
            honors,
            vec![Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
        );
    }
}
