pub mod basic;
pub mod errors;
pub mod format;
pub mod hand;
pub mod suit_holding;


pub use basic::{Rank, Suit, HONORS, SPOT_CARDS, SUITS, SUIT_PIPS, SUIT_PIPS_HTML};
pub use errors::{HandError, HoldingError};
pub use format::{FormatMode, HTML_DIRECTIVE, VOID_MARKER};
pub use hand::Hand;
pub use suit_holding::SuitHolding;
