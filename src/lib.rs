// Library crate for rendering bridge hands
// Holdings are validated once on construction and rendered as plain text or HTML

pub mod holding;
pub mod shared;

// Re-export commonly used types
pub use holding::{FormatMode, Hand, HandError, HoldingError, Rank, Suit, SuitHolding};
pub use shared::AppError;
