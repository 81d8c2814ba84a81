//! Errors raised at the crate boundary (hand validation, board commits, API input).
//!
//! The decision engine itself is infallible over well-formed input; these
//! errors only surface where untrusted values enter.

use crate::types::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneralaError {
    #[error("a hand has exactly 5 dice, got {0}")]
    InvalidHandLength(usize),
    #[error("die face {0} is outside 1..=6")]
    InvalidFace(i32),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("category {0} already has a final score")]
    CategoryClosed(Category),
    #[error("round {0} is outside 1..=10")]
    InvalidRound(u32),
    #[error("rolls_left {0} is outside 0..=2")]
    InvalidRollsLeft(u32),
}

pub type Result<T> = std::result::Result<T, GeneralaError>;
