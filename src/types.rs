//! Core data structures: categories, per-category state and board snapshots.
//!
//! [`BoardSnapshot`] is a plain `Copy` value holding one player's column of the
//! score sheet. Simulations copy it freely; a copy never shares state with the
//! board it came from, so rollouts cannot leak into the live game.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{GeneralaError, Result};

/// One of the ten scoring rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Straight,
    FullHouse,
    FourOfAKind,
    Generala,
}

impl Category {
    /// All categories in board order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Straight,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::Generala,
    ];

    /// Position on the board (0..10).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Category> {
        Self::ALL.get(index).copied()
    }

    /// Face counted by an upper category (Ones=1 .. Sixes=6).
    pub fn face(self) -> Option<i32> {
        match self {
            Category::Ones => Some(1),
            Category::Twos => Some(2),
            Category::Threes => Some(3),
            Category::Fours => Some(4),
            Category::Fives => Some(5),
            Category::Sixes => Some(6),
            _ => None,
        }
    }

    /// Display name as printed on the score sheet.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::Straight => "Straight",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::Generala => "Generala",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = GeneralaError;

    /// Accepts the sheet name or the variant name, case-insensitively
    /// (`"Full House"`, `"FullHouse"`, `"full house"`). "Total" is never a category.
    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.name().replace(' ', "").to_ascii_lowercase() == wanted)
            .ok_or_else(|| GeneralaError::UnknownCategory(s.to_string()))
    }
}

/// State of one category for one player.
///
/// `final_score` is set once and never changes. `potential_score` is a display
/// value for the current dice; the engine never reads it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryState {
    pub final_score: Option<i32>,
    pub potential_score: i32,
}

impl CategoryState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.final_score.is_none()
    }
}

/// One player's score column: exactly the ten scoring categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    states: [CategoryState; CATEGORY_COUNT],
}

impl BoardSnapshot {
    /// Fresh board with every category open.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from final scores in board order (`None` = open).
    pub fn from_final_scores(scores: [Option<i32>; CATEGORY_COUNT]) -> Self {
        let mut board = Self::new();
        for (state, score) in board.states.iter_mut().zip(scores) {
            state.final_score = score;
        }
        board
    }

    pub fn final_scores(&self) -> [Option<i32>; CATEGORY_COUNT] {
        self.states.map(|s| s.final_score)
    }

    #[inline]
    pub fn state(&self, category: Category) -> &CategoryState {
        &self.states[category.index()]
    }

    #[inline]
    pub fn final_score(&self, category: Category) -> Option<i32> {
        self.states[category.index()].final_score
    }

    #[inline]
    pub fn is_open(&self, category: Category) -> bool {
        self.states[category.index()].is_open()
    }

    /// Open categories in board order.
    pub fn open_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(move |&c| self.is_open(c))
    }

    pub fn first_open(&self) -> Option<Category> {
        self.open_categories().next()
    }

    pub fn open_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_open()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|s| !s.is_open())
    }

    /// Sum of final scores; open categories count as 0.
    pub fn total(&self) -> i32 {
        self.states.iter().filter_map(|s| s.final_score).sum()
    }

    /// Record a final score. Fails if the category was already scored.
    pub fn commit(&mut self, category: Category, score: i32) -> Result<()> {
        if !self.is_open(category) {
            return Err(GeneralaError::CategoryClosed(category));
        }
        self.fill(category, score);
        Ok(())
    }

    /// Unchecked commit used by rollouts, which only ever pick open categories.
    #[inline]
    pub(crate) fn fill(&mut self, category: Category, score: i32) {
        debug_assert!(self.is_open(category), "{category} committed twice");
        self.states[category.index()].final_score = Some(score);
    }

    pub fn set_potential(&mut self, category: Category, score: i32) {
        self.states[category.index()].potential_score = score;
    }

    pub fn clear_potentials(&mut self) {
        for s in &mut self.states {
            s.potential_score = 0;
        }
    }
}

/// A seat at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Computer,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::Human, Seat::Computer];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Both players' columns. Reset by replacing it with [`Scoreboard::new`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    boards: [BoardSnapshot; 2],
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn board(&self, seat: Seat) -> &BoardSnapshot {
        &self.boards[seat.index()]
    }

    #[inline]
    pub fn board_mut(&mut self, seat: Seat) -> &mut BoardSnapshot {
        &mut self.boards[seat.index()]
    }

    pub fn total(&self, seat: Seat) -> i32 {
        self.board(seat).total()
    }
}
