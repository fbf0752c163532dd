use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    // Glyph used when the board is printed as text
    pub fn symbol(self) -> char {
        match self {
            Player::First => 'O',
            Player::Second => 'X',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => write!(f, "white"),
            Player::Second => write!(f, "black"),
        }
    }
}

// One value per player, indexed by Player
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerPlayer<T>([T; 2]);

impl<T> PerPlayer<T> {
    pub fn new(first: T, second: T) -> Self {
        PerPlayer([first, second])
    }
}

impl<T> Index<Player> for PerPlayer<T> {
    type Output = T;
    fn index(&self, index: Player) -> &Self::Output {
        match index {
            Player::First => &self.0[0],
            Player::Second => &self.0[1],
        }
    }
}

impl<T> IndexMut<Player> for PerPlayer<T> {
    fn index_mut(&mut self, index: Player) -> &mut Self::Output {
        match index {
            Player::First => &mut self.0[0],
            Player::Second => &mut self.0[1],
        }
    }
}
