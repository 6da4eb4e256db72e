use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// One of the three fixed display positions, numbered 1 to 3 from the left.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Slot {
    First,
    Second,
    Third,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    pub const fn new(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = GameError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number).ok_or(GameError::InvalidSlot(number))
    }
}

impl From<Slot> for u8 {
    fn from(slot: Slot) -> Self {
        slot.number()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A physical shell. Shells are named after the slot they rest in right after setup, the marker travels with them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shell(Slot);

impl Shell {
    pub const ALL: [Shell; 3] = [
        Shell(Slot::First),
        Shell(Slot::Second),
        Shell(Slot::Third),
    ];

    pub const fn from_home(home: Slot) -> Self {
        Self(home)
    }

    pub const fn home(self) -> Slot {
        self.0
    }

    pub const fn number(self) -> u8 {
        self.0.number()
    }
}

/// Adjacent swap used by the shuffle, the middle slot is part of every move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Swap the shells in slots 1 and 2.
    Left,
    /// Swap the shells in slots 2 and 3.
    Right,
}

impl Move {
    pub const fn slots(self) -> (Slot, Slot) {
        match self {
            Self::Left => (Slot::First, Slot::Second),
            Self::Right => (Slot::Second, Slot::Third),
        }
    }
}
