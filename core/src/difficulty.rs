use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Move count and swap speed of one difficulty tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub move_count: u16,
    pub transition_ms: u32,
}

impl DifficultyProfile {
    pub const fn new_unchecked(move_count: u16, transition_ms: u32) -> Self {
        Self {
            move_count,
            transition_ms,
        }
    }

    /// Timer period between two swaps, half again the transition so consecutive swaps never overlap on screen.
    pub const fn tick_interval_ms(&self) -> u32 {
        self.transition_ms.saturating_mul(3) / 2
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
            Extreme => "extreme",
        }
    }

    pub const fn profile(self) -> DifficultyProfile {
        use Difficulty::*;
        match self {
            Easy => DifficultyProfile::new_unchecked(5, 400),
            Medium => DifficultyProfile::new_unchecked(10, 300),
            Hard => DifficultyProfile::new_unchecked(15, 200),
            Extreme => DifficultyProfile::new_unchecked(30, 100),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == name)
            .ok_or_else(|| GameError::UnknownDifficulty(name.into()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
