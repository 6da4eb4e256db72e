#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use types::*;

mod board;
mod difficulty;
mod engine;
mod error;
mod game;
mod generator;
mod types;

/// How long a lifted shell stays up before the renderer lowers it again, counted from the reveal call.
pub const REVEAL_DISPLAY_MS: u32 = 800;

/// Delay before the automatic peek after setup actually lifts the shell.
pub const AUTO_PEEK_DELAY_MS: u32 = 300;

/// What the renderer is allowed to see about a lifted shell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub slot: Slot,
    pub has_marker: bool,
    /// `true` for a peek the player asked for, `false` for the automatic one.
    pub forced: bool,
}

impl Reveal {
    pub const fn lift_delay_ms(&self) -> u32 {
        if self.forced { 0 } else { AUTO_PEEK_DELAY_MS }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Peeked(Reveal),
    Guessed { reveal: Reveal, won: bool },
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Peeked(_) => true,
            Guessed { .. } => true,
        }
    }

    pub const fn reveal(self) -> Option<Reveal> {
        use RevealOutcome::*;
        match self {
            NoChange => None,
            Peeked(reveal) | Guessed { reveal, .. } => Some(reveal),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShakeOutcome {
    NoChange,
    Started(DifficultyProfile),
}

impl ShakeOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Started(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    Swapped(Move),
    /// Last tick of a shuffle, carrying the move it applied if there was one.
    Finished(Option<Move>),
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Swapped(_) => true,
            Finished(_) => true,
        }
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}
