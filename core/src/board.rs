use core::fmt;
use rand::prelude::*;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Session tally of scored guesses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    wins: u32,
    games: u32,
}

impl Score {
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    pub const fn games(&self) -> u32 {
        self.games
    }

    pub const fn losses(&self) -> u32 {
        self.games.saturating_sub(self.wins)
    }

    fn record(&mut self, won: bool) {
        self.games = self.games.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
        }
    }
}

/// Everything a renderer may see of a [`Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub layout: [Shell; 3],
    pub revealed: Option<Reveal>,
    pub awaiting_first_guess: bool,
    pub score: Score,
}

/// Which shell sits where, which one carries the marker and what is currently lifted.
///
/// The marker is bound to a shell, so swapping slots carries it along. Its position is deliberately not part of
/// the public surface, the only way to learn it is through a [`Reveal`]. Neither `Debug` nor [`BoardSnapshot`]
/// mention it.
#[derive(Clone, PartialEq)]
pub struct Board {
    layout: [Shell; 3],
    marker: Shell,
    revealed: Option<Reveal>,
    awaiting_first_guess: bool,
    score: Score,
}

impl Board {
    pub fn with_marker(slot: Slot) -> Self {
        Self {
            layout: Shell::ALL,
            marker: Shell::from_home(slot),
            revealed: None,
            awaiting_first_guess: false,
            score: Score::default(),
        }
    }

    /// Puts every shell back home and hides the marker under a uniformly random one. The score is kept.
    pub fn place_marker(&mut self, rng: &mut SmallRng) {
        let slot = Slot::ALL[rng.random_range(0..Slot::ALL.len())];
        self.layout = Shell::ALL;
        self.marker = Shell::from_home(slot);
        self.revealed = None;
        self.awaiting_first_guess = false;
        log::trace!("marker placed, shells back home");
    }

    /// Lifts `choice`, or the marker's own slot when there is no choice.
    ///
    /// The first reveal after a finished shuffle is the guess and gets scored, any later one is a plain peek.
    pub fn reveal(&mut self, choice: Option<Slot>) -> RevealOutcome {
        let marker_position = self.marker_position();
        let slot = choice.unwrap_or(marker_position);
        let reveal = Reveal {
            slot,
            has_marker: slot == marker_position,
            forced: choice.is_some(),
        };
        self.revealed = Some(reveal);

        if self.awaiting_first_guess {
            let won = choice == Some(marker_position);
            self.score.record(won);
            self.awaiting_first_guess = false;
            log::debug!(
                "guess {:?} against slot {}: {}",
                choice.map(Slot::number),
                marker_position,
                if won { "win" } else { "miss" }
            );
            RevealOutcome::Guessed { reveal, won }
        } else {
            RevealOutcome::Peeked(reveal)
        }
    }

    pub fn conceal(&mut self) -> bool {
        self.revealed.take().is_some()
    }

    /// Exchanges the shells resting in `from` and `to`.
    pub fn apply_swap(&mut self, from: Slot, to: Slot) {
        self.layout.swap(from.index(), to.index());
        log::trace!(
            "swap {} <-> {}: {:?}",
            from,
            to,
            self.layout.map(Shell::number)
        );
    }

    pub fn finish_shuffle(&mut self) {
        self.awaiting_first_guess = true;
        log::debug!("shuffle done, waiting for a guess");
    }

    pub fn shell_at(&self, slot: Slot) -> Shell {
        self.layout[slot.index()]
    }

    pub fn slot_of(&self, shell: Shell) -> Slot {
        Slot::ALL
            .into_iter()
            .find(|&slot| self.shell_at(slot) == shell)
            .unwrap_or(shell.home())
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.revealed
    }

    pub fn revealed_slot(&self) -> Option<Slot> {
        self.revealed.map(|reveal| reveal.slot)
    }

    pub fn awaiting_first_guess(&self) -> bool {
        self.awaiting_first_guess
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            layout: self.layout,
            revealed: self.revealed,
            awaiting_first_guess: self.awaiting_first_guess,
            score: self.score,
        }
    }

    pub(crate) fn marker_position(&self) -> Slot {
        self.slot_of(self.marker)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("layout", &self.layout)
            .field("revealed", &self.revealed)
            .field("awaiting_first_guess", &self.awaiting_first_guess)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::with_marker(Slot::First)
    }
}
