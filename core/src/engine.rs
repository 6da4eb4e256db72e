use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Idle,
    Running,
}

impl EngineState {
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Plays a fixed move sequence against a [`Board`], one move per external timer tick.
///
/// The engine never schedules anything itself. Whoever drives it starts a repeating timer with the period from
/// [`DifficultyProfile::tick_interval_ms`] when [`ShuffleEngine::start`] reports a start, and drops that timer once
/// [`ShuffleEngine::tick`] reports [`TickOutcome::Finished`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShuffleEngine {
    state: EngineState,
    moves: Vec<Move>,
    cursor: usize,
    profile: Option<DifficultyProfile>,
}

impl ShuffleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Profile of the shuffle in progress, `None` while idle.
    pub fn active_profile(&self) -> Option<DifficultyProfile> {
        self.profile.filter(|_| self.is_running())
    }

    pub fn moves_left(&self) -> usize {
        self.moves.len().saturating_sub(self.cursor)
    }

    /// Loads `moves` and switches to running. Ignored while a shuffle is already running.
    pub fn start(
        &mut self,
        board: &mut Board,
        profile: DifficultyProfile,
        moves: Vec<Move>,
    ) -> ShakeOutcome {
        if self.is_running() {
            return ShakeOutcome::NoChange;
        }

        board.conceal();
        log::debug!(
            "shuffle started: {} moves every {}ms",
            moves.len(),
            profile.tick_interval_ms()
        );
        self.moves = moves;
        self.cursor = 0;
        self.profile = Some(profile);
        self.state = EngineState::Running;
        ShakeOutcome::Started(profile)
    }

    /// Applies the next move. The tick that runs out of moves also hands the board back for guessing.
    pub fn tick(&mut self, board: &mut Board) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::NoChange;
        }

        let applied = self.moves.get(self.cursor).copied();
        if let Some(mv) = applied {
            let (from, to) = mv.slots();
            board.apply_swap(from, to);
            self.cursor += 1;

            if self.cursor < self.moves.len() {
                return TickOutcome::Swapped(mv);
            }
        }

        self.finish(board);
        TickOutcome::Finished(applied)
    }

    fn finish(&mut self, board: &mut Board) {
        self.state = EngineState::Idle;
        self.moves.clear();
        self.cursor = 0;
        board.finish_shuffle();
    }
}
