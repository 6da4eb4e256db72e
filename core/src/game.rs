use core::fmt;
use rand::prelude::*;
use rand::rngs::SmallRng;

use crate::*;

/// Command surface for one play session: board, shuffle engine, selected tier and the session RNG.
///
/// All commands are forgiving. Input that makes no sense right now is logged and ignored, nothing here fails.
///
/// The RNG state never leaves this type, it would predict every future placement and shuffle.
#[derive(Clone)]
pub struct ShellGame {
    board: Board,
    engine: ShuffleEngine,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl ShellGame {
    pub fn new(seed: u64) -> Self {
        Self::with_difficulty(seed, Difficulty::default())
    }

    pub fn with_difficulty(seed: u64, difficulty: Difficulty) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::default();
        board.place_marker(&mut rng);
        Self {
            board,
            engine: ShuffleEngine::new(),
            difficulty,
            rng,
        }
    }

    /// Starts a new round: shells go back home, the marker is hidden again and then shown with a sneak peek.
    pub fn setup(&mut self) -> RevealOutcome {
        if self.engine.is_running() {
            log::warn!("setup ignored, shuffle still running");
            return RevealOutcome::NoChange;
        }

        self.board.place_marker(&mut self.rng);
        log::debug!("new round on {}", self.difficulty);
        self.board.reveal(None)
    }

    pub fn shake(&mut self) -> ShakeOutcome {
        if self.engine.is_running() {
            log::debug!("shake ignored, already running");
            return ShakeOutcome::NoChange;
        }

        let profile = self.difficulty.profile();
        let moves = RandomMoveGenerator::new(self.rng.random()).generate(profile.move_count);
        self.engine.start(&mut self.board, profile, moves)
    }

    /// Timer callback for a running shuffle.
    pub fn tick(&mut self) -> TickOutcome {
        self.engine.tick(&mut self.board)
    }

    /// Lifts the shell in slot `choice`. A missing or out of range choice lifts the marker's shell instead.
    pub fn peak(&mut self, choice: Option<u8>) -> RevealOutcome {
        if self.engine.is_running() {
            log::warn!("peek at {:?} ignored while shells are moving", choice);
            return RevealOutcome::NoChange;
        }

        let slot = choice.and_then(|number| {
            Slot::try_from(number)
                .inspect_err(|err| log::debug!("{}, revealing the marker instead", err))
                .ok()
        });
        self.board.reveal(slot)
    }

    /// Lowers the lifted shell once its display time is up.
    pub fn conceal(&mut self) -> bool {
        self.board.conceal()
    }

    /// Selects a tier by name. Unknown names keep the current tier. A running shuffle keeps its own tier.
    pub fn set_difficulty(&mut self, name: &str) -> bool {
        match name.parse() {
            Ok(difficulty) => {
                self.select_difficulty(difficulty);
                true
            }
            Err(err) => {
                log::warn!("{}, keeping {}", err, self.difficulty);
                false
            }
        }
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log::debug!("difficulty {} -> {}", self.difficulty, difficulty);
        }
        self.difficulty = difficulty;
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    pub fn awaiting_first_guess(&self) -> bool {
        self.board.awaiting_first_guess()
    }

    pub fn state(&self) -> EngineState {
        self.engine.state()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.board.revealed()
    }

    pub fn slot_of(&self, shell: Shell) -> Slot {
        self.board.slot_of(shell)
    }

    /// Swap transition in use by the running shuffle.
    pub fn transition_ms(&self) -> Option<u32> {
        self.engine
            .active_profile()
            .map(|profile| profile.transition_ms)
    }

    pub fn tick_interval_ms(&self) -> Option<u32> {
        self.engine
            .active_profile()
            .map(|profile| profile.tick_interval_ms())
    }
}

impl fmt::Debug for ShellGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellGame")
            .field("board", &self.board)
            .field("engine", &self.engine)
            .field("difficulty", &self.difficulty)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn run_to_end(game: &mut ShellGame) -> usize {
        let mut ticks = 0;
        while game.is_running() {
            game.tick();
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn setup_peeks_at_marker_after_delay() {
        let mut game = ShellGame::new(11);

        let reveal = game.setup().reveal().unwrap();

        assert!(reveal.has_marker);
        assert!(!reveal.forced);
        assert_eq!(reveal.lift_delay_ms(), AUTO_PEEK_DELAY_MS);
        assert_eq!(game.score(), Score::default());
        assert_eq!(game.state(), EngineState::Idle);
    }

    #[test]
    fn easy_shuffle_takes_five_ticks() {
        let mut game = ShellGame::new(2);
        assert!(game.set_difficulty("easy"));
        game.setup();

        let outcome = game.shake();

        assert_eq!(outcome, ShakeOutcome::Started(Difficulty::Easy.profile()));
        assert_eq!(game.tick_interval_ms(), Some(600));
        assert_eq!(game.transition_ms(), Some(400));
        assert_eq!(game.revealed(), None);
        assert_eq!(run_to_end(&mut game), 5);
        assert!(game.awaiting_first_guess());
        assert_eq!(game.transition_ms(), None);
    }

    #[test]
    fn unknown_difficulty_keeps_selection() {
        let mut game = ShellGame::with_difficulty(0, Difficulty::Hard);

        assert!(!game.set_difficulty("bogus"));

        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn difficulty_change_waits_for_next_shake() {
        let mut game = ShellGame::new(5);
        game.set_difficulty("easy");
        game.shake();

        game.set_difficulty("extreme");

        assert_eq!(game.transition_ms(), Some(400));
        assert_eq!(run_to_end(&mut game), 5);

        game.shake();
        assert_eq!(game.transition_ms(), Some(100));
        assert_eq!(run_to_end(&mut game), 30);
    }

    #[test]
    fn shake_while_running_is_ignored() {
        let mut game = ShellGame::new(8);
        game.shake();
        game.tick();

        assert_eq!(game.shake(), ShakeOutcome::NoChange);
        assert_eq!(run_to_end(&mut game), 9);
    }

    #[test]
    fn peek_and_setup_wait_for_shuffle_to_end() {
        let mut game = ShellGame::new(4);
        game.shake();
        let layout = Shell::ALL.map(|shell| game.slot_of(shell));

        assert_eq!(game.peak(Some(1)), RevealOutcome::NoChange);
        assert_eq!(game.setup(), RevealOutcome::NoChange);

        assert_eq!(game.revealed(), None);
        assert_eq!(game.score().games(), 0);
        assert_eq!(Shell::ALL.map(|shell| game.slot_of(shell)), layout);
    }

    #[test]
    fn one_score_per_shuffle() {
        let mut game = ShellGame::new(13);
        game.setup();
        game.shake();
        run_to_end(&mut game);

        let guess = game.peak(Some(2));
        let RevealOutcome::Guessed { reveal, won } = guess else {
            panic!("first peek after a shuffle must be scored, got {guess:?}");
        };
        assert_eq!(reveal.has_marker, won);
        assert_eq!(game.score().games(), 1);
        assert_eq!(game.score().wins(), u32::from(won));

        game.peak(Some(1));
        game.peak(Some(3));
        assert_eq!(game.score().games(), 1);

        game.shake();
        run_to_end(&mut game);
        game.peak(Some(3));
        assert_eq!(game.score().games(), 2);
    }

    #[test]
    fn invalid_peek_reveals_marker() {
        let mut game = ShellGame::new(21);
        game.shake();
        run_to_end(&mut game);

        for choice in [None, Some(0), Some(4)] {
            let reveal = game.peak(choice).reveal().unwrap();
            assert!(reveal.has_marker);
            assert!(!reveal.forced);
        }
        assert_eq!(game.score().wins(), 0);
        assert_eq!(game.score().games(), 1);
    }

    #[test]
    fn setup_after_shuffle_resets_layout_and_keeps_score() {
        let mut game = ShellGame::new(17);
        game.shake();
        run_to_end(&mut game);
        game.peak(Some(1));

        game.setup();

        for shell in Shell::ALL {
            assert_eq!(game.slot_of(shell), shell.home());
        }
        assert!(!game.awaiting_first_guess());
        assert_eq!(game.score().games(), 1);
    }

    #[test]
    fn same_seed_replays_session() {
        let play = |seed| {
            let mut game = ShellGame::new(seed);
            game.setup();
            game.shake();
            run_to_end(&mut game);
            (
                game.peak(None).reveal().map(|reveal| reveal.slot),
                Shell::ALL.map(|shell| game.slot_of(shell)),
            )
        };

        assert_eq!(play(99), play(99));
    }

    #[test]
    fn selected_tier_carries_over_rounds() {
        let mut game = ShellGame::new(31);
        game.set_difficulty("hard");

        game.setup();
        game.setup();

        assert_eq!(game.shake(), ShakeOutcome::Started(Difficulty::Hard.profile()));
        assert_eq!(run_to_end(&mut game), 15);
        game.setup();
        assert_eq!(game.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn debug_and_snapshot_hide_marker_and_rng() {
        let a = ShellGame::new(0);
        let b = (1..64)
            .map(ShellGame::new)
            .find(|game| game.board.marker_position() != a.board.marker_position())
            .unwrap();

        let debug = format!("{:?}", a);
        assert_eq!(debug, format!("{:?}", b));
        assert!(!debug.contains("marker"), "marker in {debug}");
        assert!(!debug.contains("rng"), "rng in {debug}");

        assert_eq!(a.snapshot(), b.snapshot());
        let json = serde_json::to_string(&a.snapshot()).unwrap();
        assert!(!json.contains("marker"), "marker in {json}");
    }
}
