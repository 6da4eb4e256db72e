use super::*;

/// Every move is an independent coin flip between [`Move::Left`] and [`Move::Right`].
///
/// Repeated adjacent swaps walk the marker around the three slots, so a short sequence does not sample the
/// permutations uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMoveGenerator {
    seed: u64,
}

impl RandomMoveGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MoveGenerator for RandomMoveGenerator {
    fn generate(self, move_count: u16) -> Vec<Move> {
        use rand::prelude::*;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let moves: Vec<Move> = (0..move_count)
            .map(|_| match rng.random_range(0..2u8) {
                0 => Move::Left,
                _ => Move::Right,
            })
            .collect();

        log::trace!("generated {} moves from seed {}", moves.len(), self.seed);
        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_count() {
        for difficulty in Difficulty::ALL {
            let count = difficulty.profile().move_count;
            assert_eq!(
                RandomMoveGenerator::new(3).generate(count).len(),
                usize::from(count)
            );
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let a = RandomMoveGenerator::new(42).generate(30);
        let b = RandomMoveGenerator::new(42).generate(30);
        assert_eq!(a, b);
    }

    #[test]
    fn both_directions_show_up() {
        let moves = RandomMoveGenerator::new(9).generate(2000);
        let lefts = moves.iter().filter(|&&mv| mv == Move::Left).count();

        assert!((850..=1150).contains(&lefts), "skewed moves: {lefts} left");
    }

    #[test]
    fn marker_walk_reaches_every_slot() {
        let mut seen = [false; 3];
        for seed in 0..64 {
            let mut board = Board::with_marker(Slot::First);
            for mv in RandomMoveGenerator::new(seed).generate(5) {
                let (from, to) = mv.slots();
                board.apply_swap(from, to);
            }
            seen[board.marker_position().index()] = true;
        }
        assert_eq!(seen, [true; 3]);
    }
}
