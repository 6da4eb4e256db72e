use crate::*;
use alloc::vec::Vec;
pub use random::*;

mod random;

pub trait MoveGenerator {
    fn generate(self, move_count: u16) -> Vec<Move>;
}
