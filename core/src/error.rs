use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid slot {0}, slots are numbered 1 to 3")]
    InvalidSlot(u8),
    #[error("Unknown difficulty {0:?}")]
    UnknownDifficulty(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
