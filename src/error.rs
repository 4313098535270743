use thiserror::Error;

/// Everything that can go wrong while setting up a race from user input.
///
/// All variants are recoverable: the caller is expected to show the message
/// and ask again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RaceError {
    #[error("car names must be 1 to 5 alphabetic characters (got {name:?}, length {length})")]
    InvalidName { name: String, length: usize },

    #[error("at least 2 cars are required (got {count})")]
    InsufficientParticipants { count: usize },

    #[error("duplicate car name: {name}")]
    DuplicateName { name: String },

    #[error("round count must be a positive integer (got {input:?})")]
    InvalidRound { input: String },
}
