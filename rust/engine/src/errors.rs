use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Game is already over")]
    GameAlreadyOver,
    #[error("Insufficient cash: requested {requested}, available {available}")]
    InsufficientFunds { requested: u32, available: u32 },
    #[error("Deck is empty")]
    EmptyDeck,
    #[error("Card index {index} out of range for hand of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Invalid game setup: {0}")]
    InvalidSetup(String),
}
