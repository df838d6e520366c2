#[derive(thiserror::Error, Debug)]
pub enum LotteryError {
    #[error("Failed to talk to the console (error: {0})")]
    Io(#[from] std::io::Error),
    #[error("Input closed before the game finished")]
    InputClosed,
}

/// Reasons a single manually picked number is rejected. The `Display` text is
/// shown to the player before asking again.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum PickError {
    #[error("'{0}' is not a number, please try again")]
    NotANumber(String),
    #[error("Invalid number {0}, please try again")]
    OutOfRange(i64),
    #[error("You have already selected {0}")]
    AlreadySelected(u8),
}
