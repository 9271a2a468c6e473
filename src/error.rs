//! Error types for the ticketing console.
//!
//! `InputError` values never leave the prompt that produced them: their
//! message is shown to the user and the prompt is asked again.

/// A rejected line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Zone menu answer was not an integer
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    /// Zone menu answer was an integer outside the menu
    #[error("Invalid choice. Please select a number from the menu.")]
    OutOfRange,

    /// Passenger count was not an integer
    #[error("Invalid input. Please enter a whole number.")]
    NotAWholeNumber,

    #[error("Number cannot be negative.")]
    Negative,

    /// Passenger count does not fit in a `u32`
    #[error("Number is too large.")]
    TooLarge,
}

/// Failures that end a session.
#[derive(Debug, thiserror::Error)]
pub enum TicketError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input stream ended while a prompt was waiting for a line
    #[error("input closed while waiting for a response")]
    InputClosed,

    #[error("failed to encode voucher: {0}")]
    Json(#[from] serde_json::Error),
}
