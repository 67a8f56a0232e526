//! Session error types.
//!
//! `InvalidChoice` is recovered inside the session by re-prompting; its
//! `Display` output is the exact notice shown to the user.

use thiserror::Error;

/// Errors raised while collecting answers from the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// A character outside the keys offered for the current question.
    #[error("{0} is not a valid choice. Try again.")]
    InvalidChoice(char),

    /// The input stream ended while an answer was expected.
    #[error("input closed before the quiz was finished")]
    InputClosed,
}
