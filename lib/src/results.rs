use crate::engine::MAX_WORD_LENGTH;
use std::error::Error;
use std::fmt;

/// The lifecycle phase of a game session.
///
/// `Won` and `Lost` are terminal; a session never leaves either.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GamePhase {
    Playing,
    Won,
    Lost,
}

/// What applying a single guessed letter did to the game.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TurnOutcome {
    /// The letter was revealed at the given zero-based positions. Revealing
    /// costs no attempt.
    Revealed { letter: char, positions: Vec<u8> },
    /// The letter is absent from every remaining candidate, and one attempt
    /// was spent.
    Missed { letter: char },
}

/// Indicates that an error occurred while setting up or playing a game.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum HangmanError {
    /// Indicates that the requested word length is outside
    /// `1..=MAX_WORD_LENGTH`.
    WordLength(usize),
    /// Indicates that the requested attempt budget is zero.
    AttemptBudget,
    /// Indicates that no word of the requested length is available.
    NoCandidates(usize),
    /// Indicates that the input did not reduce to exactly one letter.
    InvalidGuess,
    /// Indicates that the letter was already guessed in this session.
    AlreadyGuessed(char),
    /// Indicates that the session has already finished.
    GameOver,
}

impl fmt::Display for HangmanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangmanError::WordLength(length) => write!(
                f,
                "the word length must be between 1 and {}, got {}",
                MAX_WORD_LENGTH, length
            ),
            HangmanError::AttemptBudget => write!(f, "the attempt budget must be at least 1"),
            HangmanError::NoCandidates(length) => {
                write!(f, "the dictionary has no words of length {}", length)
            }
            HangmanError::InvalidGuess => write!(f, "a guess must be exactly one letter"),
            HangmanError::AlreadyGuessed(letter) => {
                write!(f, "you already guessed '{}'", letter)
            }
            HangmanError::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl Error for HangmanError {}
