use crate::data::CandidatePool;
use crate::data::WordBank;
use crate::families;
use crate::families::Signature;
use crate::pattern::Pattern;
use crate::results::GamePhase;
use crate::results::HangmanError;
use crate::results::TurnOutcome;
use std::collections::HashSet;
use std::result::Result;
use std::sync::Arc;

/// The longest word length a session will accept.
pub const MAX_WORD_LENGTH: usize = 29;

/// Reduces raw guess input to a single lowercase letter.
///
/// Everything that is not an ASCII letter is stripped first, so `" R!"` is
/// the guess `r`. Fails unless exactly one letter remains.
pub fn normalize_guess(input: &str) -> Result<char, HangmanError> {
    let mut letters = input.chars().filter(char::is_ascii_alphabetic);
    match (letters.next(), letters.next()) {
        (Some(letter), None) => Ok(letter.to_ascii_lowercase()),
        _ => Err(HangmanError::InvalidGuess),
    }
}

/// A single adversarial game.
///
/// The session holds no secret word. It keeps every candidate that is
/// consistent with what has been revealed, and on each guess retreats into
/// the largest surviving family, giving letters away only when hiding them
/// is no longer the better move. The pool and the pattern are owned here
/// exclusively and change only inside [`GameSession::guess`].
#[derive(Debug)]
pub struct GameSession {
    pool: CandidatePool,
    pattern: Pattern,
    guessed: HashSet<char>,
    attempts_left: u32,
    phase: GamePhase,
}

impl GameSession {
    /// Starts a game over the bank's words of exactly `length` letters, with
    /// the given attempt budget.
    ///
    /// Fails if `length` is outside `1..=MAX_WORD_LENGTH`, if `attempts` is
    /// zero, or if no bank word has the requested length.
    pub fn new(bank: &WordBank, length: usize, attempts: u32) -> Result<GameSession, HangmanError> {
        if length == 0 || length > MAX_WORD_LENGTH {
            return Err(HangmanError::WordLength(length));
        }
        if attempts == 0 {
            return Err(HangmanError::AttemptBudget);
        }
        let pool = CandidatePool::from_bank(bank, length);
        if pool.is_empty() {
            return Err(HangmanError::NoCandidates(length));
        }
        Ok(GameSession {
            pool,
            pattern: Pattern::new(length),
            guessed: HashSet::new(),
            attempts_left: attempts,
            phase: GamePhase::Playing,
        })
    }

    /// Applies one guessed letter and reports what it did.
    ///
    /// The letter must already be normalized (see [`normalize_guess`]).
    /// Repeated letters are rejected before any partitioning happens, so a
    /// rejected turn changes nothing. An attempt is spent iff the pattern
    /// comes out of the turn unchanged, which is exactly the absent-family
    /// case: a revealing guess costs nothing.
    pub fn guess(&mut self, letter: char) -> Result<TurnOutcome, HangmanError> {
        if self.phase != GamePhase::Playing {
            return Err(HangmanError::GameOver);
        }
        if !letter.is_ascii_lowercase() {
            return Err(HangmanError::InvalidGuess);
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let family = families::largest_family(self.pool.words(), letter)
            .ok_or(HangmanError::NoCandidates(self.pattern.len()))?;

        let outcome = match family.signature {
            Signature::Absent => {
                self.attempts_left -= 1;
                self.pool.filter_by_absence(letter);
                TurnOutcome::Missed { letter }
            }
            Signature::At(positions) => {
                self.pattern.reveal_at(&positions, letter);
                self.pool.filter_by_pattern(&positions, letter, &self.pattern);
                TurnOutcome::Revealed { letter, positions }
            }
        };
        self.guessed.insert(letter);

        if self.pattern.is_complete() {
            self.phase = GamePhase::Won;
        } else if self.attempts_left == 0 {
            self.phase = GamePhase::Lost;
        }
        Ok(outcome)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// The letters guessed so far, in alphabetical order.
    pub fn guessed_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self.guessed.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// How many candidate words are still alive.
    pub fn candidates_left(&self) -> usize {
        self.pool.len()
    }

    /// Returns one surviving candidate as "the word".
    ///
    /// The session never picks a secret up front. Every remaining candidate
    /// is consistent with everything revealed and excluded so far, so any of
    /// them is a truthful answer; which one comes back is random.
    pub fn reveal_word(&self) -> Option<Arc<str>> {
        self.pool.sample_any()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_guess_strips_non_letters() {
        assert_eq!(normalize_guess(" R!"), Ok('r'));
        assert_eq!(normalize_guess("e\n"), Ok('e'));
        assert_eq!(normalize_guess("'t'"), Ok('t'));
    }

    #[test]
    fn normalize_guess_rejects_everything_else() {
        assert_eq!(normalize_guess(""), Err(HangmanError::InvalidGuess));
        assert_eq!(normalize_guess("7"), Err(HangmanError::InvalidGuess));
        assert_eq!(normalize_guess("ab"), Err(HangmanError::InvalidGuess));
        assert_eq!(normalize_guess("?!"), Err(HangmanError::InvalidGuess));
    }

    #[test]
    fn new_session_validates_configuration() {
        let bank = WordBank::from_iterator(vec!["bead", "beat"]);

        assert_eq!(
            GameSession::new(&bank, 0, 6).err(),
            Some(HangmanError::WordLength(0))
        );
        assert_eq!(
            GameSession::new(&bank, MAX_WORD_LENGTH + 1, 6).err(),
            Some(HangmanError::WordLength(MAX_WORD_LENGTH + 1))
        );
        assert_eq!(
            GameSession::new(&bank, 4, 0).err(),
            Some(HangmanError::AttemptBudget)
        );
        assert_eq!(
            GameSession::new(&bank, 9, 6).err(),
            Some(HangmanError::NoCandidates(9))
        );
        assert!(GameSession::new(&bank, 4, 6).is_ok());
    }

    #[test]
    fn guess_rejects_unnormalized_input() {
        let bank = WordBank::from_iterator(vec!["bead", "beat"]);
        let mut session = GameSession::new(&bank, 4, 6).unwrap();

        assert_eq!(session.guess('E'), Err(HangmanError::InvalidGuess));
        assert_eq!(session.guess('!'), Err(HangmanError::InvalidGuess));
        assert_eq!(session.attempts_left(), 6);
    }

    #[test]
    fn repeated_guess_changes_nothing() {
        let bank = WordBank::from_iterator(vec!["bead", "bear", "beat"]);
        let mut session = GameSession::new(&bank, 4, 6).unwrap();

        session.guess('z').unwrap();
        let attempts_after_first = session.attempts_left();
        let candidates_after_first = session.candidates_left();

        assert_eq!(session.guess('z'), Err(HangmanError::AlreadyGuessed('z')));
        assert_eq!(session.attempts_left(), attempts_after_first);
        assert_eq!(session.candidates_left(), candidates_after_first);
    }

    #[test]
    fn attempt_is_spent_iff_nothing_was_revealed() {
        let bank = WordBank::from_iterator(vec!["bead", "bear", "beat"]);
        let mut session = GameSession::new(&bank, 4, 6).unwrap();

        // 'e' is everywhere: revealed, no attempt spent.
        let before = session.pattern().to_string();
        session.guess('e').unwrap();
        assert_ne!(session.pattern().to_string(), before);
        assert_eq!(session.attempts_left(), 6);

        // 'z' is nowhere: pattern untouched, one attempt spent.
        let before = session.pattern().to_string();
        session.guess('z').unwrap();
        assert_eq!(session.pattern().to_string(), before);
        assert_eq!(session.attempts_left(), 5);
    }
}
