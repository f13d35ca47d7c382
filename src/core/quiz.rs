//! Quiz engine
//!
//! A quiz asks for the definition of randomly chosen cards. Cards are drawn
//! uniformly with replacement, so the same card can come up more than once
//! in a single quiz. Every wrong answer adds one to the card's error count.

use crate::core::card_store::CardStore;
use crate::io::console::Console;
use crate::types::{Card, FlashcardError};
use rand::Rng;
use std::fmt;

/// Outcome of a single guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The guess is the card's definition
    Correct,

    /// The guess matches no card
    Wrong {
        /// The card's actual definition
        expected: String,
    },

    /// The guess is the definition of a different card
    WrongButMatches {
        /// The card's actual definition
        expected: String,
        /// The term whose definition was given
        other_term: String,
    },
}

impl Verdict {
    /// Whether the guess was the card's definition
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Correct => write!(f, "Correct!"),
            Verdict::Wrong { expected } => {
                write!(f, "Wrong. The right answer is \"{}\".", expected)
            }
            Verdict::WrongButMatches {
                expected,
                other_term,
            } => write!(
                f,
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                expected, other_term
            ),
        }
    }
}

/// Grade a guess for `card` against the whole store
///
/// Comparison is exact. A wrong guess is checked against every other card's
/// definition so the user can be told which term it belongs to.
pub fn grade(store: &CardStore, card: &Card, guess: &str) -> Verdict {
    if guess == card.definition {
        return Verdict::Correct;
    }

    match store.find_by_definition(guess) {
        Some(other) if other.term != card.term => Verdict::WrongButMatches {
            expected: card.definition.clone(),
            other_term: other.term.clone(),
        },
        _ => Verdict::Wrong {
            expected: card.definition.clone(),
        },
    }
}

/// Parse the number of quiz rounds typed by the user
///
/// # Errors
///
/// Returns a `ParseError` for anything that is not a non-negative integer.
pub fn parse_rounds(input: &str) -> Result<u32, FlashcardError> {
    input.parse::<u32>().map_err(|_| {
        FlashcardError::parse_error(None, format!("'{}' is not a valid number of rounds", input))
    })
}

/// Tally of a finished quiz
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizSummary {
    /// Questions asked
    pub asked: u32,
    /// Questions answered with the right definition
    pub correct: u32,
}

/// A quiz over a card store
///
/// Borrows the store mutably for the duration of the quiz, since wrong
/// answers update error counts.
pub struct Quiz<'a, G: Rng> {
    store: &'a mut CardStore,
    rng: &'a mut G,
}

impl<'a, G: Rng> Quiz<'a, G> {
    /// Create a quiz drawing cards from `store` using `rng`
    pub fn new(store: &'a mut CardStore, rng: &'a mut G) -> Self {
        Quiz { store, rng }
    }

    /// Pick the index of the next card to ask about
    fn sample(&mut self) -> usize {
        self.rng.gen_range(0..self.store.len())
    }

    /// Ask `rounds` questions through `console`
    ///
    /// # Returns
    ///
    /// * `Ok(QuizSummary)` - How many questions were asked and answered correctly
    /// * `Err(FlashcardError)` - `EmptyDeck` if there is nothing to ask, or a
    ///   console failure
    pub fn run(
        &mut self,
        rounds: u32,
        console: &mut Console,
    ) -> Result<QuizSummary, FlashcardError> {
        let mut summary = QuizSummary::default();
        if rounds == 0 {
            return Ok(summary);
        }
        if self.store.is_empty() {
            return Err(FlashcardError::EmptyDeck);
        }

        for _ in 0..rounds {
            let index = self.sample();
            let card = self
                .store
                .get(index)
                .cloned()
                .ok_or(FlashcardError::EmptyDeck)?;

            let guess = console.ask(&format!("Print the definition of \"{}\":", card.term))?;
            let verdict = grade(self.store, &card, &guess);
            console.say(verdict.to_string())?;

            summary.asked += 1;
            if verdict.is_correct() {
                summary.correct += 1;
            } else {
                self.store.record_error(index);
            }
        }

        log::debug!(
            "Quiz finished: {}/{} correct",
            summary.correct,
            summary.asked
        );
        Ok(summary)
    }
}
