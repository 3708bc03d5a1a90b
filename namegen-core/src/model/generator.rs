use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use super::generation_input::GenerationInput;
use super::markov_model::MarkovModel;
use crate::error::ModelError;

/// High-level word generator.
///
/// # Responsibilities
/// - Build a `MarkovModel` from a corpus and a `GenerationInput`
/// - Generate words with an optional length cap
/// - Retry up to `nb_try` times when a word already exists in the corpus
#[derive(Clone, Debug)]
pub struct WordGenerator {
	model: MarkovModel,
	input: GenerationInput,
	/// Lowercased training words, used to detect non-novel output.
	known_words: HashSet<String>,
}

impl WordGenerator {
	/// Trains a generator on `corpus`.
	///
	/// # Errors
	/// Returns any error raised by `MarkovModel::with_sentinels`.
	pub fn new<I, S>(corpus: I, input: GenerationInput) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words: Vec<S> = corpus.into_iter().collect();
		let model = MarkovModel::with_sentinels(&words, input.window_size(), *input.sentinels())?;
		let known_words = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
		Ok(Self { model, input, known_words })
	}

	pub fn model(&self) -> &MarkovModel {
		&self.model
	}

	pub fn input(&self) -> &GenerationInput {
		&self.input
	}

	/// Checks if `word` is part of the training corpus (case-insensitive).
	pub fn is_known(&self, word: &str) -> bool {
		self.known_words.contains(&word.to_lowercase())
	}

	/// Generates one word using the thread-local random generator.
	///
	/// # Errors
	/// See [`WordGenerator::generate_with`].
	pub fn generate(&self) -> Result<String, ModelError> {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one word, avoiding training words if possible.
	///
	/// # Behavior
	/// - Makes up to `nb_try + 1` attempts, honoring `max_length`.
	/// - Returns the first word that is not in the corpus.
	/// - An attempt growing past `max_length` is rejected like a duplicate.
	/// - When no attempt is novel, returns the last training word drawn.
	///
	/// # Errors
	/// - `UnseenContext` if the model walks into an unknown context
	/// - `LengthExceeded` if every attempt grows past `max_length`
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ModelError> {
		let max_length = self.input.max_length();
		let mut outcome = self.model.generate_bounded(rng, max_length);

		for attempt in 1..=self.input.nb_try {
			match &outcome {
				Ok(word) if self.is_known(word) => {
					debug!(word = %word, attempt, "generated a training word, retrying");
				}
				Err(ModelError::LengthExceeded { .. }) => {
					debug!(attempt, "generated word is too long, retrying");
				}
				_ => break,
			}

			match self.model.generate_bounded(rng, max_length) {
				// A training word is a better fallback than no word at all
				Err(ModelError::LengthExceeded { .. }) if outcome.is_ok() => {}
				next => outcome = next,
			}
		}

		if let Ok(word) = &outcome {
			if self.input.nb_try > 0 && self.is_known(word) {
				warn!(word = %word, attempts = self.input.nb_try + 1, "no novel word found");
			}
		}

		outcome
	}

	/// Generates `count` words, each drawn independently from `rng`.
	///
	/// # Errors
	/// Stops at the first failing word; see [`WordGenerator::generate_with`].
	pub fn generate_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<String>, ModelError> {
		(0..count).map(|_| self.generate_with(rng)).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn known_words_are_case_insensitive() {
		let generator = WordGenerator::new(["Bath", "Ely"], GenerationInput::new(2).unwrap()).unwrap();
		assert!(generator.is_known("bath"));
		assert!(generator.is_known("ELY"));
		assert!(!generator.is_known("Bely"));
	}

	#[test]
	fn exhausted_retries_return_last_attempt() {
		let mut input = GenerationInput::new(3).unwrap();
		input.nb_try = 5;
		let generator = WordGenerator::new(["Wells"], input).unwrap();

		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(generator.generate_with(&mut rng).unwrap(), "Wells");
	}

	#[test]
	fn retries_skip_training_words() {
		// w = 1: "ab" and "ba" can be recombined into many other words
		let mut input = GenerationInput::new(1).unwrap();
		input.nb_try = 1_000;
		let generator = WordGenerator::new(["ab", "ba"], input).unwrap();

		let mut rng = StdRng::seed_from_u64(11);
		for word in generator.generate_many(&mut rng, 50).unwrap() {
			assert!(!generator.is_known(&word), "{word} is a training word");
		}
	}

	#[test]
	fn generate_many_returns_requested_count() {
		let generator = WordGenerator::new(["Leeds", "Luton", "Lewes"], GenerationInput::new(2).unwrap()).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		assert_eq!(generator.generate_many(&mut rng, 7).unwrap().len(), 7);
		assert!(generator.generate_many(&mut rng, 0).unwrap().is_empty());
	}

	#[test]
	fn over_long_attempts_are_retried() {
		let mut input = GenerationInput::new(2).unwrap();
		input.nb_try = 20;
		input.set_max_length(Some(3));
		let generator = WordGenerator::new(["Ab", "Cd", "Llanfairpwll"], input).unwrap();

		let mut rng = StdRng::seed_from_u64(4);
		for _ in 0..30 {
			let word = generator.generate_with(&mut rng).unwrap();
			assert!(word == "Ab" || word == "Cd", "unexpected {word}");
		}
	}

	#[test]
	fn every_attempt_too_long_is_an_error() {
		let mut input = GenerationInput::new(2).unwrap();
		input.nb_try = 3;
		input.set_max_length(Some(4));
		let generator = WordGenerator::new(["Llanfairpwll"], input).unwrap();
		assert_eq!(generator.generate().unwrap_err(), ModelError::LengthExceeded { max_length: 4 });
	}

	#[test]
	fn length_cap_comes_from_input() {
		let mut input = GenerationInput::new(2).unwrap();
		input.set_max_length(Some(3));
		let generator = WordGenerator::new(["Sheffield"], input).unwrap();
		assert_eq!(generator.generate().unwrap_err(), ModelError::LengthExceeded { max_length: 3 });
	}
}
