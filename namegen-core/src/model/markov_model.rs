use std::collections::{BTreeMap, HashMap};

use rand::Rng;
use tracing::{debug, trace};

use super::context::{extract_observations, roll_context};
use super::distribution::Distribution;
use super::sentinel::Sentinels;
use crate::error::ModelError;

/// Character-level Markov chain of a fixed order (`window_size`).
///
/// The model maps every context observed during training to the
/// distribution of the symbols that followed it, END included.
///
/// # Responsibilities
/// - Build the transition table once from a training corpus
/// - Generate new words by walking the chain from the START context
///   until END is drawn
///
/// # Invariants
/// - `window_size >= 1`
/// - Every key of `transitions` is exactly `window_size` chars long
/// - The START context is always present (the corpus is never empty)
/// - The table is read-only after construction
#[derive(Clone, Debug)]
pub struct MarkovModel {
	window_size: usize,
	sentinels: Sentinels,
	transitions: HashMap<String, Distribution>,
}

impl MarkovModel {
	/// Builds a model with the default sentinels.
	///
	/// # Errors
	/// See [`MarkovModel::with_sentinels`].
	pub fn build<I, S>(corpus: I, window_size: usize) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self::with_sentinels(corpus, window_size, Sentinels::default())
	}

	/// Builds a model from `corpus`, using `window_size` preceding characters
	/// as context.
	///
	/// Observations are grouped by context and each group is normalized into
	/// a maximum-likelihood distribution. No smoothing is applied.
	///
	/// # Errors
	/// - `InvalidWindowSize` if `window_size < 1`
	/// - `EmptyCorpus` if `corpus` yields no word
	/// - `ReservedSymbol` if a word contains one of the sentinels
	pub fn with_sentinels<I, S>(corpus: I, window_size: usize, sentinels: Sentinels) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		if window_size < 1 {
			return Err(ModelError::InvalidWindowSize { window_size });
		}

		let words: Vec<S> = corpus.into_iter().collect();
		if words.is_empty() {
			return Err(ModelError::EmptyCorpus);
		}
		for word in &words {
			let word = word.as_ref();
			if let Some(symbol) = sentinels.find_in(word) {
				return Err(ModelError::ReservedSymbol { symbol, word: word.to_owned() });
			}
		}

		let observations = extract_observations(&words, window_size, &sentinels);
		let observation_count = observations.len();

		let mut counts: HashMap<String, BTreeMap<char, usize>> = HashMap::new();
		for observation in observations {
			*counts
				.entry(observation.context)
				.or_default()
				.entry(observation.next)
				.or_insert(0) += 1;
		}

		let transitions: HashMap<String, Distribution> = counts
			.into_iter()
			.map(|(context, next)| (context, Distribution::from_counts(&next)))
			.collect();

		debug!(
			words = words.len(),
			window_size,
			observations = observation_count,
			contexts = transitions.len(),
			"built markov model"
		);

		Ok(Self { window_size, sentinels, transitions })
	}

	pub fn window_size(&self) -> usize {
		self.window_size
	}

	pub fn sentinels(&self) -> &Sentinels {
		&self.sentinels
	}

	/// Number of distinct contexts in the transition table.
	pub fn context_count(&self) -> usize {
		self.transitions.len()
	}

	/// Returns the next-symbol distribution recorded for `context`.
	pub fn distribution(&self, context: &str) -> Option<&Distribution> {
		self.transitions.get(context)
	}

	/// Iterates over every `(context, distribution)` row, in no particular order.
	pub fn contexts(&self) -> impl Iterator<Item = (&str, &Distribution)> {
		self.transitions.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Generates one word using the thread-local random generator.
	///
	/// # Errors
	/// Returns `UnseenContext` if the walk reaches an unknown context.
	pub fn generate(&self) -> Result<String, ModelError> {
		self.generate_with(&mut rand::rng())
	}

	/// Generates one word, drawing every step from `rng`.
	///
	/// With a seeded `rng`, the output sequence is reproducible.
	///
	/// # Errors
	/// Returns `UnseenContext` if the walk reaches an unknown context.
	pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, ModelError> {
		self.generate_bounded(rng, None)
	}

	/// Generates one word, failing once it grows past `max_length` characters.
	///
	/// `None` disables the cap.
	///
	/// # Errors
	/// - `UnseenContext` if the walk reaches an unknown context
	/// - `LengthExceeded` if the word needs more than `max_length` characters
	pub fn generate_bounded<R: Rng + ?Sized>(&self, rng: &mut R, max_length: Option<usize>) -> Result<String, ModelError> {
		let mut context = self.sentinels.start_context(self.window_size);
		let mut word = String::new();
		let mut length = 0;

		loop {
			let next = self
				.transitions
				.get(&context)
				.and_then(|distribution| distribution.sample(rng))
				.ok_or_else(|| ModelError::UnseenContext { context: context.clone() })?;

			if next == self.sentinels.end() {
				break;
			}
			if let Some(max_length) = max_length {
				if length >= max_length {
					return Err(ModelError::LengthExceeded { max_length });
				}
			}

			word.push(next);
			length += 1;
			roll_context(&mut context, next);
		}

		trace!(word = %word, "generated word");
		Ok(word)
	}
}
