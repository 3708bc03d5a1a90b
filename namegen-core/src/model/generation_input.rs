use super::sentinel::Sentinels;
use crate::error::ModelError;

/// Default context length (number of preceding characters).
pub const DEFAULT_WINDOW_SIZE: usize = 5;

/// Input parameters for building a `WordGenerator` and generating words.
///
/// # Responsibilities
/// - Track the model order (`window_size`) and the sentinel pair
/// - Track generation parameters (`nb_try`, `max_length`)
/// - Validate every value before it reaches the model
///
/// # Invariants
/// - `window_size >= 1`
/// - `sentinels` holds two distinct symbols
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	/// Number of preceding characters used as context.
	window_size: usize,

	/// Extra attempts made when the generated word already exists in the
	/// training corpus. 0 accepts the first word drawn.
	pub nb_try: usize,

	/// Optional cap on the length of a generated word, in characters.
	max_length: Option<usize>,

	/// START / END symbols framing training words.
	sentinels: Sentinels,
}

impl GenerationInput {
	/// Creates an input with the given window size and default settings.
	///
	/// # Errors
	/// Returns `InvalidWindowSize` if `window_size < 1`.
	pub fn new(window_size: usize) -> Result<Self, ModelError> {
		let mut input = Self::default();
		input.set_window_size(window_size)?;
		Ok(input)
	}

	pub fn window_size(&self) -> usize {
		self.window_size
	}

	pub fn max_length(&self) -> Option<usize> {
		self.max_length
	}

	pub fn sentinels(&self) -> &Sentinels {
		&self.sentinels
	}

	/// Sets the context length.
	///
	/// # Errors
	/// Returns `InvalidWindowSize` if `window_size < 1`.
	pub fn set_window_size(&mut self, window_size: usize) -> Result<(), ModelError> {
		if window_size < 1 {
			return Err(ModelError::InvalidWindowSize { window_size });
		}
		self.window_size = window_size;
		Ok(())
	}

	/// Caps generated words at `max_length` characters. `None` removes the cap.
	pub fn set_max_length(&mut self, max_length: Option<usize>) {
		self.max_length = max_length;
	}

	/// Replaces the START / END symbols.
	///
	/// # Errors
	/// Returns `InvalidSentinels` if both symbols are equal.
	pub fn set_sentinels(&mut self, start: char, end: char) -> Result<(), ModelError> {
		self.sentinels = Sentinels::new(start, end)?;
		Ok(())
	}
}

impl Default for GenerationInput {
	fn default() -> Self {
		Self {
			window_size: DEFAULT_WINDOW_SIZE,
			nb_try: 0,
			max_length: None,
			sentinels: Sentinels::default(),
		}
	}
}
