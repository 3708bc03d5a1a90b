use crate::error::ModelError;

/// Default START sentinel (STX control character).
pub const DEFAULT_START: char = '\u{2}';

/// Default END sentinel (ETX control character).
pub const DEFAULT_END: char = '\u{3}';

/// Pair of synthetic symbols framing every training word.
///
/// - `start` pads the initial context before any real character is emitted.
/// - `end` marks the end of a word, once per training word.
///
/// # Invariants
/// - `start != end`
/// - Neither symbol appears in the training data (checked by `MarkovModel`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentinels {
	start: char,
	end: char,
}

impl Sentinels {
	/// Creates a sentinel pair.
	///
	/// # Errors
	/// Returns `InvalidSentinels` if both symbols are the same character.
	pub fn new(start: char, end: char) -> Result<Self, ModelError> {
		if start == end {
			return Err(ModelError::InvalidSentinels { symbol: start });
		}
		Ok(Self { start, end })
	}

	pub fn start(&self) -> char {
		self.start
	}

	pub fn end(&self) -> char {
		self.end
	}

	/// Returns the initial context: `start` repeated `window_size` times.
	pub fn start_context(&self, window_size: usize) -> String {
		std::iter::repeat_n(self.start, window_size).collect()
	}

	/// Returns the first sentinel found in `word`, if any.
	pub fn find_in(&self, word: &str) -> Option<char> {
		word.chars().find(|c| *c == self.start || *c == self.end)
	}
}

impl Default for Sentinels {
	fn default() -> Self {
		Self { start: DEFAULT_START, end: DEFAULT_END }
	}
}
