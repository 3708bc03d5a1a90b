use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a model or generating words from it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
	/// The training corpus contains no word at all.
	#[error("training corpus is empty")]
	EmptyCorpus,

	/// Generation reached a context that was never observed during training.
	#[error("context {context:?} was never observed during training")]
	UnseenContext {
		/// The context that has no recorded distribution.
		context: String,
	},

	/// The window size must be at least 1.
	#[error("window size must be >= 1, got {window_size}")]
	InvalidWindowSize {
		/// Rejected window size.
		window_size: usize,
	},

	/// START and END sentinels must be two distinct characters.
	#[error("start and end sentinels must differ, both are {symbol:?}")]
	InvalidSentinels {
		/// The character used for both sentinels.
		symbol: char,
	},

	/// A training word contains a character reserved as a sentinel.
	#[error("word {word:?} contains the reserved symbol {symbol:?}")]
	ReservedSymbol {
		/// The reserved character found in the word.
		symbol: char,
		/// The offending training word.
		word: String,
	},

	/// A generated word grew past the configured cap.
	#[error("generated word exceeded the maximum length of {max_length} characters")]
	LengthExceeded {
		/// Configured cap, in characters.
		max_length: usize,
	},
}

/// Errors raised while loading a training corpus from disk.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file could not be read.
	#[error("failed to read {path}: {source}")]
	Io {
		/// File being read.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: io::Error,
	},

	/// The file does not have the expected extension.
	#[error("{path} is not a .{expected} file")]
	UnsupportedExtension {
		/// Rejected file.
		path: PathBuf,
		/// Extension required, without the dot.
		expected: &'static str,
	},

	/// The country code is not two ASCII letters.
	#[error("{code:?} is not a valid ISO country code (expected 2 letters)")]
	InvalidCountryCode {
		/// Rejected code, as given.
		code: String,
	},

	/// The CSV header lacks a required column.
	#[error("{path} has no {column:?} column")]
	MissingColumn {
		/// CSV file being read.
		path: PathBuf,
		/// Name of the missing column.
		column: &'static str,
	},

	/// A CSV row has too few fields to hold the required columns.
	#[error("{path}:{line}: expected at least {expected} fields, found {found}")]
	MalformedRecord {
		/// CSV file being read.
		path: PathBuf,
		/// 1-based line number of the row.
		line: usize,
		/// Minimum number of fields needed.
		expected: usize,
		/// Number of fields found.
		found: usize,
	},
}
