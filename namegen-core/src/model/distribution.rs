use std::collections::BTreeMap;

use rand::Rng;

/// Probability distribution over the symbols observed after one context.
///
/// A `Distribution` is a row of the transition table: a sparse list of the
/// next symbols actually seen after a given context (END included), with
/// their observation counts and maximum-likelihood probabilities.
///
/// ## Responsibilities:
/// - Accumulate transition occurrences during training
/// - Expose `count / total` probabilities
/// - Draw the next symbol by cumulative-distribution inversion
///
/// ## Invariants
/// - Symbols are stored in ascending order, so sampling is reproducible
///   for a given random sequence
/// - Each stored count is strictly positive
/// - Probabilities sum to 1.0 (within floating-point tolerance)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
	/// Outgoing transitions: symbol, occurrence count, probability.
	entries: Vec<Entry>,
	/// Number of observations recorded for this context.
	total: usize,
}

#[derive(Clone, Debug, PartialEq)]
struct Entry {
	symbol: char,
	count: usize,
	probability: f64,
}

impl Distribution {
	/// Builds a distribution from raw occurrence counts.
	///
	/// Zero counts are ignored.
	pub fn from_counts(counts: &BTreeMap<char, usize>) -> Self {
		let total: usize = counts.values().sum();
		let entries = counts
			.iter()
			.filter(|(_, count)| **count > 0)
			.map(|(symbol, count)| Entry {
				symbol: *symbol,
				count: *count,
				probability: *count as f64 / total as f64,
			})
			.collect();
		Self { entries, total }
	}

	/// Number of distinct next symbols.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Number of observations this row was estimated from.
	pub fn total(&self) -> usize {
		self.total
	}

	/// How many times `symbol` followed this context. 0 if never observed.
	pub fn count(&self, symbol: char) -> usize {
		self.entry(symbol).map_or(0, |e| e.count)
	}

	/// Probability of `symbol` following this context. 0.0 if never observed.
	pub fn probability(&self, symbol: char) -> f64 {
		self.entry(symbol).map_or(0.0, |e| e.probability)
	}

	/// Iterates `(symbol, probability)` pairs in ascending symbol order.
	pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
		self.entries.iter().map(|e| (e.symbol, e.probability))
	}

	/// Draws the next symbol.
	///
	/// One uniform value `u` in `[0, 1)` is taken from `rng`; the first
	/// symbol whose cumulative probability exceeds `u` is returned.
	///
	/// Returns `None` if the distribution is empty.
	pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<char> {
		let last = self.entries.last()?;
		let u: f64 = rng.random();

		let mut cumulative = 0.0;
		for entry in &self.entries {
			cumulative += entry.probability;
			if u < cumulative {
				return Some(entry.symbol);
			}
		}

		// Rounding left the cumulative sum just under 1.0
		Some(last.symbol)
	}

	fn entry(&self, symbol: char) -> Option<&Entry> {
		self.entries
			.binary_search_by(|e| e.symbol.cmp(&symbol))
			.ok()
			.and_then(|i| self.entries.get(i))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn distribution(pairs: &[(char, usize)]) -> Distribution {
		let counts: BTreeMap<char, usize> = pairs.iter().copied().collect();
		Distribution::from_counts(&counts)
	}

	#[test]
	fn probabilities_follow_counts() {
		let d = distribution(&[('a', 3), ('b', 1)]);
		assert_eq!(d.total(), 4);
		assert_eq!(d.len(), 2);
		assert_eq!(d.count('a'), 3);
		assert!((d.probability('a') - 0.75).abs() < 1e-12);
		assert!((d.probability('b') - 0.25).abs() < 1e-12);
		assert_eq!(d.probability('z'), 0.0);
	}

	#[test]
	fn probabilities_sum_to_one() {
		let d = distribution(&[('a', 1), ('b', 1), ('c', 1), ('d', 7)]);
		let sum: f64 = d.iter().map(|(_, p)| p).sum();
		assert!((sum - 1.0).abs() < 1e-9);
	}

	#[test]
	fn iterates_in_symbol_order() {
		let d = distribution(&[('z', 1), ('a', 1), ('m', 1)]);
		let symbols: Vec<char> = d.iter().map(|(s, _)| s).collect();
		assert_eq!(symbols, vec!['a', 'm', 'z']);
	}

	#[test]
	fn zero_counts_are_dropped() {
		let d = distribution(&[('a', 0), ('b', 2)]);
		assert_eq!(d.len(), 1);
		assert_eq!(d.probability('b'), 1.0);
	}

	#[test]
	fn empty_distribution_samples_nothing() {
		let d = Distribution::default();
		assert!(d.is_empty());
		assert_eq!(d.sample(&mut StdRng::seed_from_u64(1)), None);
	}

	#[test]
	fn certain_symbol_is_always_drawn() {
		let d = distribution(&[('x', 5)]);
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..100 {
			assert_eq!(d.sample(&mut rng), Some('x'));
		}
	}

	#[test]
	fn sampling_frequencies_track_probabilities() {
		let d = distribution(&[('a', 1), ('b', 3)]);
		let mut rng = StdRng::seed_from_u64(42);
		let draws = 20_000;
		let b = (0..draws).filter(|_| d.sample(&mut rng) == Some('b')).count();
		let ratio = b as f64 / draws as f64;
		assert!((ratio - 0.75).abs() < 0.02, "ratio was {ratio}");
	}
}
