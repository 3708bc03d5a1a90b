use super::sentinel::Sentinels;

/// One Markov observation: the context seen and the symbol that followed it.
///
/// `context` is exactly `window_size` characters long, made of real
/// characters and/or START padding. `next` is a real character or END.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
	pub context: String,
	pub next: char,
}

/// Slides a context window over every word and collects the observations.
///
/// For each word the context starts as START repeated `window_size` times.
/// Each character is emitted with the context preceding it, then pushed into
/// the window. A final observation pairs the last context with END.
///
/// # Notes
/// - An empty word yields exactly one observation: `(START×w, END)`.
/// - Words shorter than the window are padded by the START symbols.
/// - Works on chars, so multibyte characters count as one position.
/// - Pure: no validation, the caller guarantees `window_size >= 1`.
pub fn extract_observations<I, S>(words: I, window_size: usize, sentinels: &Sentinels) -> Vec<Observation>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let mut observations = Vec::new();
	for word in words {
		let mut context = sentinels.start_context(window_size);
		for c in word.as_ref().chars() {
			observations.push(Observation { context: context.clone(), next: c });
			roll_context(&mut context, c);
		}
		observations.push(Observation { context, next: sentinels.end() });
	}
	observations
}

/// Drops the leftmost character of `context` and appends `next`.
///
/// With a window of 1 the context simply becomes `next`.
pub(crate) fn roll_context(context: &mut String, next: char) {
	if context.is_empty() {
		return;
	}
	context.remove(0);
	context.push(next);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sentinels() -> Sentinels {
		Sentinels::new('^', '$').unwrap()
	}

	fn pairs(observations: &[Observation]) -> Vec<(&str, char)> {
		observations.iter().map(|o| (o.context.as_str(), o.next)).collect()
	}

	#[test]
	fn first_order_chain() {
		let observations = extract_observations(["ab"], 1, &sentinels());
		assert_eq!(pairs(&observations), vec![("^", 'a'), ("a", 'b'), ("b", '$')]);
	}

	#[test]
	fn window_pads_with_start_symbols() {
		let observations = extract_observations(["abc"], 2, &sentinels());
		assert_eq!(
			pairs(&observations),
			vec![("^^", 'a'), ("^a", 'b'), ("ab", 'c'), ("bc", '$')]
		);
	}

	#[test]
	fn word_shorter_than_window() {
		let observations = extract_observations(["ab"], 4, &sentinels());
		assert_eq!(
			pairs(&observations),
			vec![("^^^^", 'a'), ("^^^a", 'b'), ("^^ab", '$')]
		);
	}

	#[test]
	fn empty_word_emits_single_end_observation() {
		let observations = extract_observations([""], 3, &sentinels());
		assert_eq!(pairs(&observations), vec![("^^^", '$')]);
	}

	#[test]
	fn each_word_restarts_from_padding() {
		let observations = extract_observations(vec!["a".to_owned(), "b".to_owned()], 1, &sentinels());
		assert_eq!(
			pairs(&observations),
			vec![("^", 'a'), ("a", '$'), ("^", 'b'), ("b", '$')]
		);
	}

	#[test]
	fn multibyte_characters_are_single_positions() {
		let observations = extract_observations(["Åbø"], 2, &sentinels());
		assert_eq!(
			pairs(&observations),
			vec![("^^", 'Å'), ("^Å", 'b'), ("Åb", 'ø'), ("bø", '$')]
		);
	}

	#[test]
	fn roll_keeps_window_length() {
		let mut context = "^^a".to_owned();
		roll_context(&mut context, 'b');
		assert_eq!(context, "^ab");

		let mut single = "x".to_owned();
		roll_context(&mut single, 'y');
		assert_eq!(single, "y");
	}
}
