use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// Column holding the city name in the geonames export.
pub const NAME_COLUMN: &str = "Name";

/// Column holding the ISO country code in the geonames export.
pub const COUNTRY_COLUMN: &str = "Country Code";

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Empty lines are kept (they train the model on empty words)
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
	let path = path.as_ref();
	let contents = fs::read_to_string(path).map_err(|source| LoadError::Io { path: path.to_owned(), source })?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Reads a word list: a `.txt` file with one word per line.
///
/// # Errors
/// - `UnsupportedExtension` if the file does not end with `.txt`
/// - `Io` if the file cannot be read
pub fn read_word_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
	let path = path.as_ref();
	if path.extension() != Some(std::ffi::OsStr::new("txt")) {
		return Err(LoadError::UnsupportedExtension { path: path.to_owned(), expected: "txt" });
	}
	let words = read_lines(path)?;
	debug!(path = %path.display(), words = words.len(), "loaded word list");
	Ok(words)
}

/// Checks an ISO 3166-1 alpha-2 country code and returns it upper-cased.
///
/// Examples:
/// - `"gb"` → `"GB"`
/// - `"GBR"` → error
pub fn validate_country_code(code: &str) -> Result<String, LoadError> {
	let trimmed = code.trim();
	if trimmed.chars().count() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
		return Err(LoadError::InvalidCountryCode { code: code.to_owned() });
	}
	Ok(trimmed.to_ascii_uppercase())
}

/// Reads the names of all cities of one country from a CSV file.
///
/// The first line is the header; the `Name` and `Country Code` columns are
/// located by name. Rows whose country matches `country` (after
/// validation) contribute their name, in file order.
///
/// # Errors
/// - `InvalidCountryCode` if `country` is not a 2-letter code
/// - `Io` if the file cannot be read
/// - `MissingColumn` if the header lacks one of the columns
/// - `MalformedRecord` if a row is too short to hold both columns
///
/// # Notes
/// - Fields are separated by `,`, or by `;` if the header only uses `;`.
/// - Fields may be quoted, with `""` escaping a quote.
/// - Quoted fields spanning several lines are not supported.
pub fn read_city_names<P: AsRef<Path>>(path: P, country: &str) -> Result<Vec<String>, LoadError> {
	let country = validate_country_code(country)?;
	let path = path.as_ref();
	let lines = read_lines(path)?;

	let mut rows = lines.iter().enumerate().filter(|(_, line)| !line.trim().is_empty());
	let (delimiter, header) = match rows.next() {
		Some((_, line)) => {
			let delimiter = detect_delimiter(line);
			(delimiter, split_record(line, delimiter))
		}
		None => return Err(LoadError::MissingColumn { path: path.to_owned(), column: NAME_COLUMN }),
	};
	let column = |name: &'static str| {
		header
			.iter()
			.position(|h| h.trim() == name)
			.ok_or_else(|| LoadError::MissingColumn { path: path.to_owned(), column: name })
	};
	let name_index = column(NAME_COLUMN)?;
	let country_index = column(COUNTRY_COLUMN)?;

	let mut names = Vec::new();
	for (index, line) in rows {
		let fields = split_record(line, delimiter);
		match (fields.get(name_index), fields.get(country_index)) {
			(Some(name), Some(code)) => {
				if code.trim() == country {
					names.push(name.clone());
				}
			}
			_ => {
				return Err(LoadError::MalformedRecord {
					path: path.to_owned(),
					line: index + 1,
					expected: name_index.max(country_index) + 1,
					found: fields.len(),
				});
			}
		}
	}

	debug!(path = %path.display(), country = %country, cities = names.len(), "loaded city names");
	Ok(names)
}

/// Picks `;` for semicolon-separated exports, `,` otherwise.
fn detect_delimiter(header: &str) -> char {
	if header.contains(';') && !header.contains(',') { ';' } else { ',' }
}

/// Splits one CSV line into fields.
///
/// - `delimiter` separates fields outside quotes
/// - `"` opens / closes a quoted field, `""` inside quotes is a literal quote
fn split_record(line: &str, delimiter: char) -> Vec<String> {
	let mut fields = Vec::new();
	let mut field = String::new();
	let mut in_quotes = false;
	let mut chars = line.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'"' if in_quotes => {
				if chars.peek() == Some(&'"') {
					field.push('"');
					chars.next();
				} else {
					in_quotes = false;
				}
			}
			'"' => in_quotes = true,
			c if c == delimiter && !in_quotes => fields.push(std::mem::take(&mut field)),
			c => field.push(c),
		}
	}
	fields.push(field);

	fields
}
