use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use namegen_core::io::{read_city_names, read_word_file};
use namegen_core::ModelError;
use namegen_core::model::{DEFAULT_WINDOW_SIZE, GenerationInput, WordGenerator};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Generate new words from examples using Markov chains
#[derive(Parser)]
#[command(name = "namegen", version, about)]
struct Cli {
	#[command(subcommand)]
	command: Command,

	#[command(flatten)]
	generation: GenerationArgs,

	/// Show debug logs
	#[arg(short, long, global = true, conflicts_with = "quiet")]
	verbose: bool,

	/// Only show errors
	#[arg(short, long, global = true)]
	quiet: bool,
}

#[derive(Subcommand)]
enum Command {
	/// Learn from a .txt file with one example word per line
	Words {
		/// Path to the word list
		path: PathBuf,
	},

	/// Learn from the city names of one country
	Cities {
		/// ISO 3166-1 alpha-2 country code (ex. GB)
		iso_country_code: String,

		/// CSV file with "Name" and "Country Code" columns
		#[arg(long, env = "NAMEGEN_DATA", default_value = "data/geonames_cities.csv")]
		data: PathBuf,
	},
}

#[derive(Args)]
struct GenerationArgs {
	/// Number of words to print
	#[arg(long, global = true, env = "NAMEGEN_NB_NAMES", default_value_t = 10)]
	nb_names: usize,

	/// Length of the character context used to build the chain
	#[arg(long, global = true, env = "NAMEGEN_NB_CHAR", default_value_t = DEFAULT_WINDOW_SIZE)]
	nb_char: usize,

	/// Seed for reproducible output
	#[arg(long, global = true, env = "NAMEGEN_SEED")]
	seed: Option<u64>,

	/// Extra attempts to avoid printing words from the examples
	#[arg(long, global = true, env = "NAMEGEN_NB_TRY", default_value_t = 0)]
	nb_try: usize,

	/// Skip words longer than this many characters
	#[arg(long, global = true, env = "NAMEGEN_MAX_LENGTH")]
	max_length: Option<usize>,
}

impl GenerationArgs {
	fn input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::new(self.nb_char).context("invalid --nb-char")?;
		input.nb_try = self.nb_try;
		input.set_max_length(self.max_length);
		Ok(input)
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_os_rng(),
		}
	}
}

fn setup_logging(verbose: bool, quiet: bool) {
	let filter = if quiet {
		"error"
	} else if verbose {
		"debug"
	} else {
		"warn"
	};

	tracing_subscriber::registry()
		.with(fmt::layer().with_writer(std::io::stderr))
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
		.init();
}

fn load_corpus(command: &Command) -> Result<Vec<String>> {
	let words = match command {
		Command::Words { path } => {
			read_word_file(path).with_context(|| format!("cannot load examples from {}", path.display()))?
		}
		Command::Cities { iso_country_code, data } => read_city_names(data, iso_country_code)
			.with_context(|| format!("cannot load {iso_country_code} cities from {}", data.display()))?,
	};
	info!(examples = words.len(), "corpus loaded");
	Ok(words)
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	setup_logging(cli.verbose, cli.quiet);

	let corpus = load_corpus(&cli.command)?;
	let generator = WordGenerator::new(&corpus, cli.generation.input()?).context("cannot build the model")?;

	let mut rng = cli.generation.rng();
	let mut stdout = io::stdout().lock();
	write_words(&generator, &mut rng, cli.generation.nb_names, &mut stdout)?;

	Ok(())
}

/// Writes up to `count` words to `out`, one per line, as they are generated.
///
/// Words dropped by the length cap are logged and skipped.
/// Returns the number of words written.
fn write_words<R: Rng + ?Sized, W: Write>(generator: &WordGenerator, rng: &mut R, count: usize, out: &mut W) -> Result<usize> {
	let mut written = 0;
	for _ in 0..count {
		match generator.generate_with(rng) {
			Ok(word) => {
				writeln!(out, "{word}")?;
				written += 1;
			}
			Err(err @ ModelError::LengthExceeded { .. }) => warn!("skipping word: {err}"),
			Err(err) => return Err(err.into()),
		}
	}
	Ok(written)
}
