use clap::{error::ErrorKind, CommandFactory, Parser};
use rand::{rngs::StdRng, SeedableRng};
use std::{
    error::Error,
    io::{self, Write},
    path::PathBuf,
};
use strum::IntoEnumIterator;
use sylla::{
    config::{
        Config, ConfigStore, FileConfigStore, MAX_AMOUNT, MAX_MAX_SYLLABLES, MAX_MIN_SYLLABLES,
    },
    output, Language, UsernameGenerator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SYLLA_LOG=debug`
const LOG_ENV: &str = "SYLLA_LOG";

/// pronounceable, language-flavored username generator
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Builds pronounceable usernames from the phoneme fragments of a language pack, flavored by a style. Options left out fall back to the saved defaults (see --save-defaults)."
)]
pub struct Cli {
    /// language pack to draw phonemes from (en, nl, de, sv, no)
    #[clap(short = 'l', long)]
    language: Option<String>,

    /// phonetic style: Medieval, Modern or Fantasy (anything else leaves the pack as is)
    #[clap(short = 's', long)]
    style: Option<String>,

    /// fewest syllables per username
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_MIN_SYLLABLES)))]
    min_syllables: Option<u32>,

    /// most syllables per username
    #[clap(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_MAX_SYLLABLES)))]
    max_syllables: Option<u32>,

    /// syllable complexity: 1 onset+vowel, 2 adds an ending, 3 may add a trailing vowel
    #[clap(short = 'c', long, value_parser = clap::value_parser!(u8).range(1..=3))]
    complexity: Option<u8>,

    /// capitalization: lowercase, capitalize or camelCase (anything else leaves case as is)
    #[clap(short = 'C', long)]
    capitalization: Option<String>,

    /// append a number between 0 and 99
    #[clap(short = 'n', long, overrides_with = "no_numbers")]
    numbers: bool,

    /// do not append a number
    #[clap(long, overrides_with = "numbers")]
    no_numbers: bool,

    /// append one of _ - .
    #[clap(short = 'S', long, overrides_with = "no_symbols")]
    symbols: bool,

    /// do not append a symbol
    #[clap(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// how many usernames to generate
    #[clap(short = 'a', long, value_parser = clap::value_parser!(u16).range(1..=MAX_AMOUNT as i64))]
    amount: Option<u16>,

    /// also save the usernames to this file, one per line
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// seed for a replayable batch
    #[clap(long)]
    seed: Option<u64>,

    /// remember this run's options as the new defaults
    #[clap(long)]
    save_defaults: bool,

    /// read and write defaults at this path instead of the user config dir
    #[clap(long)]
    config: Option<PathBuf>,

    /// list the available language packs and exit
    #[clap(long)]
    list_languages: bool,

    /// log generation details to stderr
    #[clap(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    /// Overlay the options given on the command line onto saved defaults
    fn apply_to(&self, mut config: Config) -> Config {
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(style) = &self.style {
            config.style = style.clone();
        }
        if let Some(min) = self.min_syllables {
            config.min_syllables = min;
        }
        if let Some(max) = self.max_syllables {
            config.max_syllables = max;
        }
        if let Some(complexity) = self.complexity {
            config.complexity = complexity;
        }
        if let Some(capitalization) = &self.capitalization {
            config.capitalization = capitalization.clone();
        }
        if self.numbers || self.no_numbers {
            config.append_number = self.numbers;
        }
        if self.symbols || self.no_symbols {
            config.append_symbol = self.symbols;
        }
        if let Some(amount) = self.amount {
            config.amount = usize::from(amount);
        }
        config
    }

    fn config_store(&self) -> FileConfigStore {
        match &self.config {
            Some(path) => FileConfigStore::with_path(path),
            None => FileConfigStore::new(),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.list_languages {
        let mut stdout = io::stdout().lock();
        for language in Language::iter() {
            let pack = language.pack()?;
            writeln!(stdout, "{}  {}", pack.code, pack.name)?;
        }
        return Ok(());
    }

    let store = cli.config_store();
    let config = cli.apply_to(store.load());

    if let Err(err) = config.check_limits() {
        Cli::command().error(ErrorKind::ValueValidation, err).exit();
    }

    let generator = match UsernameGenerator::new(&config.to_generation_config()) {
        Ok(generator) => generator,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    if cli.save_defaults {
        if let Err(err) = store.save(&config) {
            Cli::command().error(ErrorKind::Io, err).exit();
        }
        info!(path = %store.path().display(), "saved defaults");
    }

    let names = match cli.seed {
        Some(seed) => generator.generate_batch_with(&mut StdRng::seed_from_u64(seed)),
        None => generator.generate_batch(),
    };

    let mut stdout = io::stdout().lock();
    for name in &names {
        writeln!(stdout, "{name}")?;
    }

    if let Some(path) = &cli.output {
        if let Err(err) = output::save_batch(path, &names) {
            Cli::command().error(ErrorKind::Io, err).exit();
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
