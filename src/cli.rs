// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Args, Parser, Subcommand};

// ---

/// Helpers for text, numbers, dates and random picks from the command line.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    #[command(flatten)]
    pub bootstrap: BootstrapArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Default)]
pub struct BootstrapArgs {
    /// Configuration file path, may be repeated, an empty value or '-' disables all preceding ones including the default file.
    #[arg(long, value_name = "FILE", env = "EXTKIT_CONFIG", num_args = 1, global = true)]
    pub config: Vec<String>,
}

impl BootstrapArgs {
    /// Splits `--config` values into the effective file list and the flag telling
    /// whether the default configuration file is disabled.
    pub fn config_files(&self) -> (Vec<PathBuf>, bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();

        (self.config[offset..].iter().map(PathBuf::from).collect(), no_default)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print values matching a wildcard pattern: '*' any text, '?' any character, '#' a digit, '[a-z]' and '[!a-z]' character lists.
    Like {
        /// Wildcard pattern to match whole values against.
        pattern: String,

        /// Values to test, lines of the standard input are used if none are given.
        values: Vec<String>,

        /// Print values that do not match instead.
        #[arg(short = 'v', long)]
        invert: bool,
    },

    /// Describe how long ago a moment was, e.g. "1 day ago, 1 hour".
    Ago {
        /// Moment in RFC 3339 format, a plain date, or a relative offset like '-90m'.
        #[arg(allow_hyphen_values = true)]
        time: String,

        /// Moment to measure from instead of the current time.
        #[arg(long, allow_hyphen_values = true)]
        now: Option<String>,
    },

    /// Print a number as a Roman numeral.
    Roman {
        number: i64,
    },

    /// Print a number with its English ordinal suffix.
    Ordinal {
        #[arg(allow_hyphen_values = true)]
        number: i64,
    },

    /// Print the plural form of a word or phrase.
    Plural {
        word: String,
    },

    /// Print text in title case.
    Title {
        text: String,
    },

    /// Insert spaces in front of capitals, e.g. 'ThisIsATest' becomes 'This Is A Test'.
    Spaced {
        text: String,

        /// Also split a run of capitals from the word that follows, e.g. 'XMLParser' becomes 'XML Parser'.
        #[arg(long)]
        preserve_acronyms: bool,
    },

    /// Print items in random order.
    Shuffle {
        items: Vec<String>,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Print one random item.
    Pick {
        #[arg(required = true)]
        items: Vec<String>,

        #[command(flatten)]
        seed: SeedArgs,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct SeedArgs {
    /// Seed of the random generator, overrides the 'random.seed' setting.
    #[arg(long, env = "EXTKIT_SEED")]
    pub seed: Option<u64>,
}
