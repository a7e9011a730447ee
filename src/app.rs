// std imports
use std::io::{BufRead, Write};

// third-party imports
use chrono::{DateTime, Utc};
use rand::{SeedableRng, rngs::StdRng};

// local imports
use crate::{
    cli::{Command, SeedArgs},
    collection::SliceExt,
    error::*,
    numeric::{IntExt, to_roman},
    random::RandomExt,
    settings::Settings,
    text::StrExt,
    timeparse::parse_time,
};

// ---

/// Executes commands against the loaded settings.
pub struct App {
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn run(&self, command: Command, input: &mut dyn BufRead, output: &mut dyn Write) -> Result<()> {
        log::debug!("running {:?}", command);

        match command {
            Command::Like {
                pattern,
                values,
                invert,
            } => self.like(&pattern, values, invert, input, output),
            Command::Ago { time, now } => self.ago(&time, now.as_deref(), output),
            Command::Roman { number } => Ok(writeln!(output, "{}", to_roman(number)?)?),
            Command::Ordinal { number } => Ok(writeln!(output, "{}", number.with_ordinal())?),
            Command::Plural { word } => Ok(writeln!(output, "{}", word.to_plural())?),
            Command::Title { text } => Ok(writeln!(output, "{}", text.to_title_case())?),
            Command::Spaced {
                text,
                preserve_acronyms,
            } => Ok(writeln!(output, "{}", text.add_spaces_to_sentence(preserve_acronyms))?),
            Command::Shuffle { mut items, seed } => {
                items.shuffle_with(&mut self.rng(&seed));
                for item in items {
                    writeln!(output, "{}", item)?;
                }
                Ok(())
            }
            Command::Pick { items, seed } => {
                let item = self.rng(&seed).one_of(&items).ok_or(Error::EmptyInput)?;
                Ok(writeln!(output, "{}", item)?)
            }
        }
    }

    fn like(
        &self,
        pattern: &str,
        values: Vec<String>,
        invert: bool,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
    ) -> Result<()> {
        let pattern = wildcard::Pattern::new(pattern)?;
        log::debug!("pattern {:?} translated to {:?}", pattern.as_str(), pattern.regex_source());

        let mut emit = |value: &str| -> Result<()> {
            let matched = !pattern.as_str().is_empty() && pattern.matches(value);
            if matched != invert {
                writeln!(output, "{}", value)?;
            }
            Ok(())
        };

        if values.is_empty() {
            for line in input.lines() {
                emit(&line?)?;
            }
        } else {
            for value in &values {
                emit(value)?;
            }
        }

        Ok(())
    }

    fn ago(&self, time: &str, now: Option<&str>, output: &mut dyn Write) -> Result<()> {
        let current = Utc::now();
        let now: DateTime<Utc> = match now {
            Some(now) => parse_time(now, &current)?,
            None => current,
        };
        let past = parse_time(time, &now)?;
        log::debug!("measuring from {} to {}", past, now);

        Ok(writeln!(output, "{}", self.settings.relative_time.between(&past, &now))?)
    }

    fn rng(&self, args: &SeedArgs) -> StdRng {
        match args.seed.or(self.settings.random.seed) {
            Some(seed) => {
                log::debug!("using random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}
