// third-party imports
use strum::{EnumMessage, IntoEnumIterator};

// local imports
use crate::{error::*, text::StrExt};

// ---

/// Human readable name of an enum variant.
///
/// The description comes from the `#[strum(message = "...")]` attribute and falls back to
/// the variant name, so it is fixed at compile time:
///
/// ```
/// use extkit::enums::Describe;
/// use strum::{AsRefStr, EnumMessage};
///
/// #[derive(AsRefStr, EnumMessage)]
/// enum State {
///     California,
///     #[strum(message = "New Mexico")]
///     NewMexico,
/// }
///
/// assert_eq!(State::NewMexico.description(), "New Mexico");
/// assert_eq!(State::California.description(), "California");
/// ```
pub trait Describe {
    fn description(&self) -> &str;
}

impl<T> Describe for T
where
    T: EnumMessage + AsRef<str>,
{
    fn description(&self) -> &str {
        match self.get_message() {
            Some(message) => message,
            None => self.as_ref(),
        }
    }
}

/// Parses a variant of `T` by its name.
///
/// Surrounding whitespace is ignored, empty input is rejected with [`Error::EmptyInput`]
/// and unknown names with [`Error::UnknownVariant`] listing the accepted ones.
pub fn parse_enum<T>(value: &str, ignore_case: bool) -> Result<T>
where
    T: IntoEnumIterator + AsRef<str>,
{
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::EmptyInput);
    }

    let found = T::iter().find(|variant| {
        if ignore_case {
            variant.as_ref().eq_ignore_case(value)
        } else {
            variant.as_ref() == value
        }
    });

    found.ok_or_else(|| {
        log::debug!("no variant matches {:?}", value);
        Error::UnknownVariant {
            value: value.into(),
            known: T::iter().map(|variant| variant.as_ref().to_owned()).collect(),
        }
    })
}

#[cfg(test)]
mod tests;
