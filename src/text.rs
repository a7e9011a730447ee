// third-party imports
use once_cell::sync::Lazy;
use regex::Regex;
use strum::IntoEnumIterator;
use titlecase::titlecase;

// local imports
use crate::{enums::parse_enum, error::*};
use wildcard::PatternError;

// ---

const UNSAFE_FILE_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const WORD_SEPARATORS: [char; 4] = [' ', '.', '?', '!'];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://([\w\-]+\.)+[\w\-]+(/[\w\- ./?%&=]*)?").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w\-.]+@([\w\-]+\.)+[\w\-]{2,4}$").unwrap());

// ---

/// Helpers for string slices.
///
/// Every length or index argument counts characters, never bytes, so the results
/// are always valid slices of the original text.
pub trait StrExt {
    /// Parses the text as a floating point number and truncates it, or returns `default`.
    fn to_int_or(&self, default: i32) -> i32;

    fn to_int(&self) -> i32 {
        self.to_int_or(0)
    }

    /// Parses the text as a floating point number, or returns `default`.
    fn to_double_or(&self, default: f64) -> f64;

    fn to_double(&self) -> f64 {
        self.to_double_or(0.0)
    }

    /// Parses `T`/`F` or `true`/`false` in any case.
    fn to_bool(&self) -> Option<bool>;

    /// Keeps at most `max` leading characters.
    fn clamp_chars(&self, max: usize) -> &str;

    fn remove_whitespace(&self) -> String;

    /// Inserts spaces in front of capitals: `"ThisIsATest"` becomes `"This Is A Test"`.
    ///
    /// With `preserve_acronyms`, runs of capitals stay together and only the last capital
    /// starting a new word is separated: `"XMLParser"` becomes `"XML Parser"`.
    fn add_spaces_to_sentence(&self, preserve_acronyms: bool) -> String;

    fn is_numeric(&self) -> bool;

    fn to_title_case(&self) -> String;

    /// Applies simple English rules to get a plural form.
    ///
    /// In phrases like `"cup of tea"` only the part before the last `" of "` is changed.
    fn to_plural(&self) -> String;

    /// Counts words separated by spaces and sentence punctuation.
    fn word_count(&self) -> usize;

    fn capitalize(&self) -> String;

    fn reversed(&self) -> String;

    /// Tests whether the text contains an http or https URL.
    fn is_valid_url(&self) -> bool;

    fn is_valid_email(&self) -> bool;

    /// Tests whether the text can be used as a file name on common file systems.
    fn is_file_name_safe(&self) -> bool;

    /// Returns at most `n` leading characters.
    fn left(&self, n: usize) -> &str;

    /// Returns at most `n` trailing characters.
    fn right(&self, n: usize) -> &str;

    /// Compares with `other` ignoring case of both.
    fn eq_ignore_case(&self, other: &str) -> bool;

    /// Replaces the characters starting at `start` with `value`, keeping whatever
    /// follows the replaced range. The result grows if `value` runs past the end.
    fn overwrite(&self, start: usize, value: &str) -> Result<String>;

    /// Matches the whole text against a wildcard pattern, see [`wildcard::is_like`].
    fn is_like(&self, pattern: &str) -> std::result::Result<bool, PatternError>;

    /// Parses an enum variant by name, see [`parse_enum`].
    fn to_enum<T>(&self, ignore_case: bool) -> Result<T>
    where
        T: IntoEnumIterator + AsRef<str>;
}

impl StrExt for str {
    fn to_int_or(&self, default: i32) -> i32 {
        self.to_double_or(default.into()) as i32
    }

    fn to_double_or(&self, default: f64) -> f64 {
        self.trim().parse().unwrap_or(default)
    }

    fn to_bool(&self) -> Option<bool> {
        let value = self.trim();
        if value.eq_ignore_ascii_case("t") || value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("f") || value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn clamp_chars(&self, max: usize) -> &str {
        match self.char_indices().nth(max) {
            Some((i, _)) => &self[..i],
            None => self,
        }
    }

    fn remove_whitespace(&self) -> String {
        WHITESPACE.replace_all(self, "").into_owned()
    }

    fn add_spaces_to_sentence(&self, preserve_acronyms: bool) -> String {
        if self.trim().is_empty() {
            return String::new();
        }

        let chars: Vec<char> = self.chars().collect();
        let mut result = String::with_capacity(self.len() * 2);
        result.push(chars[0]);
        for (i, &ch) in chars.iter().enumerate().skip(1) {
            if ch.is_uppercase() {
                let prev = chars[i - 1];
                let word_start = prev != ' ' && !prev.is_uppercase();
                let acronym_end =
                    preserve_acronyms && prev.is_uppercase() && chars.get(i + 1).is_some_and(|next| !next.is_uppercase());
                if word_start || acronym_end {
                    result.push(' ');
                }
            }
            result.push(ch);
        }

        result
    }

    fn is_numeric(&self) -> bool {
        self.trim().parse::<f32>().is_ok()
    }

    fn to_title_case(&self) -> String {
        titlecase(self)
    }

    fn to_plural(&self) -> String {
        match self.rfind(" of ") {
            Some(i) if i > 0 => return format!("{}{}", self[..i].to_plural(), &self[i..]),
            _ => {}
        }

        if self.is_empty() {
            String::new()
        } else if ["sh", "ch", "us", "ss"].iter().any(|suffix| self.ends_with(*suffix)) {
            format!("{}es", self)
        } else if let Some(stem) = self.strip_suffix('y') {
            format!("{}ies", stem)
        } else if self.ends_with('o') {
            format!("{}es", self)
        } else {
            format!("{}s", self)
        }
    }

    fn word_count(&self) -> usize {
        self.split(WORD_SEPARATORS).filter(|word| !word.is_empty()).count()
    }

    fn capitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn reversed(&self) -> String {
        self.chars().rev().collect()
    }

    fn is_valid_url(&self) -> bool {
        URL.is_match(self)
    }

    fn is_valid_email(&self) -> bool {
        EMAIL.is_match(self)
    }

    fn is_file_name_safe(&self) -> bool {
        !self.contains(UNSAFE_FILE_NAME_CHARS)
    }

    fn left(&self, n: usize) -> &str {
        self.clamp_chars(n)
    }

    fn right(&self, n: usize) -> &str {
        if n == 0 {
            return "";
        }
        let count = self.chars().count();
        if n >= count {
            return self;
        }
        match self.char_indices().nth(count - n) {
            Some((i, _)) => &self[i..],
            None => self,
        }
    }

    fn eq_ignore_case(&self, other: &str) -> bool {
        self.chars()
            .flat_map(char::to_uppercase)
            .eq(other.chars().flat_map(char::to_uppercase))
    }

    fn overwrite(&self, start: usize, value: &str) -> Result<String> {
        let len = self.chars().count();
        if start > len {
            return Err(Error::IndexOutOfRange { index: start, len });
        }

        let mut result: String = self.chars().take(start).collect();
        result.push_str(value);
        result.extend(self.chars().skip(start + value.chars().count()));
        Ok(result)
    }

    fn is_like(&self, pattern: &str) -> std::result::Result<bool, PatternError> {
        wildcard::is_like(Some(self), Some(pattern))
    }

    fn to_enum<T>(&self, ignore_case: bool) -> Result<T>
    where
        T: IntoEnumIterator + AsRef<str>,
    {
        parse_enum(self, ignore_case)
    }
}
