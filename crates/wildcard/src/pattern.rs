// std imports
use std::fmt;
use std::str::FromStr;

// third-party imports
use regex::Regex;
use thiserror::Error;

/// A compiled wildcard pattern.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("test?.log").unwrap();
/// assert!(pattern.matches("test1.log"));
/// assert!(!pattern.matches("test.log"));
///
/// let pattern: Pattern = "[a-c]*".parse().unwrap();
/// assert!(pattern.matches("apple"));
/// assert!(!pattern.matches("date"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles a pattern.
    ///
    /// Fails with [`PatternError`] if the translated expression is not valid,
    /// e.g. when a bracket list is left open or is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, PatternError> {
        let raw = raw.into();
        let source = translate(&raw);
        match Regex::new(&source) {
            Ok(regex) => Ok(Self { raw, regex }),
            Err(source) => Err(PatternError { pattern: raw, source }),
        }
    }

    /// Tests whether the entire text matches the pattern.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the pattern text it was created from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the regular expression the pattern was translated into.
    pub fn regex_source(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ---

/// Error returned for a pattern that cannot be compiled.
#[derive(Error, Debug, Clone)]
#[error("invalid pattern: {pattern}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

impl PatternError {
    /// The offending pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl PartialEq for PatternError {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

// ---

/// Decides whether `candidate` matches `pattern` as a whole.
///
/// A missing candidate never matches, and neither does a missing or empty pattern.
/// Compilation failures are returned as errors rather than treated as a mismatch.
///
/// ```
/// use wildcard::is_like;
///
/// assert_eq!(is_like(Some("5"), Some("#")), Ok(true));
/// assert_eq!(is_like(Some("a"), Some("#")), Ok(false));
/// assert_eq!(is_like(Some(""), Some("")), Ok(false));
/// ```
pub fn is_like(candidate: Option<&str>, pattern: Option<&str>) -> Result<bool, PatternError> {
    let (Some(candidate), Some(pattern)) = (candidate, pattern) else {
        return Ok(false);
    };
    if pattern.is_empty() {
        return Ok(false);
    }

    Ok(Pattern::new(pattern)?.matches(candidate))
}

// ---

fn translate(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len() * 2 + 6);
    result.push_str("^(?s:");

    let mut chars = raw.chars().peekable();
    let mut in_list = false;
    while let Some(ch) = chars.next() {
        match ch {
            '[' if !in_list => {
                in_list = true;
                result.push('[');
                if chars.next_if_eq(&'!').is_some() {
                    result.push('^');
                }
            }
            ']' if in_list => {
                in_list = false;
                result.push(']');
            }
            '-' if in_list => result.push('-'),
            '*' => result.push_str(".*"),
            '?' => result.push('.'),
            '#' => result.push_str(r"\d"),
            _ => {
                let mut buf = [0; 4];
                result.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
            }
        }
    }

    result.push_str(")$");
    result
}
