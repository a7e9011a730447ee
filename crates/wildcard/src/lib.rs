//! Wildcard pattern matching with the syntax of the Visual Basic `Like` operator.
//!
//! Patterns are translated into anchored regular expressions, so a pattern always
//! has to match the whole text.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one character
//! - `#` - Matches exactly one digit
//! - `[abc]`, `[a-z]` - Matches one character from the list or range
//! - `[!abc]` - Matches one character not in the list
//! - Any other character matches itself, including regular expression metacharacters
//!
//! Wildcards keep their translation inside a bracket list as well, so `[#]` is any
//! digit, `[?]` matches a literal `.` and `[*]` matches either `.` or `*`.
//!
//! # Examples
//!
//! ```
//! use wildcard::{Pattern, is_like};
//!
//! let pattern = Pattern::new("*.txt").unwrap();
//! assert!(pattern.matches("hello.txt"));
//! assert!(!pattern.matches("hello.rs"));
//!
//! let pattern = Pattern::new("v#.#").unwrap();
//! assert!(pattern.matches("v1.2"));
//! assert!(!pattern.matches("v1.x"));
//!
//! assert_eq!(is_like(Some("b"), Some("[!abc]")), Ok(false));
//! assert_eq!(is_like(None, Some("*")), Ok(false));
//! ```
//!
//! # Errors
//!
//! A pattern that does not translate into a valid expression, for example one with an
//! unclosed bracket list, is reported as [`PatternError`] carrying the original text:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let err = Pattern::new("[abc").unwrap_err();
//! assert_eq!(err.pattern(), "[abc");
//! ```

mod pattern;

pub use pattern::*;
