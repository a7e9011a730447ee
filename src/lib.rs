//! Helper extensions for primitive types, strings, dates, random generators and collections.
//!
//! Most functionality comes as extension traits, bring them into scope to use:
//!
//! ```
//! use extkit::{IntExt, StrExt};
//!
//! assert_eq!(22_i32.with_ordinal(), "22nd");
//! assert_eq!("ThisIsATest".add_spaces_to_sentence(false), "This Is ATest");
//! assert!("report-2024.txt".is_like("report-####.*").unwrap());
//! ```

// public modules
pub mod app;
pub mod boolean;
pub mod cli;
pub mod collection;
pub mod config;
pub mod datetime;
pub mod enums;
pub mod error;
pub mod numeric;
pub mod random;
pub mod relative;
pub mod settings;
pub mod text;
pub mod timeparse;

// public uses
pub use app::App;
pub use boolean::BoolExt;
pub use collection::{SliceExt, ValueExt, VecExt, is_none_or_empty};
pub use datetime::DateTimeExt;
pub use enums::{Describe, parse_enum};
pub use error::{Error, Result};
pub use numeric::{FloatExt, IntExt, to_roman};
pub use random::RandomExt;
pub use relative::{RelativeFormat, to_relative, to_relative_now};
pub use settings::Settings;
pub use text::StrExt;
pub use wildcard::{Pattern, PatternError, is_like};
