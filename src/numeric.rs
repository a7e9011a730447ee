// local imports
use crate::error::*;

// ---

const ROMAN_MAX: u16 = 3999;

const ROMAN_DIGITS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Converts a number in `0..=3999` into a Roman numeral, zero gives an empty string.
pub fn to_roman(value: i64) -> Result<String> {
    roman(value.into())
}

fn roman(value: i128) -> Result<String> {
    let Some(mut rest) = u16::try_from(value).ok().filter(|&v| v <= ROMAN_MAX) else {
        return Err(Error::OutOfRange {
            value,
            min: 0,
            max: ROMAN_MAX.into(),
        });
    };

    let mut result = String::new();
    for (weight, digits) in ROMAN_DIGITS {
        while rest >= weight {
            result.push_str(digits);
            rest -= weight;
        }
    }

    Ok(result)
}

// ---

/// Helpers for integer types.
pub trait IntExt: Sized + Copy {
    /// Tests whether the value lies between `lower` and `upper`.
    fn is_between(self, lower: Self, upper: Self, inclusive: bool) -> bool;

    fn is_even(self) -> bool;

    fn is_odd(self) -> bool {
        !self.is_even()
    }

    /// Tests whether the value is a multiple of `factor`, a zero factor divides nothing.
    fn is_divisible_by(self, factor: Self) -> bool;

    /// Rounds to the nearest multiple of `nearest`, halves go to the even multiple.
    ///
    /// `7.round_to(10)` is `10`, `15.round_to(10)` is `20` and `25.round_to(10)` is `20`.
    fn round_to(self, nearest: Self) -> Self;

    /// Formats the value as a Roman numeral, see [`to_roman`].
    fn to_roman(self) -> Result<String>;

    /// Appends the English ordinal suffix, e.g. `1st`, `12th`, `23rd`.
    /// Values below one are formatted as plain numbers.
    fn with_ordinal(self) -> String;
}

macro_rules! impl_int_ext {
    ($($t:ty),*) => {
        $(
            impl IntExt for $t {
                #[inline]
                fn is_between(self, lower: Self, upper: Self, inclusive: bool) -> bool {
                    if inclusive {
                        lower <= self && self <= upper
                    } else {
                        lower < self && self < upper
                    }
                }

                #[inline]
                fn is_even(self) -> bool {
                    self % 2 == 0
                }

                #[inline]
                fn is_divisible_by(self, factor: Self) -> bool {
                    self.checked_rem(factor) == Some(0)
                }

                fn round_to(self, nearest: Self) -> Self {
                    if nearest == 0 {
                        return self;
                    }
                    let multiple = (self as f64 / nearest as f64).round_ties_even() as Self;
                    multiple.saturating_mul(nearest)
                }

                fn to_roman(self) -> Result<String> {
                    roman(self as i128)
                }

                fn with_ordinal(self) -> String {
                    if self < 1 {
                        return self.to_string();
                    }
                    let suffix = match (self % 100, self % 10) {
                        (11..=13, _) => "th",
                        (_, 1) => "st",
                        (_, 2) => "nd",
                        (_, 3) => "rd",
                        _ => "th",
                    };
                    format!("{}{}", self, suffix)
                }
            }
        )*
    };
}

impl_int_ext!(i32, i64, u32, u64, usize);

// ---

/// Helpers for floating point types.
pub trait FloatExt: Sized + Copy {
    /// Tests whether the value lies between `lower` and `upper`.
    fn is_between(self, lower: Self, upper: Self, inclusive: bool) -> bool;

    /// Tests whether the value is an exact multiple of `factor`.
    fn is_divisible_by(self, factor: Self) -> bool;

    /// Rounds to the nearest multiple of `nearest`, halves go to the even multiple.
    fn round_to(self, nearest: Self) -> Self;
}

macro_rules! impl_float_ext {
    ($($t:ty),*) => {
        $(
            impl FloatExt for $t {
                #[inline]
                fn is_between(self, lower: Self, upper: Self, inclusive: bool) -> bool {
                    if inclusive {
                        lower <= self && self <= upper
                    } else {
                        lower < self && self < upper
                    }
                }

                #[inline]
                fn is_divisible_by(self, factor: Self) -> bool {
                    factor != 0.0 && self % factor == 0.0
                }

                fn round_to(self, nearest: Self) -> Self {
                    if nearest == 0.0 {
                        return self;
                    }
                    (self / nearest).round_ties_even() * nearest
                }
            }
        )*
    };
}

impl_float_ext!(f32, f64);
