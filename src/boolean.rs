/// Conversions of `bool` into the short textual and numeric forms used in reports and flags.
pub trait BoolExt {
    /// Returns `"Yes"` or `"No"`.
    fn to_yes_no(self) -> &'static str;

    /// Returns `"T"` or `"F"`.
    fn to_tf(self) -> &'static str;

    /// Returns `1` or `0`.
    fn to_binary(self) -> u8;
}

impl BoolExt for bool {
    #[inline]
    fn to_yes_no(self) -> &'static str {
        if self { "Yes" } else { "No" }
    }

    #[inline]
    fn to_tf(self) -> &'static str {
        if self { "T" } else { "F" }
    }

    #[inline]
    fn to_binary(self) -> u8 {
        self.into()
    }
}
