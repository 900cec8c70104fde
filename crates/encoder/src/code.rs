use std::fmt;

use serde::Serialize;

/// A Soundex code: the uppercased first character of a word followed by
/// three phonetic digits, always exactly [`SoundexCode::LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SoundexCode(String);

impl SoundexCode {
    /// Number of characters in every code
    pub const LEN: usize = 4;

    /// Wrap an already reduced code.
    ///
    /// `value` must hold one leading character and exactly three ASCII digits.
    pub(crate) fn new(value: String) -> Self {
        debug_assert_eq!(value.chars().count(), Self::LEN);
        Self(value)
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading character, copied from the word
    #[must_use]
    pub fn initial(&self) -> char {
        self.0.chars().next().unwrap_or('0')
    }

    /// The three phonetic digits following the initial
    #[must_use]
    pub fn digits(&self) -> &str {
        // digits are ASCII, so the last three bytes are the last three chars
        &self.0[self.0.len() - (Self::LEN - 1)..]
    }

    /// Consume the code, returning the owned string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SoundexCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SoundexCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SoundexCode> for String {
    fn from(code: SoundexCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for SoundexCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SoundexCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
