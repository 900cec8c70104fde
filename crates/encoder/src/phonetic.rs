/// Phonetic class of a Latin letter.
///
/// Consonants that sound alike share a class; vowels together with `H`, `W`
/// and `Y` fall into [`PhoneticClass::Separator`], which never produces a digit
/// but does split runs of equal consonant classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticClass {
    /// A, E, I, O, U, H, W, Y (digit `0`)
    Separator,
    /// B, F, P, V (digit `1`)
    Labial,
    /// C, G, J, K, Q, S, X, Z (digit `2`)
    Guttural,
    /// D, T (digit `3`)
    Dental,
    /// L (digit `4`)
    Lateral,
    /// M, N (digit `5`)
    Nasal,
    /// R (digit `6`)
    Rhotic,
}

use self::PhoneticClass::{Dental, Guttural, Labial, Lateral, Nasal, Rhotic, Separator};

/// Class of every letter, indexed by alphabet position.
const CLASS_BY_LETTER: [PhoneticClass; 26] = [
    Separator, // A
    Labial,    // B
    Guttural,  // C
    Dental,    // D
    Separator, // E
    Labial,    // F
    Guttural,  // G
    Separator, // H
    Separator, // I
    Guttural,  // J
    Guttural,  // K
    Lateral,   // L
    Nasal,     // M
    Nasal,     // N
    Separator, // O
    Labial,    // P
    Guttural,  // Q
    Rhotic,    // R
    Guttural,  // S
    Dental,    // T
    Separator, // U
    Labial,    // V
    Separator, // W
    Guttural,  // X
    Separator, // Y
    Guttural,  // Z
];

impl PhoneticClass {
    /// Look up the class of `c`, ignoring ASCII case.
    ///
    /// Returns `None` for anything outside `A..=Z` once uppercased: digits,
    /// punctuation, whitespace and non-ASCII characters all have no class.
    #[must_use]
    pub fn of(c: char) -> Option<Self> {
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        Some(CLASS_BY_LETTER[(upper as u8 - b'A') as usize])
    }

    /// Digit written into a code for this class.
    #[must_use]
    pub const fn digit(self) -> char {
        match self {
            Separator => '0',
            Labial => '1',
            Guttural => '2',
            Dental => '3',
            Lateral => '4',
            Nasal => '5',
            Rhotic => '6',
        }
    }

    /// Whether this is the vowel-like class that resets adjacency.
    #[must_use]
    pub const fn is_separator(self) -> bool {
        matches!(self, Separator)
    }
}
