use crate::code::SoundexCode;
use crate::error::{Result, SoundexError};
use crate::phonetic::PhoneticClass;

/// Encode `word` as a Soundex code.
///
/// The first character is kept (ASCII-uppercased) whatever it is. Every later
/// letter contributes the digit of its [`PhoneticClass`] unless it repeats the
/// class of the last emitted consonant with no separator letter in between.
/// Characters outside `A..=Z` are skipped without affecting adjacency. The
/// result is cut off as soon as three digits are collected and zero-padded if
/// the word runs out first.
///
/// # Errors
///
/// Returns [`SoundexError::InvalidArgument`] when `word` is empty.
///
/// # Example
///
/// ```rust
/// use soundex_encoder::encode;
///
/// assert_eq!(encode("Ashcraft").unwrap(), "A226");
/// assert_eq!(encode("Lee").unwrap(), "L000");
/// assert!(encode("").is_err());
/// ```
pub fn encode(word: &str) -> Result<SoundexCode> {
    let mut chars = word.chars();
    let first = chars
        .next()
        .ok_or_else(SoundexError::empty_word)?
        .to_ascii_uppercase();

    let mut code = String::with_capacity(SoundexCode::LEN);
    code.push(first);
    let mut len = 1;

    // None: last character had no class. Some(Separator): a vowel-like letter
    // reopened the gate. Otherwise the class of the last letter that counted.
    let mut previous = PhoneticClass::of(first);

    for c in chars {
        match PhoneticClass::of(c) {
            Some(class) if class.is_separator() => previous = Some(class),
            Some(class) if previous != Some(class) => {
                code.push(class.digit());
                len += 1;
                previous = Some(class);
                if len == SoundexCode::LEN {
                    log::trace!("soundex {word:?} -> {code} (input cut short)");
                    return Ok(SoundexCode::new(code));
                }
            }
            _ => {}
        }
    }

    code.extend(std::iter::repeat('0').take(SoundexCode::LEN - len));
    log::trace!("soundex {word:?} -> {code}");
    Ok(SoundexCode::new(code))
}

/// Whether two words share the same Soundex code.
///
/// # Errors
///
/// Returns [`SoundexError::InvalidArgument`] when either word is empty.
pub fn sounds_alike(left: &str, right: &str) -> Result<bool> {
    Ok(encode(left)? == encode(right)?)
}
