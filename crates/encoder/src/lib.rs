//! # Soundex Encoder
//!
//! Phonetic codes for fuzzy name matching. Words that sound alike in English
//! ("Robert" and "Rupert", "Soundex" and "Sownteks") map to the same
//! four-character code.
//!
//! ## Algorithm
//!
//! ```text
//! word
//!   │
//!   ├──> first character, uppercased, kept as-is
//!   │
//!   ├──> remaining characters
//!   │    ├─> A E I O U H W Y   reset adjacency, emit nothing
//!   │    ├─> consonant         emit class digit unless it repeats the previous class
//!   │    └─> anything else     ignored
//!   │
//!   └──> stop at 4 characters, or pad with '0'
//! ```
//!
//! `H` and `W` reset adjacency exactly like vowels, so "Ashcraft" encodes to
//! `A226`.
//!
//! ## Example
//!
//! ```rust
//! use soundex_encoder::{encode, sounds_alike};
//!
//! let code = encode("Tymczak").unwrap();
//! assert_eq!(code.as_str(), "T522");
//! assert_eq!(code.digits(), "522");
//!
//! assert!(sounds_alike("Robert", "Rupert").unwrap());
//! ```

mod code;
mod encoder;
mod error;
mod phonetic;

pub use code::SoundexCode;
pub use encoder::{encode, sounds_alike};
pub use error::{Result, SoundexError};
pub use phonetic::PhoneticClass;
