//! Crossword letter representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Error returned when a character is not an ASCII letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LetterError {
    /// The character is outside `A`-`Z` / `a`-`z`.
    #[display("not an ASCII letter: {ch:?}")]
    NotALetter {
        /// The rejected character.
        ch: char,
    },
    /// The string did not contain exactly one character.
    #[display("expected a single letter, found {len} characters")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
}

/// A single uppercase letter in the range `A`-`Z`.
///
/// Letters are always stored uppercase; construction from a lowercase
/// character normalizes it.
///
/// # Examples
///
/// ```
/// use heartword_core::Letter;
///
/// let letter = Letter::from_char('v').unwrap();
/// assert_eq!(letter.as_char(), 'V');
/// assert_eq!(letter.as_str(), "V");
/// assert!(Letter::from_char('7').is_err());
///
/// assert_eq!(Letter::ALL.len(), 26);
/// assert_eq!(Letter::ALL[0].as_char(), 'A');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

const LETTER_STRS: [&str; 26] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R", "S",
    "T", "U", "V", "W", "X", "Y", "Z",
];

impl Letter {
    /// All letters in alphabetical order, as laid out on the keypad.
    pub const ALL: [Self; 26] = {
        let mut all = [Self(b'A'); 26];
        let mut i: u8 = 0;
        while i < 26 {
            all[i as usize] = Self(b'A' + i);
            i += 1;
        }
        all
    };

    /// Creates a letter from a character, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::NotALetter`] if `ch` is not an ASCII letter.
    pub const fn from_char(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            #[allow(clippy::cast_possible_truncation)]
            let byte = ch.to_ascii_uppercase() as u8;
            Ok(Self(byte))
        } else {
            Err(LetterError::NotALetter { ch })
        }
    }

    /// Returns the letter as an uppercase character.
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Returns the letter as a static one-character string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        LETTER_STRS[self.index()]
    }

    /// Returns the alphabet index (`A` is 0, `Z` is 25).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => Err(LetterError::InvalidLength {
                len: s.chars().count(),
            }),
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_all_is_alphabetical() {
        let text: String = Letter::ALL.iter().map(|letter| letter.as_char()).collect();
        assert_eq!(text, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        for (i, letter) in Letter::ALL.into_iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(letter.as_str(), letter.to_string());
        }
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(
            Letter::from_char('1'),
            Err(LetterError::NotALetter { ch: '1' })
        );
        assert_eq!(
            Letter::from_char('é'),
            Err(LetterError::NotALetter { ch: 'é' })
        );
        assert_eq!(
            "".parse::<Letter>(),
            Err(LetterError::InvalidLength { len: 0 })
        );
        assert_eq!(
            "AB".parse::<Letter>(),
            Err(LetterError::InvalidLength { len: 2 })
        );
    }

    proptest! {
        #[test]
        fn prop_case_insensitive(ch in proptest::char::range('a', 'z')) {
            let lower = Letter::from_char(ch).unwrap();
            let upper = Letter::from_char(ch.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(lower, upper);
            prop_assert_eq!(lower.as_char(), ch.to_ascii_uppercase());
        }
    }
}
