//! Notch positions.

use std::fmt;

use crate::letter::{Letter, LetterError};

/// The set of window letters at which a rotor carries the next rotor along.
///
/// Stored as a 26-bit mask; bit `i` set means letter `i` is a notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NotchSet(u32);

impl NotchSet {
    pub const EMPTY: NotchSet = NotchSet(0);

    /// Compile-time checked notch set for static tables.
    #[must_use]
    pub const fn from_static(letters: &'static str) -> Self {
        let bytes = letters.as_bytes();
        let mut mask = 0u32;
        let mut i = 0;
        while i < bytes.len() {
            match Letter::from_ascii(bytes[i]) {
                Some(letter) => mask |= 1 << letter.index(),
                None => panic!("static notch letters must be uppercase A-Z"),
            }
            i += 1;
        }
        Self(mask)
    }

    /// Parse notch letters from a string such as `"ZM"`. Repeats are harmless.
    pub fn parse(letters: &str) -> Result<Self, LetterError> {
        letters
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>, _>>()
            .map(|letters| letters.into_iter().collect())
    }

    #[must_use]
    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    const fn with(self, letter: Letter) -> Self {
        Self(self.0 | (1 << letter.index()))
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::ALL.into_iter().filter(move |&l| self.contains(l))
    }
}

impl FromIterator<Letter> for NotchSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

impl fmt::Display for NotchSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
