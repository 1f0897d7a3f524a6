//! Validated wiring tables.
//!
//! A `Wiring` is a permutation of the alphabet: position `i` maps to
//! `sequence[i]`. The inverse table is computed once at construction so the
//! return path is a lookup rather than a search.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::letter::{ALPHABET_LEN, Letter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WiringError {
    #[error("wiring must have exactly 26 letters, got {0}")]
    Length(usize),
    #[error("wiring position {position} holds '{found}', expected an uppercase letter A-Z")]
    Letter { position: usize, found: char },
    #[error("letter {0} appears more than once in wiring")]
    Duplicate(Letter),
}

/// A bijective substitution table over the 26-letter alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Wiring {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Wiring {
    /// Parse a 26-letter sequence, rejecting anything that is not a permutation.
    pub fn parse(sequence: &str) -> Result<Self, WiringError> {
        if let Some((position, found)) = sequence
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(WiringError::Letter { position, found });
        }
        Self::build(sequence.as_bytes())
    }

    /// Compile-time checked wiring for static tables.
    ///
    /// Panics (at compile time when used in a `const`) if `sequence` is not a
    /// permutation of A-Z.
    #[must_use]
    pub const fn from_static(sequence: &'static str) -> Self {
        match Self::build(sequence.as_bytes()) {
            Ok(wiring) => wiring,
            Err(_) => panic!("static wiring must be a permutation of A-Z"),
        }
    }

    const fn build(bytes: &[u8]) -> Result<Self, WiringError> {
        if bytes.len() != ALPHABET_LEN {
            return Err(WiringError::Length(bytes.len()));
        }
        let mut seen = [false; ALPHABET_LEN];
        let mut forward = [Letter::A; ALPHABET_LEN];
        let mut inverse = [Letter::A; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let Some(letter) = Letter::from_ascii(bytes[i]) else {
                return Err(WiringError::Letter {
                    position: i,
                    found: bytes[i] as char,
                });
            };
            if seen[letter.index()] {
                return Err(WiringError::Duplicate(letter));
            }
            seen[letter.index()] = true;
            forward[i] = letter;
            inverse[letter.index()] = Letter::ALL[i];
            i += 1;
        }
        Ok(Self { forward, inverse })
    }

    /// Forward lookup: the letter wired to position `letter`.
    #[must_use]
    pub const fn map(&self, letter: Letter) -> Letter {
        self.forward[letter.index()]
    }

    /// Inverse lookup: the position `n` whose wire leads to `letter`.
    #[must_use]
    pub const fn unmap(&self, letter: Letter) -> Letter {
        self.inverse[letter.index()]
    }

    /// True when mapping any letter twice gives the letter back.
    #[must_use]
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    #[must_use]
    pub const fn letters(&self) -> &[Letter; ALPHABET_LEN] {
        &self.forward
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.forward {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

impl FromStr for Wiring {
    type Err = WiringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
