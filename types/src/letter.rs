//! Alphabet positions.
//!
//! Every signal in the machine is one of 26 uppercase letters. `Letter` stores
//! the zero-based position (A=0 .. Z=25), so an out-of-range letter cannot be
//! represented once constructed.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of letters on every rotor, reflector and keyboard.
pub const ALPHABET_LEN: usize = 26;

const LEN_I32: i32 = ALPHABET_LEN as i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("'{0}' is not an uppercase letter A-Z")]
    NotUppercase(char),
    #[error("alphabet position {0} is out of range (expected 0-25)")]
    OutOfRange(usize),
}

/// A letter of the 26-letter alphabet, stored as its position (A=0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const A: Letter = Letter(0);
    pub const Z: Letter = Letter(25);

    /// All 26 letters in alphabet order.
    pub const ALL: [Letter; ALPHABET_LEN] = {
        let mut all = [Letter(0); ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            all[i] = Letter(i as u8);
            i += 1;
        }
        all
    };

    pub fn new(index: usize) -> Result<Self, LetterError> {
        if index < ALPHABET_LEN {
            Ok(Self(index as u8))
        } else {
            Err(LetterError::OutOfRange(index))
        }
    }

    /// Case-sensitive: only `'A'..='Z'` are letters.
    pub fn from_char(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_uppercase() {
            Ok(Self(c as u8 - b'A'))
        } else {
            Err(LetterError::NotUppercase(c))
        }
    }

    #[must_use]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        if byte.is_ascii_uppercase() {
            Some(Self(byte - b'A'))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Modular add. The result is always a valid letter, for any `delta`.
    #[must_use]
    pub fn shift(self, delta: i32) -> Self {
        Self((i32::from(self.0) + delta.rem_euclid(LEN_I32)).rem_euclid(LEN_I32) as u8)
    }

    /// The letter one position further round the alphabet (Z wraps to A).
    #[must_use]
    pub fn next(self) -> Self {
        self.shift(1)
    }

    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0 as i32
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::from_char(value)
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.to_char()
    }
}
