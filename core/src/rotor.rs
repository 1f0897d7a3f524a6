//! The rotor mechanism.

use std::fmt;

use enigma_types::{Direction, Letter, LetterError, NotchSet, Wiring, WiringError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RotorError {
    #[error("invalid rotor wiring: {0}")]
    Wiring(#[from] WiringError),
    #[error("invalid notch letter: {0}")]
    Notch(#[from] LetterError),
}

/// A rotor: a fixed wiring turned to some offset, with a ring setting.
///
/// The wiring and notches never change after construction. `offset` is the
/// only state that moves during encoding, and only through [`Rotor::advance`].
/// Cloning a rotor gives an independent copy of that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Wiring,
    notches: NotchSet,
    offset: Letter,
    ring: Letter,
}

impl Rotor {
    /// Offset and ring both start at A.
    #[must_use]
    pub const fn new(wiring: Wiring, notches: NotchSet) -> Self {
        Self {
            wiring,
            notches,
            offset: Letter::A,
            ring: Letter::A,
        }
    }

    /// Build a rotor from a 26-letter wiring and its notch letters, e.g.
    /// `Rotor::parse("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q")`.
    pub fn parse(wiring: &str, notches: &str) -> Result<Self, RotorError> {
        Ok(Self::new(Wiring::parse(wiring)?, NotchSet::parse(notches)?))
    }

    #[must_use]
    pub fn with_offset(mut self, offset: Letter) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn with_ring(mut self, ring: Letter) -> Self {
        self.ring = ring;
        self
    }

    pub fn set_offset(&mut self, offset: Letter) {
        self.offset = offset;
    }

    /// Ring settings are part of setup and should not change mid-message.
    pub fn set_ring(&mut self, ring: Letter) {
        self.ring = ring;
    }

    #[must_use]
    pub const fn offset(&self) -> Letter {
        self.offset
    }

    #[must_use]
    pub const fn ring(&self) -> Letter {
        self.ring
    }

    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    #[must_use]
    pub const fn notches(&self) -> NotchSet {
        self.notches
    }

    /// Pass one letter through the rotor in the given direction.
    ///
    /// The contact hit is `letter - ring + offset`; the wiring (or its inverse)
    /// maps it to `n`, which leaves the rotor at `n + ring - offset`. Rotor
    /// state is not touched.
    #[must_use]
    pub fn step(&self, letter: Letter, direction: Direction) -> Letter {
        let shift = self.offset.as_i32() - self.ring.as_i32();
        let contact = letter.shift(shift);
        let wired = match direction {
            Direction::Forward => self.wiring.map(contact),
            Direction::Inverse => self.wiring.unmap(contact),
        };
        wired.shift(-shift)
    }

    #[must_use]
    pub fn forward(&self, letter: Letter) -> Letter {
        self.step(letter, Direction::Forward)
    }

    #[must_use]
    pub fn inverse(&self, letter: Letter) -> Letter {
        self.step(letter, Direction::Inverse)
    }

    /// Whether the letter in the window is a notch. The ring setting plays no
    /// part; the notch is cut into the alphabet ring along with the letters.
    #[must_use]
    pub const fn at_notch(&self) -> bool {
        self.notches.contains(self.offset)
    }

    /// Turn the rotor by one position (Z wraps to A).
    pub fn advance(&mut self) {
        self.offset = self.offset.next();
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} notches={} offset={} ring={}",
            self.wiring, self.notches, self.offset, self.ring
        )
    }
}
