//! The reflector.

use enigma_types::{Letter, Wiring, WiringError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReflectorError {
    #[error("invalid reflector wiring: {0}")]
    Wiring(#[from] WiringError),
    #[error("reflector wires {0} to itself")]
    FixedPoint(Letter),
    #[error("reflector is not symmetric: {letter} -> {image} -> {back}")]
    NotInvolution {
        letter: Letter,
        image: Letter,
        back: Letter,
    },
}

/// A fixed, symmetric substitution that turns the signal back through the
/// rotors. Reflecting twice always returns the original letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    pub fn new(wiring: Wiring) -> Result<Self, ReflectorError> {
        if let Some(err) = Self::check(&wiring) {
            return Err(err);
        }
        Ok(Self { wiring })
    }

    pub fn parse(wiring: &str) -> Result<Self, ReflectorError> {
        Self::new(Wiring::parse(wiring)?)
    }

    /// Compile-time checked reflector for static tables.
    #[must_use]
    pub const fn from_static(sequence: &'static str) -> Self {
        let wiring = Wiring::from_static(sequence);
        if Self::check(&wiring).is_some() {
            panic!("static reflector wiring must pair every letter with another");
        }
        Self { wiring }
    }

    const fn check(wiring: &Wiring) -> Option<ReflectorError> {
        let mut i = 0;
        while i < Letter::ALL.len() {
            let letter = Letter::ALL[i];
            let image = wiring.map(letter);
            if image.index() == letter.index() {
                return Some(ReflectorError::FixedPoint(letter));
            }
            let back = wiring.map(image);
            if back.index() != letter.index() {
                return Some(ReflectorError::NotInvolution {
                    letter,
                    image,
                    back,
                });
            }
            i += 1;
        }
        None
    }

    #[must_use]
    pub const fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.map(letter)
    }

    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
