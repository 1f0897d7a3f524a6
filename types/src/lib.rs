//! Core value types for the rotor cipher.
//!
//! This crate contains pure value types with no IO and minimal dependencies.
//! Everything here can be used from any layer: the rotor and reflector
//! mechanisms, the catalogs, and the configuration boundary.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics only happen in const catalog assertions

mod letter;
mod notch;
mod wiring;

pub use letter::{ALPHABET_LEN, Letter, LetterError};
pub use notch::NotchSet;
pub use wiring::{Wiring, WiringError};

use serde::{Deserialize, Serialize};

/// Which way a signal is travelling through a rotor.
///
/// `Forward` is the path from the keyboard toward the reflector. `Inverse`
/// is the return path, which uses the inverse permutation of the same wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}
