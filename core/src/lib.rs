//! Rotor cipher mechanisms.
//!
//! This crate models the two signal-path components of an Enigma-style
//! machine and the historical catalogs used to instantiate them:
//!
//! - **`Rotor`**: position- and ring-dependent substitution in either
//!   direction, plus the notch query a stepping driver consults
//! - **`Reflector`**: fixed involutive substitution
//! - **`catalog`**: read-only registries of historical wirings, keyed by
//!   identifier (`"I"`, `"Beta"`, `"B-Thin"`, ...)
//!
//! Chaining rotors into a machine, stepping them per keystroke and any
//! plugboard are left to the caller.

pub mod catalog;
mod reflector;
mod rotor;

pub use catalog::{CatalogError, ReflectorId, RotorId};
pub use enigma_types::{Direction, Letter, LetterError, NotchSet, Wiring, WiringError};
pub use reflector::{Reflector, ReflectorError};
pub use rotor::{Rotor, RotorError};
