//! Historical rotor and reflector catalogs.
//!
//! Wirings and notches match the machines that used them. `Beta` and `Gamma`
//! are the thin fourth-position rotors of the naval M4 and have no notch; pair
//! them with the `B-Thin` and `C-Thin` reflectors.
//!
//! The registries are process-wide and read-only. Every lookup hands out a
//! fresh instance, so rotating one session's rotor never affects another.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use enigma_types::{NotchSet, Wiring};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reflector::Reflector;
use crate::rotor::Rotor;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown rotor '{0}' (expected one of I-VIII, Beta, Gamma)")]
    UnknownRotor(String),
    #[error("unknown reflector '{0}' (expected one of A, B, C, B-Thin, C-Thin)")]
    UnknownReflector(String),
}

/// Identifier of a catalog rotor.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
    Beta,
    Gamma,
}

impl RotorId {
    pub const ALL: [RotorId; 10] = [
        RotorId::I,
        RotorId::II,
        RotorId::III,
        RotorId::IV,
        RotorId::V,
        RotorId::VI,
        RotorId::VII,
        RotorId::VIII,
        RotorId::Beta,
        RotorId::Gamma,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RotorId::I => "I",
            RotorId::II => "II",
            RotorId::III => "III",
            RotorId::IV => "IV",
            RotorId::V => "V",
            RotorId::VI => "VI",
            RotorId::VII => "VII",
            RotorId::VIII => "VIII",
            RotorId::Beta => "Beta",
            RotorId::Gamma => "Gamma",
        }
    }

    /// A fresh catalog rotor at offset A, ring A.
    #[must_use]
    pub const fn rotor(self) -> Rotor {
        let (_, wiring, notches) = ROTOR_TABLE[self as usize];
        Rotor::new(wiring, notches)
    }
}

impl fmt::Display for RotorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RotorId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownRotor(s.to_string()))
    }
}

/// Identifier of a catalog reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectorId {
    A,
    B,
    C,
    #[serde(rename = "B-Thin")]
    BThin,
    #[serde(rename = "C-Thin")]
    CThin,
}

impl ReflectorId {
    pub const ALL: [ReflectorId; 5] = [
        ReflectorId::A,
        ReflectorId::B,
        ReflectorId::C,
        ReflectorId::BThin,
        ReflectorId::CThin,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ReflectorId::A => "A",
            ReflectorId::B => "B",
            ReflectorId::C => "C",
            ReflectorId::BThin => "B-Thin",
            ReflectorId::CThin => "C-Thin",
        }
    }

    #[must_use]
    pub const fn reflector(self) -> Reflector {
        REFLECTOR_TABLE[self as usize].1
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReflectorId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownReflector(s.to_string()))
    }
}

// Tables are indexed by enum discriminant; order must follow `ALL`.
const ROTOR_TABLE: [(RotorId, Wiring, NotchSet); 10] = [
    (
        RotorId::I,
        Wiring::from_static("EKMFLGDQVZNTOWYHXUSPAIBRCJ"),
        NotchSet::from_static("Q"),
    ),
    (
        RotorId::II,
        Wiring::from_static("AJDKSIRUXBLHWTMCQGZNPYFVOE"),
        NotchSet::from_static("E"),
    ),
    (
        RotorId::III,
        Wiring::from_static("BDFHJLCPRTXVZNYEIWGAKMUSQO"),
        NotchSet::from_static("V"),
    ),
    (
        RotorId::IV,
        Wiring::from_static("ESOVPZJAYQUIRHXLNFTGKDCMWB"),
        NotchSet::from_static("J"),
    ),
    (
        RotorId::V,
        Wiring::from_static("VZBRGITYUPSDNHLXAWMJQOFECK"),
        NotchSet::from_static("Z"),
    ),
    (
        RotorId::VI,
        Wiring::from_static("JPGVOUMFYQBENHZRDKASXLICTW"),
        NotchSet::from_static("ZM"),
    ),
    (
        RotorId::VII,
        Wiring::from_static("NZJHGRCXMYSWBOUFAIVLPEKQDT"),
        NotchSet::from_static("ZM"),
    ),
    (
        RotorId::VIII,
        Wiring::from_static("FKQHTLXOCBJSPDZRAMEWNIUYGV"),
        NotchSet::from_static("ZM"),
    ),
    (
        RotorId::Beta,
        Wiring::from_static("LEYJVCNIXWPBQMDRTAKZGFUHOS"),
        NotchSet::EMPTY,
    ),
    (
        RotorId::Gamma,
        Wiring::from_static("FSOKANUERHMBTIYCWLQPZXVGJD"),
        NotchSet::EMPTY,
    ),
];

const REFLECTOR_TABLE: [(ReflectorId, Reflector); 5] = [
    (
        ReflectorId::A,
        Reflector::from_static("EJMZALYXVBWFCRQUONTSPIKHGD"),
    ),
    (
        ReflectorId::B,
        Reflector::from_static("YRUHQSLDPXNGOKMIEBFZCWVJAT"),
    ),
    (
        ReflectorId::C,
        Reflector::from_static("FVPJIAOYEDRZXWGCTKUQSBNMHL"),
    ),
    (
        ReflectorId::BThin,
        Reflector::from_static("ENKQAUYWJICOPBLMDXZVFTHRGS"),
    ),
    (
        ReflectorId::CThin,
        Reflector::from_static("RDOBJNTKVEHMLFCWZAXGYIPSUQ"),
    ),
];

static ROTORS: LazyLock<HashMap<&'static str, Rotor>> = LazyLock::new(|| {
    let rotors: HashMap<_, _> = RotorId::ALL
        .into_iter()
        .map(|id| (id.as_str(), id.rotor()))
        .collect();
    tracing::trace!(count = rotors.len(), "rotor catalog initialized");
    rotors
});

static REFLECTORS: LazyLock<HashMap<&'static str, Reflector>> = LazyLock::new(|| {
    let reflectors: HashMap<_, _> = ReflectorId::ALL
        .into_iter()
        .map(|id| (id.as_str(), id.reflector()))
        .collect();
    tracing::trace!(count = reflectors.len(), "reflector catalog initialized");
    reflectors
});

/// Look up a rotor by historical identifier. Returns an independent copy.
#[must_use]
pub fn rotor(name: &str) -> Option<Rotor> {
    let found = ROTORS.get(name).cloned();
    if found.is_none() {
        tracing::debug!(name, "rotor not found in catalog");
    }
    found
}

/// Look up a reflector by historical identifier.
#[must_use]
pub fn reflector(name: &str) -> Option<Reflector> {
    let found = REFLECTORS.get(name).copied();
    if found.is_none() {
        tracing::debug!(name, "reflector not found in catalog");
    }
    found
}

/// Identifiers of every catalog rotor, in catalog order.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    RotorId::ALL.into_iter().map(RotorId::as_str)
}

/// Identifiers of every catalog reflector, in catalog order.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    ReflectorId::ALL.into_iter().map(ReflectorId::as_str)
}
