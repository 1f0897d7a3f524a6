//! Resolved rotor and reflector selection.
//!
//! Raw TOML deserialization structs (with `Option` fields and plain strings)
//! stay private. They are resolved into the public types at the parse
//! boundary, so holding a `RotorConfig` proves its identifier exists in the
//! catalog and its ring setting is in range.
//!
//! ```toml
//! reflector = "B"
//!
//! [[rotors]]
//! id = "I"
//! start = "A"
//! ring = 1
//! ```
//!
//! Rotors are listed left to right. Stepping, plugboard and message handling
//! belong to whatever machine consumes the built components.

use enigma_core::{CatalogError, Reflector, ReflectorId, Rotor, RotorId};
use enigma_types::Letter;
use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse rotor config: {0}")]
    Toml(#[from] TomlError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("ring setting {0} is out of range (expected 1-26)")]
    RingOutOfRange(i64),
    #[error("at least one rotor must be configured")]
    NoRotors,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRotorConfig {
    id: String,
    #[serde(default)]
    start: Option<Letter>,
    #[serde(default)]
    ring: Option<i64>,
}

/// A catalog rotor with its starting window letter and ring setting.
///
/// Ring settings are numbered 1-26 as on the machine; 1 is no shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRotorConfig")]
pub struct RotorConfig {
    id: RotorId,
    start: Letter,
    ring: u8,
}

impl TryFrom<RawRotorConfig> for RotorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRotorConfig) -> Result<Self, Self::Error> {
        let id: RotorId = raw.id.parse()?;
        Self::new(id, raw.start.unwrap_or(Letter::A), raw.ring.unwrap_or(1))
    }
}

impl RotorConfig {
    pub const MIN_RING: i64 = 1;
    pub const MAX_RING: i64 = 26;

    /// `ring` is taken as `i64` because that is how TOML carries integers, so
    /// out-of-range values (0, negatives, > 26) reach the range check intact
    /// instead of being truncated first. Once validated it fits in a `u8`,
    /// which is what [`RotorConfig::ring`] returns.
    pub fn new(id: RotorId, start: Letter, ring: i64) -> Result<Self, ConfigError> {
        if !(Self::MIN_RING..=Self::MAX_RING).contains(&ring) {
            return Err(ConfigError::RingOutOfRange(ring));
        }
        Ok(Self {
            id,
            start,
            ring: ring as u8,
        })
    }

    #[must_use]
    pub const fn id(&self) -> RotorId {
        self.id
    }

    #[must_use]
    pub const fn start(&self) -> Letter {
        self.start
    }

    #[must_use]
    pub const fn ring(&self) -> u8 {
        self.ring
    }

    /// The ring setting as the rotor stores it (1 -> A, 26 -> Z).
    #[must_use]
    pub fn ring_letter(&self) -> Letter {
        Letter::A.shift(i32::from(self.ring) - 1)
    }

    /// A fresh rotor turned to `start` with the ring set.
    #[must_use]
    pub fn build(&self) -> Rotor {
        self.id
            .rotor()
            .with_offset(self.start)
            .with_ring(self.ring_letter())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawReflectorConfig {
    id: String,
}

/// A catalog reflector selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawReflectorConfig")]
pub struct ReflectorConfig {
    id: ReflectorId,
}

impl TryFrom<RawReflectorConfig> for ReflectorConfig {
    type Error = ConfigError;

    fn try_from(raw: RawReflectorConfig) -> Result<Self, Self::Error> {
        Ok(Self::new(raw.id.parse()?))
    }
}

impl ReflectorConfig {
    #[must_use]
    pub const fn new(id: ReflectorId) -> Self {
        Self { id }
    }

    #[must_use]
    pub const fn id(&self) -> ReflectorId {
        self.id
    }

    #[must_use]
    pub const fn build(&self) -> Reflector {
        self.id.reflector()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRotorSetConfig {
    reflector: String,
    #[serde(default)]
    rotors: Vec<RotorConfig>,
}

/// A reflector plus a non-empty, ordered list of rotors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRotorSetConfig")]
pub struct RotorSetConfig {
    reflector: ReflectorConfig,
    rotors: Vec<RotorConfig>,
}

impl TryFrom<RawRotorSetConfig> for RotorSetConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRotorSetConfig) -> Result<Self, Self::Error> {
        let reflector = ReflectorConfig::new(raw.reflector.parse()?);
        Self::new(reflector, raw.rotors)
    }
}

impl RotorSetConfig {
    pub fn new(reflector: ReflectorConfig, rotors: Vec<RotorConfig>) -> Result<Self, ConfigError> {
        if rotors.is_empty() {
            return Err(ConfigError::NoRotors);
        }
        Ok(Self { reflector, rotors })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(
            reflector = %config.reflector.id(),
            rotors = config.rotors.len(),
            "rotor set config resolved"
        );
        Ok(config)
    }

    #[must_use]
    pub const fn reflector(&self) -> ReflectorConfig {
        self.reflector
    }

    #[must_use]
    pub fn rotors(&self) -> &[RotorConfig] {
        &self.rotors
    }

    /// Fresh rotors (left to right) and the reflector, ready for a machine.
    #[must_use]
    pub fn build(&self) -> (Vec<Rotor>, Reflector) {
        let rotors = self.rotors.iter().map(RotorConfig::build).collect();
        (rotors, self.reflector.build())
    }
}
