//! Generation configuration.
//!
//! Parameters that control the grid and the fault process. Both types
//! deserialize from TOML; any missing key takes its default.

use std::path::Path;

use relief_math::DomainBounds;
use relief_types::constants::{
    DEFAULT_DIVISIONS, DEFAULT_FALLOFF_EXPONENT, DEFAULT_FAULT_ITERATIONS, DEFAULT_INITIAL_DELTA,
    DEFAULT_SEED,
};
use relief_types::{ReliefError, ReliefResult};
use serde::{Deserialize, Serialize};

/// Fault process parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaultConfig {
    /// Number of faults applied.
    pub iterations: u32,

    /// Height step of the first fault.
    pub initial_delta: f32,

    /// Decay exponent `H`: after every fault the step is divided by `2^H`.
    pub falloff_exponent: f32,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_FAULT_ITERATIONS,
            initial_delta: DEFAULT_INITIAL_DELTA,
            falloff_exponent: DEFAULT_FALLOFF_EXPONENT,
        }
    }
}

impl FaultConfig {
    /// No faults at all: the grid stays flat.
    pub fn flat() -> Self {
        Self {
            iterations: 0,
            ..Default::default()
        }
    }

    /// Checks that the step is finite and never grows in magnitude.
    ///
    /// A negative `initial_delta` is allowed and mirrors the terrain.
    pub fn validate(&self) -> ReliefResult<()> {
        if !self.initial_delta.is_finite() {
            return Err(ReliefError::InvalidConfig(format!(
                "initial_delta must be finite, got {}",
                self.initial_delta
            )));
        }
        if !self.falloff_exponent.is_finite() || self.falloff_exponent < 0.0 {
            return Err(ReliefError::InvalidConfig(format!(
                "falloff_exponent must be finite and >= 0, got {}",
                self.falloff_exponent
            )));
        }
        Ok(())
    }
}

/// Everything needed to build a terrain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Cells per side of the grid.
    pub divisions: u32,

    /// Seed for the fault sequence.
    pub seed: u64,

    /// Domain rectangle.
    pub bounds: DomainBounds,

    /// Fault process parameters.
    pub fault: FaultConfig,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            divisions: DEFAULT_DIVISIONS,
            seed: DEFAULT_SEED,
            bounds: DomainBounds::default(),
            fault: FaultConfig::default(),
        }
    }
}

impl TerrainConfig {
    /// Config with default fault parameters.
    pub fn new(divisions: u32, bounds: DomainBounds, seed: u64) -> Self {
        Self {
            divisions,
            seed,
            bounds,
            fault: FaultConfig::default(),
        }
    }

    /// Replaces the fault parameters.
    pub fn with_fault(mut self, fault: FaultConfig) -> Self {
        self.fault = fault;
        self
    }

    /// Validates the grid domain, then the fault parameters.
    pub fn validate(&self) -> ReliefResult<()> {
        if self.divisions < 1 {
            return Err(ReliefError::InvalidDomain(format!(
                "divisions must be >= 1, got {}",
                self.divisions
            )));
        }
        self.bounds.validate()?;
        self.fault.validate()
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(text: &str) -> ReliefResult<Self> {
        toml::from_str(text).map_err(|e| ReliefError::Serialization(e.to_string()))
    }

    /// Reads and parses a TOML config file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ReliefResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Serializes to TOML text.
    pub fn to_toml_string(&self) -> ReliefResult<String> {
        toml::to_string(self).map_err(|e| ReliefError::Serialization(e.to_string()))
    }
}
