//! Bus configuration.
//!
//! A [`BusConfig`] is consumed once by
//! [`MessageBus::from_config`](crate::bus::MessageBus::from_config). Both
//! settings are fixed for the lifetime of the bus.

use serde::{Deserialize, Serialize};

use crate::error::BusError;

/// When a sent message reaches its handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryMode {
    /// Handlers run inside `send`.
    #[default]
    Immediate,
    /// Messages wait in the pending queue until drained.
    Queued,
}

/// Construction settings for a [`MessageBus`](crate::bus::MessageBus).
///
/// The default (immediate delivery, quiet) is the configuration of the
/// process default bus.
///
/// ```
/// use courier::{BusConfig, DeliveryMode};
///
/// let config = BusConfig::from_json_str(r#"{ "delivery": "queued", "verbose": true }"#).unwrap();
/// assert_eq!(config.delivery, DeliveryMode::Queued);
/// assert!(config.verbose);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    pub delivery: DeliveryMode,
    pub verbose: bool,
}

impl BusConfig {
    pub fn new(immediate_delivery: bool, verbose: bool) -> Self {
        let delivery = if immediate_delivery {
            DeliveryMode::Immediate
        } else {
            DeliveryMode::Queued
        };
        Self { delivery, verbose }
    }

    /// Immediate delivery, not verbose.
    pub fn immediate() -> Self {
        Self::new(true, false)
    }

    /// Queued delivery, not verbose.
    pub fn queued() -> Self {
        Self::new(false, false)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn is_immediate(&self) -> bool {
        self.delivery == DeliveryMode::Immediate
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, BusError> {
        serde_json::from_str(text).map_err(|e| BusError::Config(e.to_string()))
    }
}
