//! Channel map configuration.
//!
//! Maps canonical sensor-channel keys (e.g. `corrente_a`, `tensao_a`) to the
//! literal column headers found in logger exports. The map is immutable after
//! construction and passed by reference into every analysis component, so the
//! core carries no process-wide mutable state.

use crate::constants::channels;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable mapping from canonical channel key to literal source column name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMap {
    map: BTreeMap<String, String>,
}

impl Default for ChannelMap {
    /// Default table for the standard logger export layout
    fn default() -> Self {
        let entries = [
            (channels::TIMESTAMP, "Data/Hora"),
            (channels::VOLTAGE_A, "AVRMS"),
            (channels::VOLTAGE_B, "BVRMS"),
            (channels::VOLTAGE_C, "CVRMS"),
            (channels::CURRENT_A, "AIRMS"),
            (channels::CURRENT_B, "BIRMS"),
            (channels::CURRENT_C, "CIRMS"),
            (channels::POWER_FACTOR_A, "AFP"),
            (channels::POWER_FACTOR_B, "BFP"),
            (channels::POWER_FACTOR_C, "CFP"),
            (channels::LEVEL, "Nivel"),
            (channels::SPEED, "Velocidade"),
            (channels::FLOW, "Vazao"),
        ];

        Self {
            map: entries
                .iter()
                .map(|(key, column)| (key.to_string(), column.to_string()))
                .collect(),
        }
    }
}

impl ChannelMap {
    /// Build a channel map from explicit entries
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self> {
        let map = Self { map: entries };
        map.validate()?;
        Ok(map)
    }

    /// Load a channel map from a JSON object file (`{"canonical": "column"}`)
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read mapping file {}", path.display()), e))?;
        Self::from_json_str(&content)
    }

    /// Parse a channel map from a JSON object string
    pub fn from_json_str(content: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_json::from_str(content)
            .map_err(|e| Error::configuration(format!("invalid channel mapping JSON: {}", e)))?;
        Self::new(entries)
    }

    /// Literal column name for a canonical channel key, if mapped
    pub fn column(&self, channel: &str) -> Option<&str> {
        self.map.get(channel).map(String::as_str)
    }

    /// Literal column name for a canonical channel key, or a missing-column
    /// error carrying the channel name
    pub fn required_column(&self, channel: &str) -> Result<&str> {
        self.column(channel)
            .ok_or_else(|| Error::missing_column(channel, format!("<unmapped:{}>", channel)))
    }

    /// The literal timestamp column name
    pub fn timestamp_column(&self) -> Result<&str> {
        self.required_column(channels::TIMESTAMP)
    }

    /// Iterate over (canonical key, literal column) pairs
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn validate(&self) -> Result<()> {
        if !self.map.contains_key(channels::TIMESTAMP) {
            return Err(Error::configuration(
                "channel mapping must define a 'timestamp' entry",
            ));
        }
        if !self.map.contains_key(channels::CURRENT_A) {
            return Err(Error::configuration(
                "channel mapping must define a 'corrente_a' entry",
            ));
        }
        if let Some((key, _)) = self.map.iter().find(|(k, v)| k.is_empty() || v.is_empty()) {
            return Err(Error::configuration(format!(
                "channel mapping contains an empty key or column (near '{}')",
                key
            )));
        }
        Ok(())
    }
}
