//! Configuration for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Day/month ordering applied when a date's year position leaves the other
/// two components ambiguous.
///
/// `03/10/2024` reads as 3 October under [`DateOrder::DayFirst`] and as
/// March 10 under [`DateOrder::MonthFirst`]. Year-first dates are never
/// ambiguous and ignore this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// Day before month (most non-US layouts).
    #[default]
    DayFirst,
    /// Month before day (US layouts).
    MonthFirst,
}

/// Extraction pipeline configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Date disambiguation order.
    pub date_order: DateOrder,
}

impl ExtractorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Write configuration to a JSON file.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_day_first() {
        assert_eq!(ExtractorConfig::default().date_order, DateOrder::DayFirst);
    }

    #[test]
    fn round_trips_through_json() {
        let config = ExtractorConfig {
            date_order: DateOrder::MonthFirst,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("month_first"));

        let back: ExtractorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.date_order, DateOrder::MonthFirst);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: ExtractorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.date_order, DateOrder::DayFirst);
    }
}
