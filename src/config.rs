//! Ranking configuration
//!
//! Policy knobs for the store layer. The engine's named operations always use
//! the default step; the store passes `step` through the `_with_step` forms.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::rank::DEFAULT_RANK_STEP;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankConfig {
    /// Gap between consecutive ranks after a rebalance, and the first rank
    pub step: f64,
    /// Rebalance a group as soon as a write leaves it with a collision
    pub auto_rebalance: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_RANK_STEP,
            auto_rebalance: true,
        }
    }
}

impl RankConfig {
    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: RankConfig = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("rank config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "rank step must be a positive number, got {}",
                self.step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankConfig::default();
        assert_eq!(config.step, 100.0);
        assert!(config.auto_rebalance);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = RankConfig::from_json(r#"{"autoRebalance": false}"#).unwrap();
        assert_eq!(config.step, 100.0);
        assert!(!config.auto_rebalance);

        let config = RankConfig::from_json(r#"{"step": 1024}"#).unwrap();
        assert_eq!(config.step, 1024.0);
    }

    #[test]
    fn test_from_json_rejects_bad_step() {
        let err = RankConfig::from_json(r#"{"step": 0}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        let err = RankConfig::from_json(r#"{"step": -3.5}"#).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));

        assert!(RankConfig::from_json("not json").is_err());
    }
}
