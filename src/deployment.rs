use alloy::primitives::Address;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::contracts::is_address_format;

/// Placeholder left in the deployment record until the deployer is filled in
pub const DEPLOYER_PLACEHOLDER: &str = "YOUR_DEPLOYER_ADDRESS";

/// Provenance of the recorded deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentInfo {
    pub date: String,
    pub block_range: String, // "<first>-<last>"
    pub total_cost: String,
    pub deployer: String,
    pub version: String,
}

impl Default for DeploymentInfo {
    fn default() -> Self {
        Self {
            date: "2025-08-31".to_string(),
            block_range: "30431731-30431732".to_string(),
            total_cost: "0.000015154486445882 ETH".to_string(),
            deployer: DEPLOYER_PLACEHOLDER.to_string(),
            version: "1.0.0".to_string(),
        }
    }
}

impl DeploymentInfo {
    pub fn date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .context(format!("Invalid deployment date {}", self.date))
    }

    /// Blocks the deployment transactions landed in
    pub fn blocks(&self) -> Result<RangeInclusive<u64>> {
        let (first, last) = self
            .block_range
            .split_once('-')
            .ok_or_else(|| anyhow!("Invalid block range {}", self.block_range))?;
        let first: u64 = first.trim().parse().context("Invalid first block")?;
        let last: u64 = last.trim().parse().context("Invalid last block")?;
        if first > last {
            return Err(anyhow!("Block range {} is reversed", self.block_range));
        }
        Ok(first..=last)
    }

    /// Deployer account, once a real address has been recorded
    pub fn deployer_address(&self) -> Option<Address> {
        if !is_address_format(&self.deployer) {
            return None;
        }
        self.deployer.parse().ok()
    }

    pub fn is_finalized(&self) -> bool {
        self.deployer_address().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deployment() {
        let info = DeploymentInfo::default();
        assert_eq!(info.date().unwrap(), NaiveDate::from_ymd_opt(2025, 8, 31).unwrap());
        assert_eq!(info.blocks().unwrap(), 30431731..=30431732);
        assert_eq!(info.total_cost, "0.000015154486445882 ETH");
        assert_eq!(info.version, "1.0.0");
    }

    #[test]
    fn test_placeholder_deployer_is_not_finalized() {
        let info = DeploymentInfo::default();
        assert_eq!(info.deployer, DEPLOYER_PLACEHOLDER);
        assert_eq!(info.deployer_address(), None);
        assert!(!info.is_finalized());
    }

    #[test]
    fn test_recorded_deployer() {
        let info = DeploymentInfo {
            deployer: "0x1111111111111111111111111111111111111111".to_string(),
            ..Default::default()
        };
        assert_eq!(info.deployer_address(), Some(Address::repeat_byte(0x11)));
        assert!(info.is_finalized());
    }

    #[test]
    fn test_invalid_block_ranges() {
        let reversed = DeploymentInfo {
            block_range: "20-10".to_string(),
            ..Default::default()
        };
        assert!(reversed.blocks().is_err());

        let garbage = DeploymentInfo {
            block_range: "latest".to_string(),
            ..Default::default()
        };
        assert!(garbage.blocks().is_err());
    }
}
