use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::ContractName;
use crate::error::RegistryError;

/// Functional grouping of the deployed contracts
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractCategory {
    Token,
    Account,
    Marketplace,
    Dispute,
    Incentives,
}

impl ContractCategory {
    pub const ALL: [ContractCategory; 5] = [
        ContractCategory::Token,
        ContractCategory::Account,
        ContractCategory::Marketplace,
        ContractCategory::Dispute,
        ContractCategory::Incentives,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractCategory::Token => "token",
            ContractCategory::Account => "account",
            ContractCategory::Marketplace => "marketplace",
            ContractCategory::Dispute => "dispute",
            ContractCategory::Incentives => "incentives",
        }
    }

    /// Member contracts in declared order
    pub fn contracts(&self) -> &'static [ContractName] {
        match self {
            ContractCategory::Token => &[ContractName::NativeToken],
            ContractCategory::Account => &[
                ContractName::SmartAccount,
                ContractName::AccountFactory,
                ContractName::Paymaster,
            ],
            ContractCategory::Marketplace => &[
                ContractName::MarketplaceCore,
                ContractName::Escrow,
                ContractName::FeeManager,
            ],
            ContractCategory::Dispute => &[
                ContractName::DisputeResolution,
                ContractName::OracleRegistry,
            ],
            ContractCategory::Incentives => &[ContractName::ReferralSystem],
        }
    }
}

impl ContractName {
    /// Category the contract is listed under, if any
    pub fn category(&self) -> Option<ContractCategory> {
        ContractCategory::ALL
            .into_iter()
            .find(|category| category.contracts().contains(self))
    }
}

impl Display for ContractCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractCategory {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownCategory(s.to_string()))
    }
}
