//! Koneque contracts deployed on Base Sepolia.
//!
//! Contract names form a closed set ([`ContractName`]), so the typed lookups
//! below are total. The `lookup_*` variants accept free-form names and fail
//! with [`RegistryError`] instead of returning a default.

pub mod categories;
pub mod interactions;
pub mod relationships;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::RegistryError;
use crate::network::{explorer_link, EXPLORER_URL};

pub use categories::ContractCategory;
pub use interactions::{CommonInteraction, InteractionSpec};
pub use relationships::{relationship, Relationship};

/// Every deployed Koneque contract
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContractName {
    // Token system
    NativeToken,

    // Account system
    SmartAccount,
    AccountFactory,
    Paymaster,

    // Marketplace system
    MarketplaceCore,
    Escrow,
    FeeManager,

    // Dispute system
    DisputeResolution,
    OracleRegistry,

    // Incentives system
    ReferralSystem,
}

impl ContractName {
    pub const COUNT: usize = 10;

    /// All contracts in declaration order
    pub const ALL: [ContractName; Self::COUNT] = [
        ContractName::NativeToken,
        ContractName::SmartAccount,
        ContractName::AccountFactory,
        ContractName::Paymaster,
        ContractName::MarketplaceCore,
        ContractName::Escrow,
        ContractName::FeeManager,
        ContractName::DisputeResolution,
        ContractName::OracleRegistry,
        ContractName::ReferralSystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractName::NativeToken => "NativeToken",
            ContractName::SmartAccount => "SmartAccount",
            ContractName::AccountFactory => "AccountFactory",
            ContractName::Paymaster => "Paymaster",
            ContractName::MarketplaceCore => "MarketplaceCore",
            ContractName::Escrow => "Escrow",
            ContractName::FeeManager => "FeeManager",
            ContractName::DisputeResolution => "DisputeResolution",
            ContractName::OracleRegistry => "OracleRegistry",
            ContractName::ReferralSystem => "ReferralSystem",
        }
    }

    /// Deployed address as recorded in the deployment
    pub fn address_str(&self) -> &'static str {
        get_contract_address(*self)
    }

    /// Deployed address parsed into an [`Address`]
    pub fn address(&self) -> Result<Address, RegistryError> {
        parse_address(self.as_str(), self.address_str())
    }
}

impl Display for ContractName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractName {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownContract(s.to_string()))
    }
}

/// Address of a deployed contract
pub fn get_contract_address(name: ContractName) -> &'static str {
    match name {
        ContractName::NativeToken => "0x3422820Ef9FBC8e0206E4CBcB6369dBd14BE18c4",
        ContractName::SmartAccount => "0x5B02258b1441F2850a45eb7949d83f6B103e731e",
        ContractName::AccountFactory => "0x5f7272c1532b6B05558757AAC74e4D21E58DECAe",
        ContractName::Paymaster => "0x5FCA60cbb22e38F8172ae6BA41FFCfad007a41BD",
        ContractName::MarketplaceCore => "0xbB4fE95d722457484Bc42453d5346a166C7bCAE9",
        ContractName::Escrow => "0xdE0E60DCaf3e8b36F3C92a9Ea6D97C0e9a3ca194",
        ContractName::FeeManager => "0x4EF6c34dEEae92d4a6314Ba0C0C76fBe1E8360D0",
        ContractName::DisputeResolution => "0x4A1E9765473e4E29EB77250360622c6251D2D4e1",
        ContractName::OracleRegistry => "0xA6680F13c455655C458807C96AEf1947E87572B2",
        ContractName::ReferralSystem => "0xB0EBE476289D5070E18Fb7e4C6F44Ce97Be30211",
    }
}

/// Block explorer page for a deployed contract
pub fn get_explorer_url(name: ContractName) -> String {
    explorer_link(EXPLORER_URL, "address", get_contract_address(name))
}

/// Addresses of the contracts in a category, in the category's declared order
pub fn get_contracts_by_category(category: ContractCategory) -> Vec<&'static str> {
    category
        .contracts()
        .iter()
        .map(|name| get_contract_address(*name))
        .collect()
}

/// Name → address pairs for every contract, in declaration order
pub fn contract_addresses() -> impl Iterator<Item = (ContractName, &'static str)> {
    ContractName::ALL
        .into_iter()
        .map(|name| (name, get_contract_address(name)))
}

pub fn lookup_contract_address(name: &str) -> Result<&'static str, RegistryError> {
    Ok(get_contract_address(name.parse()?))
}

pub fn lookup_explorer_url(name: &str) -> Result<String, RegistryError> {
    Ok(get_explorer_url(name.parse()?))
}

pub fn lookup_contracts_by_category(category: &str) -> Result<Vec<&'static str>, RegistryError> {
    Ok(get_contracts_by_category(category.parse()?))
}

/// `0x` followed by exactly 40 hex characters
pub fn is_address_format(value: &str) -> bool {
    match value.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Parse a recorded address, rejecting anything outside the `0x` + 40 hex format
pub(crate) fn parse_address(contract: &str, value: &str) -> Result<Address, RegistryError> {
    let invalid = || RegistryError::InvalidAddress {
        contract: contract.to_string(),
        address: value.to_string(),
    };
    if !is_address_format(value) {
        return Err(invalid());
    }
    Address::from_str(value).map_err(|_| invalid())
}
