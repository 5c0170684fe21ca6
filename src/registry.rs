use alloy::primitives::Address;
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

use crate::config::{Config, DeploymentOverride};
use crate::contracts::relationships::relationships;
use crate::contracts::{
    get_contract_address, is_address_format, parse_address, CommonInteraction, ContractCategory,
    ContractName, InteractionSpec, Relationship,
};
use crate::deployment::DeploymentInfo;
use crate::error::RegistryError;
use crate::network::{parse_explorer_base, parse_http_url, NetworkConfig};

/// Contract registry for one deployment
///
/// Starts from the built-in Base Sepolia deployment; a deployment file or
/// environment variables may replace addresses and network endpoints.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    network: NetworkConfig,
    addresses: [String; ContractName::COUNT], // indexed by ContractName discriminant
    deployment: DeploymentInfo,
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Registry {
    /// Registry with the recorded Base Sepolia deployment
    pub fn builtin() -> Self {
        Self {
            network: NetworkConfig::base_sepolia(),
            addresses: ContractName::ALL.map(|name| get_contract_address(name).to_string()),
            deployment: DeploymentInfo::default(),
        }
    }

    /// Built-in registry with deployment overrides applied, then validated
    pub fn with_overrides(overrides: &DeploymentOverride) -> Result<Self, RegistryError> {
        let mut registry = Self::builtin();

        let network = &overrides.network;
        if let Some(name) = &network.name {
            registry.network.name = name.clone();
        }
        if let Some(chain_id) = network.chain_id {
            registry.network.chain_id = chain_id;
        }
        if let Some(rpc_url) = &network.rpc_url {
            registry.network.rpc_url = rpc_url.clone();
        }
        if let Some(explorer_url) = &network.explorer_url {
            registry.network.explorer_url = explorer_url.clone();
        }

        for (name, address) in &overrides.contracts {
            registry.addresses[*name as usize] = address.trim().to_string();
        }

        let deployment = &overrides.deployment;
        let info = &mut registry.deployment;
        for (field, value) in [
            (&mut info.date, &deployment.date),
            (&mut info.block_range, &deployment.block_range),
            (&mut info.total_cost, &deployment.total_cost),
            (&mut info.deployer, &deployment.deployer),
            (&mut info.version, &deployment.version),
        ] {
            if let Some(value) = value {
                *field = value.clone();
            }
        }

        registry.validate()?;
        Ok(registry)
    }

    /// Build the registry described by the configuration
    pub fn load(config: &Config) -> Result<Self> {
        let overrides = config.deployment_override()?;
        let registry =
            Self::with_overrides(&overrides).context("Deployment configuration is invalid")?;
        info!(
            "✅ Registry loaded for {} (chain_id: {}) with {} contracts",
            registry.network.name,
            registry.network.chain_id,
            ContractName::COUNT
        );
        Ok(registry)
    }

    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    pub fn deployment(&self) -> &DeploymentInfo {
        &self.deployment
    }

    pub fn contract_address(&self, name: ContractName) -> &str {
        &self.addresses[name as usize]
    }

    pub fn address(&self, name: ContractName) -> Result<Address, RegistryError> {
        parse_address(name.as_str(), self.contract_address(name))
    }

    pub fn explorer_url(&self, name: ContractName) -> String {
        self.network.address_url(self.contract_address(name))
    }

    pub fn contracts_by_category(&self, category: ContractCategory) -> Vec<&str> {
        category
            .contracts()
            .iter()
            .map(|name| self.contract_address(*name))
            .collect()
    }

    /// Check the registry's tables for consistency.
    ///
    /// Hard failures are collected into [`RegistryError::Validation`];
    /// checksum casing, shared addresses and an unset deployer only warn.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut issues = Vec::new();

        if self.network.chain_id == 0 {
            issues.push("chain id must be non-zero".to_string());
        }
        if let Err(issue) = parse_http_url(&self.network.rpc_url) {
            issues.push(format!("rpc url: {}", issue));
        }
        if let Err(issue) = parse_explorer_base(&self.network.explorer_url) {
            issues.push(format!("explorer url: {}", issue));
        }

        let mut seen: HashMap<String, ContractName> = HashMap::new();
        for name in ContractName::ALL {
            let address = self.contract_address(name);
            if !is_address_format(address) {
                issues.push(format!("{} has malformed address {}", name, address));
                continue;
            }
            if Address::parse_checksummed(address, None).is_err() {
                warn!("⚠️  {} address {} is not EIP-55 checksummed", name, address);
            }
            if let Some(other) = seen.insert(address.to_lowercase(), name) {
                warn!("⚠️  {} and {} share address {}", other, name, address);
            }

            let listed = ContractCategory::ALL
                .iter()
                .filter(|category| category.contracts().contains(&name))
                .count();
            if listed != 1 {
                issues.push(format!("{} is listed in {} categories", name, listed));
            }
        }

        // addresses are indexed by discriminant
        for (index, name) in ContractName::ALL.iter().enumerate() {
            if *name as usize != index {
                issues.push(format!("{} is out of place in the contract table", name));
            }
        }

        if !self.deployment.is_finalized() {
            warn!(
                "⚠️  Deployer is not recorded ({}); addresses are sample data",
                self.deployment.deployer
            );
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::Validation(issues))
        }
    }

    /// Serializable snapshot of everything the registry knows
    pub fn manifest(&self) -> Manifest<'_> {
        Manifest {
            network: &self.network,
            contracts: ContractName::ALL
                .into_iter()
                .map(|name| (name, self.contract_address(name)))
                .collect(),
            explorer_urls: ContractName::ALL
                .into_iter()
                .map(|name| (name, self.explorer_url(name)))
                .collect(),
            categories: ContractCategory::ALL
                .into_iter()
                .map(|category| (category, category.contracts()))
                .collect(),
            relationships: relationships().collect(),
            interactions: CommonInteraction::ALL
                .into_iter()
                .map(|interaction| (interaction, InteractionEntry::from(interaction.spec())))
                .collect(),
            deployment: &self.deployment,
        }
    }
}

/// Interaction as exported, with its selector when known
#[derive(Debug, Clone, Serialize)]
pub struct InteractionEntry {
    #[serde(flatten)]
    pub spec: InteractionSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl From<InteractionSpec> for InteractionEntry {
    fn from(spec: InteractionSpec) -> Self {
        Self {
            selector: spec.selector().map(|selector| selector.to_string()),
            spec,
        }
    }
}

/// JSON export of a registry for frontends
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest<'a> {
    pub network: &'a NetworkConfig,
    pub contracts: BTreeMap<ContractName, &'a str>,
    pub explorer_urls: BTreeMap<ContractName, String>,
    pub categories: BTreeMap<ContractCategory, &'static [ContractName]>,
    pub relationships: BTreeMap<ContractName, &'static Relationship>,
    pub interactions: BTreeMap<CommonInteraction, InteractionEntry>,
    pub deployment: &'a DeploymentInfo,
}
