use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::contracts::ContractName;

/// Network fields a deployment file may replace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkOverride {
    pub name: Option<String>,
    pub chain_id: Option<u64>,
    pub rpc_url: Option<String>,
    pub explorer_url: Option<String>,
}

/// Provenance fields a deployment file may replace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentInfoOverride {
    pub date: Option<String>,
    pub block_range: Option<String>,
    pub total_cost: Option<String>,
    pub deployer: Option<String>,
    pub version: Option<String>,
}

/// Deployment file (YAML) replacing the built-in sample values
///
/// ```yaml
/// network:
///   explorer_url: "https://sepolia.basescan.org"
/// contracts:
///   NativeToken: "0x3422820Ef9FBC8e0206E4CBcB6369dBd14BE18c4"
/// deployment:
///   deployer: "0x1111111111111111111111111111111111111111"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeploymentOverride {
    #[serde(default)]
    pub network: NetworkOverride,
    // Keys must be known contract names
    #[serde(default)]
    pub contracts: BTreeMap<ContractName, String>,
    #[serde(default)]
    pub deployment: DeploymentInfoOverride,
}

impl DeploymentOverride {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse deployment file")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;
        let parsed = Self::from_yaml_str(&content)?;
        debug!(
            "Deployment file {} overrides {} contract address(es)",
            path.display(),
            parsed.contracts.len()
        );
        Ok(parsed)
    }
}

/// Application configuration from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub deployment_file: Option<PathBuf>,
    pub rpc_url: Option<String>,
    pub explorer_url: Option<String>,
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let deployment_file = optional_var("KONEQUE_DEPLOYMENT_FILE").map(PathBuf::from);
        if let Some(path) = &deployment_file {
            if !path.exists() {
                return Err(anyhow!(
                    "KONEQUE_DEPLOYMENT_FILE points to missing file {}",
                    path.display()
                ));
            }
            info!("📋 Using deployment file {}", path.display());
        }

        Ok(Self {
            deployment_file,
            rpc_url: optional_var("KONEQUE_RPC_URL"),
            explorer_url: optional_var("KONEQUE_EXPLORER_URL"),
        })
    }

    /// Combined overrides: deployment file first, then environment variables
    pub fn deployment_override(&self) -> Result<DeploymentOverride> {
        let mut overrides = match &self.deployment_file {
            Some(path) => DeploymentOverride::from_file(path)?,
            None => DeploymentOverride::default(),
        };

        if let Some(rpc_url) = &self.rpc_url {
            overrides.network.rpc_url = Some(rpc_url.clone());
        }
        if let Some(explorer_url) = &self.explorer_url {
            overrides.network.explorer_url = Some(explorer_url.clone());
        }

        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("KONEQUE_DEPLOYMENT_FILE");
        env::remove_var("KONEQUE_RPC_URL");
        env::remove_var("KONEQUE_EXPLORER_URL");
    }

    #[test]
    fn test_deployment_override_deserialization() {
        let yaml = r#"
network:
  chain_id: 84532
  explorer_url: "https://base-sepolia.blockscout.com"
contracts:
  NativeToken: "0x1111111111111111111111111111111111111111"
  Escrow: "0x2222222222222222222222222222222222222222"
deployment:
  deployer: "0x3333333333333333333333333333333333333333"
"#;

        let parsed = DeploymentOverride::from_yaml_str(yaml).unwrap();
        assert_eq!(parsed.network.chain_id, Some(84532));
        assert_eq!(parsed.network.rpc_url, None);
        assert_eq!(parsed.contracts.len(), 2);
        assert_eq!(
            parsed.contracts[&ContractName::Escrow],
            "0x2222222222222222222222222222222222222222"
        );
        assert_eq!(
            parsed.deployment.deployer.as_deref(),
            Some("0x3333333333333333333333333333333333333333")
        );
    }

    #[test]
    fn test_unknown_contract_in_deployment_file_is_rejected() {
        let yaml = r#"
contracts:
  Treasury: "0x1111111111111111111111111111111111111111"
"#;
        assert!(DeploymentOverride::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_empty_deployment_file() {
        let parsed = DeploymentOverride::from_yaml_str("{}").unwrap();
        assert_eq!(parsed, DeploymentOverride::default());
    }

    #[test]
    #[serial]
    fn test_config_from_env_without_overrides() {
        clear_env();

        let config = Config::from_env().unwrap();
        assert!(config.deployment_file.is_none());
        assert_eq!(config.deployment_override().unwrap(), DeploymentOverride::default());
    }

    #[test]
    #[serial]
    fn test_env_network_overrides() {
        clear_env();
        env::set_var("KONEQUE_RPC_URL", "http://localhost:8545");
        env::set_var("KONEQUE_EXPLORER_URL", "   ");

        let config = Config::from_env().unwrap();
        let overrides = config.deployment_override().unwrap();
        assert_eq!(overrides.network.rpc_url.as_deref(), Some("http://localhost:8545"));
        // blank values are ignored
        assert_eq!(overrides.network.explorer_url, None);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_deployment_file_is_an_error() {
        clear_env();
        env::set_var("KONEQUE_DEPLOYMENT_FILE", "/nonexistent/koneque-deployment.yaml");

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing file"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_deployment_file_then_env() {
        clear_env();
        let path = env::temp_dir().join("koneque-config-test-deployment.yaml");
        fs::write(
            &path,
            "network:\n  rpc_url: \"https://file.example\"\ncontracts:\n  Paymaster: \"0x4444444444444444444444444444444444444444\"\n",
        )
        .unwrap();
        env::set_var("KONEQUE_DEPLOYMENT_FILE", &path);
        env::set_var("KONEQUE_RPC_URL", "https://env.example");

        let overrides = Config::from_env().unwrap().deployment_override().unwrap();
        assert_eq!(overrides.network.rpc_url.as_deref(), Some("https://env.example"));
        assert_eq!(
            overrides.contracts[&ContractName::Paymaster],
            "0x4444444444444444444444444444444444444444"
        );

        clear_env();
        fs::remove_file(&path).ok();
    }
}
