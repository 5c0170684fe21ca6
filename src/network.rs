use alloy::primitives::{ChainId, TxHash};
use serde::{Deserialize, Serialize};
use url::Url;

// Base Sepolia
pub const NETWORK_NAME: &str = "Base Sepolia";
pub const CHAIN_ID: ChainId = 84532;
pub const RPC_URL: &str = "https://sepolia.base.org";
pub const EXPLORER_URL: &str = "https://sepolia.basescan.org";

/// Native currency of a network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl Currency {
    pub fn ether() -> Self {
        Self {
            name: "ETH".to_string(),
            symbol: "ETH".to_string(),
            decimals: 18,
        }
    }
}

/// Network the contracts are deployed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: ChainId,
    pub rpc_url: String,
    pub explorer_url: String,
    pub currency: Currency,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::base_sepolia()
    }
}

impl NetworkConfig {
    pub fn base_sepolia() -> Self {
        Self {
            name: NETWORK_NAME.to_string(),
            chain_id: CHAIN_ID,
            rpc_url: RPC_URL.to_string(),
            explorer_url: EXPLORER_URL.to_string(),
            currency: Currency::ether(),
        }
    }

    /// Explorer page for an account or contract
    pub fn address_url(&self, address: &str) -> String {
        explorer_link(&self.explorer_url, "address", address)
    }

    /// Explorer page for a transaction
    pub fn tx_url(&self, hash: &TxHash) -> String {
        explorer_link(&self.explorer_url, "tx", &hash.to_string())
    }

    /// Explorer page for a block
    pub fn block_url(&self, number: u64) -> String {
        explorer_link(&self.explorer_url, "block", &number.to_string())
    }
}

/// Join an explorer base URL and a resource path.
/// Overridden base URLs may carry a trailing slash.
pub(crate) fn explorer_link(base: &str, kind: &str, id: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), kind, id)
}

/// Parse an http(s) endpoint with a non-empty host
pub(crate) fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw).map_err(|e| format!("{} is not a valid url: {}", raw, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("{} is not an http(s) url", raw));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("{} has no host", raw));
    }
    Ok(url)
}

/// Explorer base URLs get resource paths appended, so they carry no query or fragment
pub(crate) fn parse_explorer_base(raw: &str) -> Result<Url, String> {
    let url = parse_http_url(raw)?;
    if url.query().is_some() || url.fragment().is_some() {
        return Err(format!("{} must not have a query or fragment", raw));
    }
    Ok(url)
}
