use alloy::primitives::{keccak256, Selector};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use super::ContractName;
use crate::error::RegistryError;

/// Frequently used contract calls, keyed the way frontends refer to them
#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommonInteraction {
    MintTokens,
    CreateAccount,
    CreateOrder,
    CreateDispute,
    CreateReferralCode,
}

/// Call shape of an interaction. Descriptive; never invoked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InteractionSpec {
    pub contract: ContractName,
    pub method: &'static str,
    pub signature: &'static str,
    pub description: &'static str,
}

impl CommonInteraction {
    pub const ALL: [CommonInteraction; 5] = [
        CommonInteraction::MintTokens,
        CommonInteraction::CreateAccount,
        CommonInteraction::CreateOrder,
        CommonInteraction::CreateDispute,
        CommonInteraction::CreateReferralCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommonInteraction::MintTokens => "mintTokens",
            CommonInteraction::CreateAccount => "createAccount",
            CommonInteraction::CreateOrder => "createOrder",
            CommonInteraction::CreateDispute => "createDispute",
            CommonInteraction::CreateReferralCode => "createReferralCode",
        }
    }

    pub fn spec(&self) -> InteractionSpec {
        match self {
            CommonInteraction::MintTokens => InteractionSpec {
                contract: ContractName::NativeToken,
                method: "mint",
                signature: "mint(address,uint256)",
                description: "Mint tokens to a specific address",
            },
            CommonInteraction::CreateAccount => InteractionSpec {
                contract: ContractName::AccountFactory,
                method: "createAccount",
                signature: "createAccount(address,uint256)",
                description: "Create a new smart account",
            },
            CommonInteraction::CreateOrder => InteractionSpec {
                contract: ContractName::MarketplaceCore,
                method: "createOrder",
                // argument list was never pinned down for this entry
                signature: "createOrder(...)",
                description: "Create a new marketplace order",
            },
            CommonInteraction::CreateDispute => InteractionSpec {
                contract: ContractName::DisputeResolution,
                method: "createDispute",
                signature: "createDispute(uint256,string)",
                description: "Create a new dispute",
            },
            CommonInteraction::CreateReferralCode => InteractionSpec {
                contract: ContractName::ReferralSystem,
                method: "createReferralCode",
                signature: "createReferralCode(string)",
                description: "Create a new referral code",
            },
        }
    }
}

impl InteractionSpec {
    /// True when the signature is a canonical `method(type,...)` form
    pub fn has_concrete_signature(&self) -> bool {
        let Some(args) = self
            .signature
            .strip_prefix(self.method)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.strip_suffix(')'))
        else {
            return false;
        };
        !args.contains("...") && !args.contains(' ')
    }

    /// 4-byte function selector, or `None` for placeholder signatures
    pub fn selector(&self) -> Option<Selector> {
        if !self.has_concrete_signature() {
            return None;
        }
        let hash = keccak256(self.signature.as_bytes());
        Some(Selector::from_slice(&hash[..4]))
    }
}

/// Interactions that target the given contract
pub fn interactions_for(contract: ContractName) -> Vec<CommonInteraction> {
    CommonInteraction::ALL
        .into_iter()
        .filter(|interaction| interaction.spec().contract == contract)
        .collect()
}

impl Display for CommonInteraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommonInteraction {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommonInteraction::ALL
            .into_iter()
            .find(|interaction| interaction.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownInteraction(s.to_string()))
    }
}
