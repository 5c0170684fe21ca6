use serde::Serialize;

use super::ContractName;

/// Declared dependencies of a contract.
///
/// Documentation only: nothing orders deployments or walks these edges, and
/// the table is cyclic (MarketplaceCore and Escrow depend on each other).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub dependencies: &'static [ContractName],
    pub description: &'static str,
}

const MARKETPLACE_CORE: Relationship = Relationship {
    dependencies: &[ContractName::Escrow, ContractName::FeeManager],
    description: "Core marketplace functionality with escrow and fee management",
};

const ESCROW: Relationship = Relationship {
    dependencies: &[ContractName::MarketplaceCore, ContractName::DisputeResolution],
    description: "Secure fund custody with dispute resolution integration",
};

const FEE_MANAGER: Relationship = Relationship {
    dependencies: &[ContractName::MarketplaceCore, ContractName::ReferralSystem],
    description: "Platform fee management with referral discounts",
};

const DISPUTE_RESOLUTION: Relationship = Relationship {
    dependencies: &[
        ContractName::OracleRegistry,
        ContractName::Escrow,
        ContractName::MarketplaceCore,
    ],
    description: "Dispute resolution with oracle integration",
};

const REFERRAL_SYSTEM: Relationship = Relationship {
    dependencies: &[ContractName::FeeManager, ContractName::MarketplaceCore],
    description: "Referral tracking and reward distribution",
};

/// Relationship entry for a contract; `None` for contracts without one
pub fn relationship(name: ContractName) -> Option<&'static Relationship> {
    match name {
        ContractName::MarketplaceCore => Some(&MARKETPLACE_CORE),
        ContractName::Escrow => Some(&ESCROW),
        ContractName::FeeManager => Some(&FEE_MANAGER),
        ContractName::DisputeResolution => Some(&DISPUTE_RESOLUTION),
        ContractName::ReferralSystem => Some(&REFERRAL_SYSTEM),
        ContractName::NativeToken
        | ContractName::SmartAccount
        | ContractName::AccountFactory
        | ContractName::Paymaster
        | ContractName::OracleRegistry => None,
    }
}

/// Every declared relationship, in contract declaration order
pub fn relationships() -> impl Iterator<Item = (ContractName, &'static Relationship)> {
    ContractName::ALL
        .into_iter()
        .filter_map(|name| relationship(name).map(|rel| (name, rel)))
}
