// Library exports for downstream frontends and tooling

pub mod config;
pub mod contracts;
pub mod deployment;
pub mod error;
pub mod network;
pub mod registry;

pub use contracts::{
    get_contract_address, get_contracts_by_category, get_explorer_url, CommonInteraction,
    ContractCategory, ContractName,
};
pub use error::RegistryError;
pub use registry::Registry;
