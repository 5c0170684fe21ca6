use thiserror::Error;

/// Errors raised by registry lookups and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown contract: {0}")]
    UnknownContract(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown interaction: {0}")]
    UnknownInteraction(String),

    #[error("Invalid address for {contract}: {address}")]
    InvalidAddress { contract: String, address: String },

    #[error("Registry validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl RegistryError {
    /// True for the lookup failures (name outside the closed set)
    pub fn is_unknown_key(&self) -> bool {
        matches!(
            self,
            RegistryError::UnknownContract(_)
                | RegistryError::UnknownCategory(_)
                | RegistryError::UnknownInteraction(_)
        )
    }
}
