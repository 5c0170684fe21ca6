use koneque_contracts::config::DeploymentOverride;
use koneque_contracts::contracts::interactions::interactions_for;
use koneque_contracts::contracts::relationships::relationships;
use koneque_contracts::contracts::{
    contract_addresses, is_address_format, lookup_contract_address, lookup_contracts_by_category,
    lookup_explorer_url,
};
use koneque_contracts::network::EXPLORER_URL;
use koneque_contracts::{
    get_contract_address, get_contracts_by_category, get_explorer_url, CommonInteraction,
    ContractCategory, ContractName, Registry, RegistryError,
};

const NATIVE_TOKEN: &str = "0x3422820Ef9FBC8e0206E4CBcB6369dBd14BE18c4";

#[test]
fn test_native_token_lookups() {
    assert_eq!(get_contract_address(ContractName::NativeToken), NATIVE_TOKEN);
    assert_eq!(
        get_explorer_url(ContractName::NativeToken),
        "https://sepolia.basescan.org/address/0x3422820Ef9FBC8e0206E4CBcB6369dBd14BE18c4"
    );
    assert_eq!(lookup_contract_address("NativeToken").unwrap(), NATIVE_TOKEN);
}

#[test]
fn test_all_addresses_match_format() {
    let addresses: Vec<_> = contract_addresses().collect();
    assert_eq!(addresses.len(), ContractName::COUNT);
    for (name, address) in addresses {
        assert!(is_address_format(address), "{} -> {}", name, address);
        assert_eq!(
            get_explorer_url(name),
            format!("{}/address/{}", EXPLORER_URL, address)
        );
    }
}

#[test]
fn test_categories_preserve_declared_order() {
    for category in ContractCategory::ALL {
        let expected: Vec<&str> = category
            .contracts()
            .iter()
            .map(|name| get_contract_address(*name))
            .collect();
        assert_eq!(get_contracts_by_category(category), expected);
        assert_eq!(
            lookup_contracts_by_category(category.as_str()).unwrap(),
            expected
        );
    }

    assert_eq!(
        get_contracts_by_category(ContractCategory::Account),
        vec![
            get_contract_address(ContractName::SmartAccount),
            get_contract_address(ContractName::AccountFactory),
            get_contract_address(ContractName::Paymaster),
        ]
    );
}

#[test]
fn test_referential_integrity() {
    for category in ContractCategory::ALL {
        for name in category.contracts() {
            assert!(ContractName::ALL.contains(name));
        }
    }
    for (_, relationship) in relationships() {
        for dependency in relationship.dependencies {
            assert!(ContractName::ALL.contains(dependency));
        }
    }
    for interaction in CommonInteraction::ALL {
        let target = interaction.spec().contract;
        assert!(interactions_for(target).contains(&interaction));
    }
}

#[test]
fn test_unknown_keys_fail() {
    let err = lookup_contract_address("Governor").unwrap_err();
    assert!(err.is_unknown_key());
    assert_eq!(err, RegistryError::UnknownContract("Governor".to_string()));

    assert!(matches!(
        lookup_explorer_url("Governor"),
        Err(RegistryError::UnknownContract(_))
    ));
    assert!(matches!(
        lookup_contracts_by_category("staking"),
        Err(RegistryError::UnknownCategory(_))
    ));
}

#[test]
fn test_registry_from_deployment_file() {
    let yaml = r#"
network:
  explorer_url: "https://base-sepolia.blockscout.com"
contracts:
  ReferralSystem: "0x5555555555555555555555555555555555555555"
deployment:
  deployer: "0x6666666666666666666666666666666666666666"
"#;
    let overrides = DeploymentOverride::from_yaml_str(yaml).unwrap();
    let registry = Registry::with_overrides(&overrides).unwrap();

    assert_eq!(
        registry.contracts_by_category(ContractCategory::Incentives),
        vec!["0x5555555555555555555555555555555555555555"]
    );
    assert_eq!(
        registry.explorer_url(ContractName::NativeToken),
        format!("https://base-sepolia.blockscout.com/address/{}", NATIVE_TOKEN)
    );
    assert!(registry.deployment().is_finalized());
}

#[test]
fn test_manifest_lists_every_contract() {
    let registry = Registry::builtin();
    let manifest = registry.manifest();
    assert_eq!(manifest.contracts.len(), ContractName::COUNT);
    assert_eq!(manifest.categories.len(), ContractCategory::ALL.len());
    assert_eq!(manifest.relationships.len(), 5);
    assert_eq!(manifest.interactions.len(), CommonInteraction::ALL.len());
}
