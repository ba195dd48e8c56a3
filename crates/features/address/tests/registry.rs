use alm_address::{Address, AddressBook, AddressError, AddressRegistry, parse_address};
use alm_domain::names::AddressName;
use alm_domain::network::Network;
use std::collections::HashMap;
use std::sync::Arc;

const FACTORY_HEX: &str = "0xABCDEF0123456789ABCDEF0123456789ABCD1234";

/// Single-network table standing in for an externally maintained registry.
#[derive(Debug, Default)]
struct StaticTable(HashMap<&'static str, Address>);

impl AddressRegistry for StaticTable {
    fn lookup(&self, _network: &Network, name: &str) -> Option<Address> {
        self.0.get(name).copied()
    }

    fn networks(&self) -> Vec<Network> {
        vec![Network::default()]
    }
}

fn local() -> Network {
    Network::default()
}

#[test]
fn registry_entry_resolves_to_its_address() {
    let book = AddressBook::from_json(
        &local(),
        &format!(r#"{{ "POOL_LINEAR_FACTORY": "{FACTORY_HEX}" }}"#),
    )
    .unwrap();

    let resolved = book.resolve(&local(), AddressName::PoolLinearFactory).unwrap();
    assert_eq!(resolved, parse_address(FACTORY_HEX).unwrap());
    assert_eq!(resolved.to_checksum(None).to_lowercase(), FACTORY_HEX.to_lowercase());
}

#[test]
fn missing_entry_is_a_lookup_error_not_a_zero_address() {
    let book = AddressBook::from_json(&local(), "{}").unwrap();

    let err = book.resolve(&local(), AddressName::PoolLinearFactory).unwrap_err();
    match err {
        AddressError::Lookup { name, network, .. } => {
            assert_eq!(name, "POOL_LINEAR_FACTORY");
            assert_eq!(network, "local");
        },
        other => panic!("expected lookup error, got {other:?}"),
    }
}

#[test]
fn unknown_network_is_a_lookup_error() {
    let book = AddressBook::from_json(
        &local(),
        &format!(r#"{{ "POOL_LINEAR_FACTORY": "{FACTORY_HEX}" }}"#),
    )
    .unwrap();
    let mainnet = Network::new("mainnet").unwrap();

    let err = book.resolve(&mainnet, AddressName::PoolLinearFactory).unwrap_err();
    assert!(err.to_string().contains("not registered for network 'mainnet'"), "got: {err}");
}

#[test]
fn resolution_is_idempotent() {
    let book = AddressBook::from_json(
        &local(),
        &format!(r#"{{ "POOL_LINEAR_FACTORY": "{FACTORY_HEX}" }}"#),
    )
    .unwrap();

    let first = book.resolve(&local(), AddressName::PoolLinearFactory).unwrap();
    for _ in 0..10 {
        assert_eq!(book.resolve(&local(), AddressName::PoolLinearFactory).unwrap(), first);
    }
}

#[test]
fn custom_registries_plug_in_through_the_trait() {
    let address = parse_address(FACTORY_HEX).unwrap();
    let table = StaticTable([("POOL_LINEAR_FACTORY", address)].into());

    let shared: Arc<dyn AddressRegistry> = Arc::new(table);
    assert_eq!(shared.resolve(&local(), AddressName::PoolLinearFactory).unwrap(), address);
    assert!(matches!(
        shared.resolve_key(&local(), "POOL_WEIGHTED_FACTORY"),
        Err(AddressError::Lookup { .. })
    ));
}
