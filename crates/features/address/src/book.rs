use crate::AddressRegistry;
use crate::error::{AddressError, AddressErrorExt};
use crate::parse::parse_address;
use alloy_primitives::Address;
use alm_domain::config::RegistryConfig;
use alm_domain::network::Network;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use tracing::debug;

/// Entries registered for one network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NetworkEntries {
    chain_id: Option<u64>,
    addresses: BTreeMap<String, Address>,
}

/// In-memory [`AddressRegistry`] keyed by network, then by symbolic name.
///
/// Names are case-insensitive and stored upper-case (`POOL_LINEAR_FACTORY`), so keys
/// coming from environment overrides (which arrive lower-cased) match file keys.
///
/// ```rust
/// use alm_address::{AddressBook, AddressRegistry};
/// use alm_domain::names::AddressName;
/// use alm_domain::network::Network;
///
/// let local = Network::new("local")?;
/// let book = AddressBook::from_json(
///     &local,
///     r#"{ "POOL_LINEAR_FACTORY": "0x5FbDB2315678afecb367f032d93F642f64180aa3" }"#,
/// )?;
///
/// let factory = book.resolve(&local, AddressName::PoolLinearFactory)?;
/// assert_eq!(factory.to_string(), "0x5FbDB2315678afecb367f032d93F642f64180aa3");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    networks: BTreeMap<Network, NetworkEntries>,
}

impl AddressBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from the `[registry]` config section, validating every entry.
    ///
    /// # Errors
    /// Fails on the first invalid network key, malformed or zero address, or on two
    /// spellings of one name that point at different addresses.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, AddressError> {
        let mut book = Self::new();

        for (key, record) in &config.networks {
            let network = Network::new(key).context(format!("registry network '{key}'"))?;
            book.networks.entry(network.clone()).or_default();

            for (name, raw) in &record.addresses {
                let address =
                    parse_address(raw).context(format!("registry entry {network}/{name}"))?;
                book.insert(&network, name, address)?;
            }

            if let Some(chain_id) = record.chain_id {
                book.set_chain_id(&network, chain_id);
            }
        }

        debug!(networks = book.networks.len(), "address book loaded from config");
        Ok(book)
    }

    /// Builds a single-network book from a flat JSON record
    /// (`{ "POOL_LINEAR_FACTORY": "0x…" }`).
    ///
    /// # Errors
    /// [`AddressError::Json`] if the record is not an object of strings, plus the
    /// validation errors of [`AddressBook::from_config`].
    pub fn from_json(network: &Network, json: &str) -> Result<Self, AddressError> {
        let record: BTreeMap<String, String> =
            serde_json::from_str(json).context(format!("record for network '{network}'"))?;

        let mut book = Self::new();
        book.networks.entry(network.clone()).or_default();
        for (name, raw) in &record {
            let address =
                parse_address(raw).context(format!("registry entry {network}/{name}"))?;
            book.insert(network, name, address)?;
        }
        Ok(book)
    }

    /// Registers `address` under `name` for `network`.
    ///
    /// Re-inserting the same address is a no-op.
    ///
    /// # Errors
    /// [`AddressError::Conflict`] if the name is already bound to a different address.
    pub fn insert(
        &mut self,
        network: &Network,
        name: &str,
        address: Address,
    ) -> Result<(), AddressError> {
        let key = normalize_name(name);
        let entries = self.networks.entry(network.clone()).or_default();

        match entries.addresses.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(address);
                Ok(())
            },
            Entry::Occupied(slot) if *slot.get() == address => Ok(()),
            Entry::Occupied(slot) => Err(AddressError::Conflict {
                message: format!(
                    "{} on '{network}' is bound to {} and {address}",
                    slot.key(),
                    slot.get()
                )
                .into(),
                context: None,
            }),
        }
    }

    /// Builder-style [`AddressBook::insert`].
    ///
    /// # Errors
    /// See [`AddressBook::insert`].
    pub fn with(
        mut self,
        network: &Network,
        name: &str,
        address: Address,
    ) -> Result<Self, AddressError> {
        self.insert(network, name, address)?;
        Ok(self)
    }

    pub fn set_chain_id(&mut self, network: &Network, chain_id: u64) {
        self.networks.entry(network.clone()).or_default().chain_id = Some(chain_id);
    }

    #[must_use]
    pub fn chain_id(&self, network: &Network) -> Option<u64> {
        self.networks.get(network).and_then(|entries| entries.chain_id)
    }

    /// All entries of `network`, sorted by name.
    #[must_use]
    pub fn entries(&self, network: &Network) -> Vec<(&str, Address)> {
        self.networks.get(network).map_or_else(Vec::new, |entries| {
            entries.addresses.iter().map(|(name, address)| (name.as_str(), *address)).collect()
        })
    }

    #[must_use]
    pub fn contains_network(&self, network: &Network) -> bool {
        self.networks.contains_key(network)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.networks.values().all(|entries| entries.addresses.is_empty())
    }
}

impl AddressRegistry for AddressBook {
    fn lookup(&self, network: &Network, name: &str) -> Option<Address> {
        self.networks.get(network)?.addresses.get(&normalize_name(name)).copied()
    }

    fn networks(&self) -> Vec<Network> {
        self.networks.keys().cloned().collect()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use alm_domain::config::NetworkRecord;
    use alm_domain::names::AddressName;

    const FACTORY: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");
    const OTHER: Address = address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512");

    fn local() -> Network {
        Network::new("local").unwrap()
    }

    #[test]
    fn names_are_case_insensitive() {
        let book = AddressBook::new().with(&local(), "pool_linear_factory", FACTORY).unwrap();

        assert_eq!(book.lookup(&local(), "POOL_LINEAR_FACTORY"), Some(FACTORY));
        assert_eq!(book.lookup(&local(), "Pool_Linear_Factory"), Some(FACTORY));
        assert_eq!(book.entries(&local()), vec![("POOL_LINEAR_FACTORY", FACTORY)]);
    }

    #[test]
    fn conflicting_insert_is_rejected_and_identical_one_is_not() {
        let mut book = AddressBook::new();
        book.insert(&local(), "POOL_LINEAR_FACTORY", FACTORY).unwrap();
        book.insert(&local(), "pool_linear_factory", FACTORY).unwrap();

        let err = book.insert(&local(), "POOL_LINEAR_FACTORY", OTHER).unwrap_err();
        assert!(matches!(err, AddressError::Conflict { .. }));
        assert_eq!(book.lookup(&local(), "POOL_LINEAR_FACTORY"), Some(FACTORY));
    }

    #[test]
    fn lookups_are_scoped_per_network() {
        let sepolia = Network::new("sepolia").unwrap();
        let book = AddressBook::new()
            .with(&local(), "POOL_LINEAR_FACTORY", FACTORY)
            .and_then(|b| b.with(&sepolia, "POOL_LINEAR_FACTORY", OTHER))
            .unwrap();

        assert_eq!(book.resolve(&local(), AddressName::PoolLinearFactory).unwrap(), FACTORY);
        assert_eq!(book.resolve(&sepolia, AddressName::PoolLinearFactory).unwrap(), OTHER);
        assert_eq!(book.networks(), vec![local(), sepolia]);
    }

    #[test]
    fn from_config_validates_entries_and_keeps_chain_ids() {
        let mut config = RegistryConfig::default();
        config.networks.insert(
            "Local".to_owned(),
            NetworkRecord {
                chain_id: Some(31337),
                addresses: [(
                    "POOL_LINEAR_FACTORY".to_owned(),
                    "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned(),
                )]
                .into(),
            },
        );

        let book = AddressBook::from_config(&config).unwrap();
        assert_eq!(book.chain_id(&local()), Some(31337));
        assert_eq!(book.lookup(&local(), "POOL_LINEAR_FACTORY"), Some(FACTORY));
    }

    #[test]
    fn from_config_reports_the_offending_entry() {
        let mut config = RegistryConfig::default();
        config.networks.insert(
            "local".to_owned(),
            NetworkRecord {
                chain_id: None,
                addresses: [("POOL_LINEAR_FACTORY".to_owned(), "0xnope".to_owned())].into(),
            },
        );

        let err = AddressBook::from_config(&config).unwrap_err();
        assert!(matches!(err, AddressError::InvalidAddress { .. }));
        assert!(err.to_string().contains("registry entry local/POOL_LINEAR_FACTORY"), "got: {err}");
    }

    #[test]
    fn from_json_rejects_non_string_values() {
        let err =
            AddressBook::from_json(&local(), r#"{ "POOL_LINEAR_FACTORY": 42 }"#).unwrap_err();
        assert!(matches!(err, AddressError::Json { .. }));
    }

    #[test]
    fn empty_json_record_registers_the_network() {
        let book = AddressBook::from_json(&local(), "{}").unwrap();
        assert!(book.contains_network(&local()));
        assert!(book.is_empty());
    }
}
