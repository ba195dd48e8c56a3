//! # Address Registry
//!
//! Maps symbolic contract names (`POOL_LINEAR_FACTORY`, ...) to deployed addresses,
//! per network. Consumers depend on the [`AddressRegistry`] trait so tests can swap
//! in their own tables; [`AddressBook`] is the in-memory implementation loaded from
//! the `[registry]` config section or a flat JSON record.
//!
//! A missing entry is always an error ([`AddressError::Lookup`]); the registry never
//! falls back to a default or zero address.

mod book;
mod error;
mod parse;

pub use crate::book::AddressBook;
pub use crate::error::{AddressError, AddressErrorExt};
pub use crate::parse::parse_address;
pub use alloy_primitives::Address;

use alm_domain::names::AddressName;
use alm_domain::network::Network;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

/// Read-only source of deployed contract addresses.
pub trait AddressRegistry: Debug + Send + Sync {
    /// Raw lookup by name; `None` when the network or the name is unknown.
    fn lookup(&self, network: &Network, name: &str) -> Option<Address>;

    /// Networks with at least one registered entry or explicit record.
    fn networks(&self) -> Vec<Network>;

    /// Resolves a well-known contract name.
    ///
    /// # Errors
    /// [`AddressError::Lookup`] if `name` has no entry for `network`.
    fn resolve(&self, network: &Network, name: AddressName) -> Result<Address, AddressError> {
        self.resolve_key(network, name.as_ref())
    }

    /// Resolves an arbitrary registry key (used by tooling that accepts free-form names).
    ///
    /// # Errors
    /// [`AddressError::Lookup`] if `name` has no entry for `network`.
    fn resolve_key(&self, network: &Network, name: &str) -> Result<Address, AddressError> {
        let resolved = self.lookup(network, name);
        debug!(%network, name, found = resolved.is_some(), "registry lookup");

        resolved.ok_or_else(|| AddressError::Lookup {
            name: name.to_owned().into(),
            network: network.to_string(),
            context: None,
        })
    }
}

impl<R: AddressRegistry + ?Sized> AddressRegistry for Arc<R> {
    fn lookup(&self, network: &Network, name: &str) -> Option<Address> {
        (**self).lookup(network, name)
    }

    fn networks(&self) -> Vec<Network> {
        (**self).networks()
    }
}

impl<R: AddressRegistry + ?Sized> AddressRegistry for &R {
    fn lookup(&self, network: &Network, name: &str) -> Option<Address> {
        (**self).lookup(network, name)
    }

    fn networks(&self) -> Vec<Network> {
        (**self).networks()
    }
}
