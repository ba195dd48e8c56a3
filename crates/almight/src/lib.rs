//! Facade crate for the Almight SDK features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `almight` with the desired feature flags (`pool-linear` is on by default).
//! - Load an [`AppConfig`](domain::config::AppConfig) and call [`init`] to build the
//!   registry and register feature slices; extend as new slices appear.

pub use alm_address as address;
pub use alm_domain as domain;
pub use alm_kernel as kernel;
#[cfg(feature = "pool-linear")]
pub use alm_pool_linear as pool_linear;

use alm_address::{AddressBook, AddressRegistry};
use alm_domain::config::AppConfig;
use alm_domain::network::Network;
use alm_domain::slice::{FeatureSlice, InitializedSlice};
use std::sync::Arc;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "address",
        #[cfg(feature = "pool-linear")]
        "pool-linear",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Everything [`init`] produced: the loaded registry, the active network and the
/// initialized feature slices.
#[derive(Debug)]
pub struct Platform {
    registry: Arc<AddressBook>,
    network: Network,
    slices: Vec<InitializedSlice>,
}

impl Platform {
    #[must_use]
    pub fn registry(&self) -> Arc<dyn AddressRegistry> {
        self.registry.clone()
    }

    /// The concrete registry, for listing entries and chain ids.
    #[must_use]
    pub fn address_book(&self) -> &AddressBook {
        &self.registry
    }

    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    #[must_use]
    pub fn slices(&self) -> &[InitializedSlice] {
        &self.slices
    }

    /// Borrow an initialized slice by type.
    #[must_use]
    pub fn slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
    }
}

/// Initialize all enabled features for the network selected in `config`.
///
/// # Errors
/// Returns an error if the registry section is invalid or any feature initialization
/// fails (e.g. the active network has no `POOL_LINEAR_FACTORY` entry).
pub fn init(
    config: &AppConfig,
) -> Result<Platform, Box<dyn std::error::Error + Send + Sync>> {
    let network = config.network.clone();
    let registry = Arc::new(AddressBook::from_config(&config.registry)?);

    if !registry.contains_network(&network) {
        tracing::warn!(%network, "Active network has no registry record");
    }

    #[allow(unused_mut)]
    let mut slices = Vec::new();

    // Linear pool constants
    #[cfg(feature = "pool-linear")]
    slices.push(pool_linear::init(registry.as_ref(), &network)?);

    tracing::info!(%network, slices = slices.len(), "Platform initialized");

    Ok(Platform { registry, network, slices })
}
