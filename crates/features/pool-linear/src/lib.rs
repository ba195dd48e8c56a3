//! # Linear Pool
//!
//! Constants a linear pool client needs before talking to the chain:
//!
//! * the **factory address**, resolved by name (`POOL_LINEAR_FACTORY`) from an
//!   [`AddressRegistry`] for the active network;
//! * the **minimum liquidity**, a fixed 1000 base units held as a `U256`.
//!
//! Both are resolved once ([`constants::init`]) and then shared read-only for the
//! rest of the process. A missing registry entry is a [`PoolLinearError::Lookup`];
//! there is no fallback address.

pub mod constants;
mod error;

pub use crate::constants::{
    FACTORY_ADDRESS_NAME, MINIMUM_LIQUIDITY_LITERAL, PoolLinearConstants, minimum_liquidity,
    resolve_factory_address,
};
pub use crate::error::{PoolLinearError, PoolLinearErrorExt};

use alm_address::AddressRegistry;
use alm_domain::network::Network;
use alm_domain::slice::InitializedSlice;

/// Linear pool feature state
#[alm_derive::alm_slice]
pub struct PoolLinear {
    pub constants: &'static PoolLinearConstants,
}

/// Initialize the linear pool feature slice for `network`.
///
/// # Errors
/// See [`constants::init`].
pub fn init(
    registry: &dyn AddressRegistry,
    network: &Network,
) -> Result<InitializedSlice, PoolLinearError> {
    let constants = constants::init(registry, network)?;

    tracing::info!(
        %network,
        factory_address = %constants.factory_address(),
        minimum_liquidity = %constants.minimum_liquidity(),
        "Linear pool slice initialized"
    );

    Ok(InitializedSlice::new(PoolLinear::new(PoolLinearInner { constants })))
}
