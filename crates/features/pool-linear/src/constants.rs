//! Linear pool constants and their process-wide installation.

use crate::error::{PoolLinearError, PoolLinearErrorExt};
use alloy_primitives::{Address, U256};
use alm_address::AddressRegistry;
use alm_domain::names::AddressName;
use alm_domain::network::Network;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Registry key of the linear pool factory contract.
pub const FACTORY_ADDRESS_NAME: AddressName = AddressName::PoolLinearFactory;

/// Minimum liquidity of a linear pool, in base units.
pub const MINIMUM_LIQUIDITY_LITERAL: &str = "1000";

static INSTALLED: OnceLock<PoolLinearConstants> = OnceLock::new();

/// Resolves the linear pool factory address for `network`.
///
/// # Errors
/// [`PoolLinearError::Lookup`] if the registry has no factory entry for `network`.
pub fn resolve_factory_address(
    registry: &dyn AddressRegistry,
    network: &Network,
) -> Result<Address, PoolLinearError> {
    registry
        .resolve(network, FACTORY_ADDRESS_NAME)
        .context(format!("resolving {FACTORY_ADDRESS_NAME} on '{network}'"))
}

/// Minimum liquidity as a 256-bit integer.
///
/// # Errors
/// [`PoolLinearError::Configuration`] if [`MINIMUM_LIQUIDITY_LITERAL`] does not parse.
pub fn minimum_liquidity() -> Result<U256, PoolLinearError> {
    parse_base_units(MINIMUM_LIQUIDITY_LITERAL).context("minimum liquidity")
}

/// Parses a non-negative base-10 amount of base units.
///
/// # Errors
/// [`PoolLinearError::Configuration`] for empty input, signs, non-digits, or values
/// above `2^256 - 1`.
pub fn parse_base_units(literal: &str) -> Result<U256, PoolLinearError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PoolLinearError::Configuration {
            message: format!("'{literal}' is not a base-10 integer").into(),
            context: None,
        });
    }

    U256::from_str_radix(literal, 10).map_err(|e| PoolLinearError::Configuration {
        message: format!("'{literal}' does not fit in 256 bits: {e}").into(),
        context: None,
    })
}

/// The constants a linear pool client needs, resolved for one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolLinearConstants {
    network: Network,
    #[serde(serialize_with = "checksummed")]
    factory_address: Address,
    #[serde(serialize_with = "decimal")]
    minimum_liquidity: U256,
}

impl PoolLinearConstants {
    /// Resolves both constants for `network`.
    ///
    /// # Errors
    /// [`PoolLinearError::Lookup`] for a missing factory entry,
    /// [`PoolLinearError::Configuration`] if the built-in liquidity literal is broken.
    pub fn resolve(
        registry: &dyn AddressRegistry,
        network: &Network,
    ) -> Result<Self, PoolLinearError> {
        let minimum_liquidity = minimum_liquidity()?;
        let factory_address = resolve_factory_address(registry, network)?;

        debug!(%network, %factory_address, %minimum_liquidity, "linear pool constants resolved");

        Ok(Self { network: network.clone(), factory_address, minimum_liquidity })
    }

    #[must_use]
    pub const fn network(&self) -> &Network {
        &self.network
    }

    #[must_use]
    pub const fn factory_address(&self) -> Address {
        self.factory_address
    }

    #[must_use]
    pub const fn minimum_liquidity(&self) -> U256 {
        self.minimum_liquidity
    }
}

/// Resolves the constants once and installs them for the rest of the process.
///
/// Later calls for the same network return the installed values without touching
/// the registry again.
///
/// # Errors
/// Everything [`PoolLinearConstants::resolve`] returns, and
/// [`PoolLinearError::Configuration`] when the constants are already installed for a
/// different network.
pub fn init(
    registry: &dyn AddressRegistry,
    network: &Network,
) -> Result<&'static PoolLinearConstants, PoolLinearError> {
    let installed = match INSTALLED.get() {
        Some(installed) => installed,
        None => {
            let resolved = PoolLinearConstants::resolve(registry, network)?;
            let (installed, won) = install_once(&INSTALLED, resolved);
            if won {
                info!(
                    network = %installed.network,
                    factory_address = %installed.factory_address,
                    "linear pool constants installed"
                );
            }
            installed
        },
    };

    if installed.network != *network {
        return Err(PoolLinearError::Configuration {
            message: format!(
                "constants already installed for network '{}', requested '{network}'",
                installed.network
            )
            .into(),
            context: None,
        });
    }

    Ok(installed)
}

/// The installed constants, if [`init`] has succeeded.
#[must_use]
pub fn get() -> Option<&'static PoolLinearConstants> {
    INSTALLED.get()
}

/// Stores `value` unless another caller got there first; `true` when this value was stored.
fn install_once<T>(cell: &OnceLock<T>, value: T) -> (&T, bool) {
    let mut stored = false;
    let installed = cell.get_or_init(|| {
        stored = true;
        value
    });
    (installed, stored)
}

fn checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_checksum(None))
}

fn decimal<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
