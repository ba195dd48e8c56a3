use alloy_primitives::AddressError as ParseAddressError;
use alm_domain::network::InvalidNetwork;
use std::borrow::Cow;

/// Error types of the address registry.
#[alm_derive::alm_error]
pub enum AddressError {
    /// The symbolic name has no entry for the requested network.
    #[error("Address lookup failed{}: '{name}' is not registered for network '{network}'", format_context(.context))]
    Lookup { name: Cow<'static, str>, network: String, context: Option<Cow<'static, str>> },

    /// Malformed hex, wrong length, or a failed EIP-55 checksum.
    #[error("Invalid address{}: {source}", format_context(.context))]
    InvalidAddress { source: ParseAddressError, context: Option<Cow<'static, str>> },

    /// `0x0000…0000` never names a deployed contract.
    #[error("Zero address is not allowed{}: {value}", format_context(.context))]
    ZeroAddress { value: String, context: Option<Cow<'static, str>> },

    #[error("Invalid network{}: {source}", format_context(.context))]
    InvalidNetwork { source: InvalidNetwork, context: Option<Cow<'static, str>> },

    /// The same name appears twice for one network with different addresses.
    #[error("Conflicting registry entry{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Registry record is not valid JSON{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registry error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
