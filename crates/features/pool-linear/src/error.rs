use alm_address::AddressError;
use std::borrow::Cow;

/// A specialized [`PoolLinearError`] enum of this crate.
#[alm_derive::alm_error]
pub enum PoolLinearError {
    /// The factory address could not be resolved from the registry.
    #[error("Linear pool factory lookup failed{}: {source}", format_context(.context))]
    Lookup { source: AddressError, context: Option<Cow<'static, str>> },

    /// A built-in constant failed to parse. Indicates a packaging defect.
    #[error("Linear pool configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal linear pool error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
