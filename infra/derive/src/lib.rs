#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace crates.
//!
//! * [`macro@alm_error`] turns an enum into a `thiserror` error with context support.
//! * [`macro@alm_slice`] turns a struct into an `Arc`-backed feature slice handle.
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros
//! in doctests; see `tests/ui` for compiled usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source` field,
///   enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` implementations
///   if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a `source` field must also carry `context: Option<Cow<'static, str>>`.
/// 3. Two variants cannot wrap the same source type (the `From` impls would collide).
///
/// # Example
///
/// ```rust,ignore
/// use alm_derive::alm_error;
/// use std::borrow::Cow;
///
/// #[alm_error]
/// pub enum RegistryError {
///     #[error("Lookup failed{}: {name}", format_context(.context))]
///     Lookup { name: String, context: Option<Cow<'static, str>> },
///
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), RegistryError> {
///     read_settings().context("Loading registry section")?;
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn alm_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Generates `<Name>Inner` with the declared fields, an `Arc` wrapper named `<Name>`
/// with `Deref` to the inner state, and an `alm_domain::slice::FeatureSlice` impl so
/// the handle can be collected into an `InitializedSlice`.
///
/// # Example
/// ```rust,ignore
/// #[alm_derive::alm_slice]
/// pub struct PoolLinear {
///     pub constants: &'static PoolLinearConstants,
/// }
///
/// let slice = PoolLinear::new(PoolLinearInner { constants });
/// ```
#[proc_macro_attribute]
pub fn alm_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
