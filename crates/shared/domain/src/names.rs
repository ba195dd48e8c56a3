//! Symbolic names of deployed contracts, as used by address registries.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Well-known contract names resolvable through an address registry.
///
/// Names render and parse in `SCREAMING_SNAKE_CASE` (`POOL_LINEAR_FACTORY`),
/// matching the keys used in registry files. Parsing is case-insensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[non_exhaustive]
pub enum AddressName {
    /// Factory deploying linear pools.
    PoolLinearFactory,
}
