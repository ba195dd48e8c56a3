//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered configuration loading and domain re-exports.
//!
//! ## Config loading
//! ```rust,no_run
//! use alm_kernel::config::load_config;
//! use alm_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("almight")).unwrap_or_default();
//! println!("active network: {}", cfg.network);
//! ```

pub mod config;

pub use alm_domain as domain;
