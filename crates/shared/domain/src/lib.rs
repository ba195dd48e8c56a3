//! # Domain Models
//!
//! Pure domain types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or chain access, just data and validation.

pub mod config;
pub mod names;
pub mod network;
pub mod slice;
