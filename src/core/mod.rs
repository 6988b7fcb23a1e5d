//! Core components of `finbot-media`.
//!
//! This module contains the foundational building blocks of the crate:
//! - The shared [`FbClient`] and its builder.
//! - The primary [`FinbotError`] type.
//! - Internal networking helpers.

/// The HTTP client (`FbClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`FinbotError`) for the crate.
pub mod error;

pub(crate) mod net;

pub use client::{FbClient, FbClientBuilder};
pub use error::FinbotError;
