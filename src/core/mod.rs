//! Core components of the `newsfeed-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`NewsClient`] and its builder.
//! - The primary [`NewsError`] type.
//! - Internal networking helpers.

/// The client (`NewsClient`), builder, and timeout configuration.
pub mod client;
/// The primary error type (`NewsError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::NewsError;
