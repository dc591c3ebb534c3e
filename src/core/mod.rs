//! Core components of the `stocks-store` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`StocksClient`] and its builder.
//! - The primary [`StocksError`] type.
//! - The [`SeriesService`] seam between the store and its transport.

/// The HTTP client (`StocksClient`), builder, and defaults.
pub mod client;
/// The primary error type (`StocksError`) for the crate.
pub mod error;
/// Service trait abstracting the backend calls made by the store.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::StocksClient`
pub use client::{StocksClient, StocksClientBuilder};
pub use error::StocksError;
pub use services::{SeriesService, ServiceFuture};
