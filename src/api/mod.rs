//! Remote Store API
//!
//! Client for the hosted wind-data store.

pub mod client;

pub use client::{ApiError, StoreClient, FALLBACK_ERROR_MESSAGE};
