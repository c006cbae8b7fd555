//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod error_message;
pub mod header;
pub mod loading;
pub mod stat_card;

pub use error_message::ErrorMessage;
pub use header::Header;
pub use loading::LoadingSpinner;
pub use stat_card::{StatCard, Trend};
