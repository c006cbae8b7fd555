//! Vento Dashboard
//!
//! Wind-statistics dashboard for Barranquilla built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Wind observations live in a hosted Postgres store exposed over
//! REST; this client only reads aggregates from it and never writes rows.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod model;
pub mod pages;
