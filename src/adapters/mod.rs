//! Adapters - Implementations of ports for external systems.
//!
//! - `analysis` - report analyzers (mock, remote)
//! - `http` - axum routers and handlers

pub mod analysis;
pub mod http;
