//! PCOSync - PCOS Health-Education Companion
//!
//! This crate holds the client-side core of the PCOSync application (state
//! store, screen router, risk assessment, guidance flows) and the HTTP
//! service that fronts the report analysis backend.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
