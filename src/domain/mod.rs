//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, errors, state machine)
//! - `navigation` - Screens, user tracks, and the screen router
//! - `assessment` - PCOS risk questionnaire, scoring, and the quiz attempt
//! - `app_state` - The application store and the slices it holds
//! - `analysis` - Report types, upload gate, and the analyzer screen flow
//! - `guidance` - Diet and exercise wizards

pub mod analysis;
pub mod app_state;
pub mod assessment;
pub mod foundation;
pub mod guidance;
pub mod navigation;
