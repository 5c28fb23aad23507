//! Use cases (application services)
//!
//! Use cases orchestrate domain logic and coordinate with ports.

pub mod ask_controller;
pub mod save_response;
