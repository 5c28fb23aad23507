//! Presentation-independent UI state.

pub mod state;
