//! HTTP adapters.

pub mod gateway;

pub use gateway::{DEFAULT_ENDPOINT, HttpAskGateway};
