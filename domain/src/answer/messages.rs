//! Fixed user-facing messages
//!
//! These texts are shown verbatim in the answer area. Transport details
//! never reach the user; they only go to the log.

/// Shown when the user submits an empty or whitespace-only question.
pub const GUIDANCE_MESSAGE: &str = "Please share what troubles you, so that wisdom may guide you.";

/// Placeholder shown in the answer area while a request is in flight.
pub const LOADING_PLACEHOLDER: &str = "Contemplating wisdom...";

/// Shown when the endpoint replies with neither `answer` nor `error`.
pub const NO_WISDOM_MESSAGE: &str = "No wisdom received at this time.";

/// Shown when the request fails or the reply cannot be decoded.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
