//! Answers returned by the ask endpoint.
//!
//! - [`reply::AskReply`] — the decoded wire body
//! - [`result::AnswerResult`] — what the user ends up seeing
//! - [`messages`] — fixed texts for guidance, loading and failures

pub mod messages;
pub mod reply;
pub mod result;
