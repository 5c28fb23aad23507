//! Answer view port
//!
//! Defines what the controller needs from a display surface.

/// A surface with one input field, one answer area and a loading indicator
///
/// Implementations live in the presentation layer (console, tests, ...).
/// Methods are synchronous and infallible: a view that cannot render
/// should degrade quietly rather than abort a round trip.
pub trait AnswerView: Send + Sync {
    /// Current raw text of the input field
    fn input(&self) -> String;

    /// Replace the input field text
    fn set_input(&self, text: &str);

    /// Replace the text shown in the answer area
    fn set_answer(&self, text: &str);

    /// Turn the loading indicator on or off
    fn set_loading(&self, loading: bool);
}
