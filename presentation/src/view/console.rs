//! Console implementation of the answer view port

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::LoadingIndicator;
use std::sync::{Mutex, PoisonError};
use stoic_application::AnswerView;

/// Terminal display surface
///
/// The input field is an in-memory buffer filled by the REPL or the
/// command line. While loading, answer text goes to the spinner message;
/// otherwise non-empty answers are printed as a panel on stdout (unless
/// echo is off, as for `--output json`).
pub struct ConsoleView {
    input: Mutex<String>,
    answer: Mutex<String>,
    indicator: LoadingIndicator,
    echo: bool,
}

impl ConsoleView {
    pub fn new(show_progress: bool, echo: bool) -> Self {
        Self {
            input: Mutex::new(String::new()),
            answer: Mutex::new(String::new()),
            indicator: LoadingIndicator::new(show_progress),
            echo,
        }
    }

    /// Text currently in the answer area
    pub fn answer(&self) -> String {
        self.answer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.indicator.is_active()
    }
}

impl AnswerView for ConsoleView {
    fn input(&self) -> String {
        self.input
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_input(&self, text: &str) {
        *self.input.lock().unwrap_or_else(PoisonError::into_inner) = text.to_string();
    }

    fn set_answer(&self, text: &str) {
        *self.answer.lock().unwrap_or_else(PoisonError::into_inner) = text.to_string();

        if self.indicator.is_active() {
            self.indicator.set_message(text);
        } else if self.echo && !text.is_empty() {
            println!("{}", ConsoleFormatter::format_panel(text));
        }
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            let message = self.answer();
            self.indicator.start(&message);
        } else {
            self.indicator.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Arc;
    use stoic_application::{AskController, AskGateway, GatewayError};
    use stoic_domain::{AskReply, GUIDANCE_MESSAGE, Question};

    struct FixedGateway(Result<AskReply, ()>);

    #[async_trait]
    impl AskGateway for FixedGateway {
        async fn ask(&self, _question: &Question) -> Result<AskReply, GatewayError> {
            self.0
                .clone()
                .map_err(|_| GatewayError::Connection("refused".to_string()))
        }

        fn endpoint(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_input_buffer() {
        let view = ConsoleView::new(false, false);
        assert_eq!(view.input(), "");
        view.set_input("What is fate?");
        assert_eq!(view.input(), "What is fate?");
    }

    #[test]
    fn test_answer_while_loading_is_kept() {
        let view = ConsoleView::new(false, false);
        view.set_loading(true);
        view.set_answer("Contemplating wisdom...");
        assert!(view.is_loading());
        assert_eq!(view.answer(), "Contemplating wisdom...");
        view.set_loading(false);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_controller_drives_console_view() {
        let view = Arc::new(ConsoleView::new(false, false));
        let controller = AskController::new(
            Arc::new(FixedGateway(Ok(AskReply::answer("Amor fati.")))),
            view.clone(),
        );

        controller.submit_text("What should I love?").await;

        assert_eq!(view.answer(), "Amor fati.");
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn test_console_view_shows_guidance_for_blank_input() {
        let view = Arc::new(ConsoleView::new(false, false));
        let controller = AskController::new(Arc::new(FixedGateway(Err(()))), view.clone());

        controller.submit_text("   ").await;

        assert_eq!(view.answer(), GUIDANCE_MESSAGE);
    }
}
