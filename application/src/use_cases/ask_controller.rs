//! Ask controller use case.
//!
//! Owns the lifecycle of one round trip:
//! read input → validate → show loading → ask → interpret → display.
//!
//! Every submit takes a ticket from a monotonically increasing counter.
//! A reply is applied only while its ticket is still the latest one, so a
//! slow earlier request can never overwrite the result of a later submit.
//! Empty submits and [`AskController::clear`] also take a ticket.

use crate::ports::answer_view::AnswerView;
use crate::ports::ask_gateway::AskGateway;
use crate::ports::response_exporter::ResponseSnapshot;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use stoic_domain::util::log_preview;
use stoic_domain::{
    AnswerResult, GENERIC_ERROR_MESSAGE, GUIDANCE_MESSAGE, LOADING_PLACEHOLDER, Question, UiState,
};
use tracing::{debug, error, info};

/// What happened to a single submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The result was written to the view
    Displayed(AnswerResult),
    /// A later submit (or clear) took over before this one resolved
    Superseded,
}

impl SubmitOutcome {
    pub fn result(&self) -> Option<&AnswerResult> {
        match self {
            Self::Displayed(result) => Some(result),
            Self::Superseded => None,
        }
    }
}

#[derive(Debug, Default)]
struct ControllerState {
    latest_ticket: u64,
    ui: UiState,
    snapshot: Option<ResponseSnapshot>,
}

impl ControllerState {
    fn next_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }
}

/// Question/answer controller
///
/// Cheap to share behind an `Arc`; `submit` may be called concurrently
/// from several tasks.
pub struct AskController {
    gateway: Arc<dyn AskGateway>,
    view: Arc<dyn AnswerView>,
    state: Mutex<ControllerState>,
}

impl AskController {
    pub fn new(gateway: Arc<dyn AskGateway>, view: Arc<dyn AnswerView>) -> Self {
        Self {
            gateway,
            view,
            state: Mutex::new(ControllerState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current UI state
    pub fn state(&self) -> UiState {
        self.lock().ui.clone()
    }

    /// The last question/result pair that came back from the endpoint
    pub fn snapshot(&self) -> Option<ResponseSnapshot> {
        self.lock().snapshot.clone()
    }

    /// Where questions are sent
    pub fn endpoint(&self) -> &str {
        self.gateway.endpoint()
    }

    /// Put `text` into the input field, then submit it.
    pub async fn submit_text(&self, text: &str) -> SubmitOutcome {
        self.view.set_input(text);
        self.submit().await
    }

    /// Submit whatever is currently in the input field.
    pub async fn submit(&self) -> SubmitOutcome {
        let raw = self.view.input();

        let Some(question) = Question::try_new(&raw) else {
            debug!("Empty question submitted, showing guidance");
            let result = AnswerResult::Failure(GUIDANCE_MESSAGE.to_string());
            let mut state = self.lock();
            state.next_ticket();
            state.snapshot = None;
            self.display(&mut state, result.clone());
            return SubmitOutcome::Displayed(result);
        };

        let ticket = {
            let mut state = self.lock();
            let ticket = state.next_ticket();
            state.ui = UiState::Loading;
            self.view.set_loading(true);
            self.view.set_answer(LOADING_PLACEHOLDER);
            ticket
        };

        info!(
            ticket,
            "Asking {}: {}",
            self.gateway.endpoint(),
            log_preview(question.content(), 80)
        );

        let result = match self.gateway.ask(&question).await {
            Ok(reply) => AnswerResult::from_reply(reply),
            Err(e) => {
                error!(ticket, "Ask request failed: {}", e);
                AnswerResult::Failure(GENERIC_ERROR_MESSAGE.to_string())
            }
        };

        let mut state = self.lock();
        if state.latest_ticket != ticket {
            debug!(
                ticket,
                latest = state.latest_ticket,
                "Discarding stale reply"
            );
            return SubmitOutcome::Superseded;
        }

        state.snapshot = Some(ResponseSnapshot::new(question, result.clone()));
        self.display(&mut state, result.clone());
        SubmitOutcome::Displayed(result)
    }

    /// Empty the input field and answer area and go back to `Idle`.
    ///
    /// Any request still in flight is left to finish but its reply is
    /// discarded.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.next_ticket();
        state.ui = UiState::Idle;
        state.snapshot = None;
        self.view.set_input("");
        self.view.set_answer("");
        self.view.set_loading(false);
    }

    fn display(&self, state: &mut ControllerState, result: AnswerResult) {
        self.view.set_loading(false);
        self.view.set_answer(result.text());
        state.ui = UiState::Displaying(result);
    }
}
