//! Loading indicator shown while a question is in flight

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner on stderr, started and stopped by the console view
///
/// When disabled (`--quiet`, `repl.show_progress = false`) every call is
/// a no-op but `is_active` still tracks the loading flag.
pub struct LoadingIndicator {
    enabled: bool,
    bar: Mutex<Option<ProgressBar>>,
    active: Mutex<bool>,
}

impl LoadingIndicator {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            bar: Mutex::new(None),
            active: Mutex::new(false),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Start spinning with `message`; restarts the message if already active
    pub fn start(&self, message: &str) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = true;
        if !self.enabled {
            return;
        }
        let mut bar = self.bar.lock().unwrap_or_else(PoisonError::into_inner);
        match bar.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(Self::spinner_style());
                pb.set_message(message.to_string());
                pb.enable_steady_tick(Duration::from_millis(100));
                *bar = Some(pb);
            }
        }
    }

    /// Update the message next to the spinner, if it is running
    pub fn set_message(&self, message: &str) {
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            pb.set_message(message.to_string());
        }
    }

    /// Stop and erase the spinner
    pub fn stop(&self) {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = false;
        if let Some(pb) = self
            .bar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pb.finish_and_clear();
        }
    }

    pub fn is_active(&self) -> bool {
        *self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for LoadingIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}
