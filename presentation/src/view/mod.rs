//! Display surfaces implementing [`stoic_application::AnswerView`].

pub mod console;

pub use console::ConsoleView;
