//! # UI Collaborator
//!
//! The forge talks to the player through three suspension points. Each
//! returns a future that resolves when the player has answered.

use std::future::Future;

use hepteract_economy::ForgeError;

/// The player's side of the forge.
pub trait ForgeUi {
    /// Shows a message. Resolves once it has been acknowledged.
    fn alert(&mut self, message: &str) -> impl Future<Output = ()>;

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> impl Future<Output = bool>;

    /// Asks for free text. `None` means the player dismissed the prompt.
    fn prompt(&mut self, message: &str) -> impl Future<Output = Option<String>>;
}

/// How an interactive forge operation ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<T> {
    /// The operation went through.
    Done(T),
    /// The forge refused; the player has already been told why.
    Rejected(ForgeError),
    /// The player declined or dismissed the prompt. Nothing changed.
    Cancelled,
}

impl<T> Outcome<T> {
    /// The result, if the operation went through.
    #[must_use]
    pub fn done(self) -> Option<T> {
        match self {
            Self::Done(value) => Some(value),
            Self::Rejected(_) | Self::Cancelled => None,
        }
    }

    /// True if the player backed out.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
