//! Render-failure boundary state.
//!
//! A boundary sits around page content. When rendering below it fails the
//! failure is captured and a fallback panel is shown in place of the page,
//! leaving the surrounding shell intact. Retrying clears the failure so the
//! subtree renders again.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// A failure captured while rendering a subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFailure {
    pub message: String,
    /// Path that was being rendered, when known.
    pub path: Option<String>,
}

impl RenderFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Buttons on the fallback panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecoveryAction {
    Retry,
    Back,
    Home,
}

impl RecoveryAction {
    pub const ALL: [RecoveryAction; 3] = [Self::Retry, Self::Back, Self::Home];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Retry => "Try again",
            Self::Back => "Go back",
            Self::Home => "Go to home",
        }
    }

    /// Fixed destination, if the action navigates somewhere known.
    pub fn href(&self) -> Option<&'static str> {
        match self {
            Self::Home => Some("/"),
            Self::Retry | Self::Back => None,
        }
    }
}

/// Captured-failure state of one boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundaryState {
    failure: Option<RenderFailure>,
}

impl BoundaryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. A later failure replaces an earlier one.
    pub fn capture(&mut self, failure: RenderFailure) {
        error!(
            message = %failure.message,
            path = failure.path.as_deref().unwrap_or("-"),
            "render failed, showing fallback"
        );
        self.failure = Some(failure);
    }

    pub fn failure(&self) -> Option<&RenderFailure> {
        self.failure.as_ref()
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Clear the captured failure so the subtree renders again.
    pub fn retry(&mut self) -> Option<RenderFailure> {
        let cleared = self.failure.take();
        if cleared.is_some() {
            info!("boundary reset by retry");
        }
        cleared
    }

    /// Actions to offer; empty while nothing has failed.
    pub fn actions(&self) -> &'static [RecoveryAction] {
        if self.has_failed() {
            &RecoveryAction::ALL
        } else {
            &[]
        }
    }
}
