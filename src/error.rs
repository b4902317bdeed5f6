//! Error types for the partner portal.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use uuid::Uuid;

use crate::onboarding::OnboardingStep;

/// Wizard session errors.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session {id} not found")]
    NotFound { id: Uuid },

    #[error("Cannot transition from {from} to {to}")]
    InvalidTransition {
        from: OnboardingStep,
        to: OnboardingStep,
    },

    #[error("Step {step} is incomplete: {missing} required")]
    StepIncomplete {
        step: OnboardingStep,
        missing: &'static str,
    },

    #[error("Operation requires step {expected}, session is at {actual}")]
    WrongStep {
        expected: OnboardingStep,
        actual: OnboardingStep,
    },

    #[error("Agreement already signed; the wizard is complete")]
    AlreadyComplete,
}

impl SessionError {
    /// HTTP status this error maps to on the JSON API.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidTransition { .. } | Self::WrongStep { .. } | Self::AlreadyComplete => {
                StatusCode::CONFLICT
            }
            Self::StepIncomplete { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

/// Result type alias for session operations.
pub type SessionResult<T> = std::result::Result<T, SessionError>;
