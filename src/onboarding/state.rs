//! Wizard state machine — tracks which step a partner session is on.

use serde::{Deserialize, Serialize};

/// The steps of the partnership onboarding wizard.
///
/// Progresses linearly: Identify → Welcome → Agreement → Success. There is
/// no branching and no backward movement, except the explicit
/// start-new-agreement reset offered on the Success screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Identify,
    Welcome,
    Agreement,
    Success,
}

impl OnboardingStep {
    /// Check if a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: OnboardingStep) -> bool {
        use OnboardingStep::*;
        matches!(
            (self, target),
            (Identify, Welcome) | (Welcome, Agreement) | (Agreement, Success)
        )
    }

    /// Whether this step is terminal (the agreement is signed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the next step in the linear progression, if any.
    pub fn next(&self) -> Option<OnboardingStep> {
        use OnboardingStep::*;
        match self {
            Identify => Some(Welcome),
            Welcome => Some(Agreement),
            Agreement => Some(Success),
            Success => None,
        }
    }
}

impl Default for OnboardingStep {
    fn default() -> Self {
        Self::Identify
    }
}

impl std::fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Identify => "identify",
            Self::Welcome => "welcome",
            Self::Agreement => "agreement",
            Self::Success => "success",
        };
        write!(f, "{s}")
    }
}
