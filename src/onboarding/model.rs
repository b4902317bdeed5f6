//! Partner session data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};

use super::state::OnboardingStep;

/// Details collected from a prospective partner during the wizard.
///
/// Created empty when a session opens, mutated in place by the step forms,
/// and reset to all-empty by "start new agreement". Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerData {
    pub name: String,
    pub business_name: String,
    pub signature: String,
}

impl PartnerData {
    /// Guard for leaving Identify: both identity fields filled in.
    ///
    /// Presence only — no format check, matching the form's native hints.
    pub fn identity_complete(&self) -> bool {
        !self.name.is_empty() && !self.business_name.is_empty()
    }

    /// Guard for leaving Agreement: a typed signature is present.
    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }
}

/// One visitor's wizard, held in memory for the duration of the visit.
#[derive(Debug, Clone, Serialize)]
pub struct WizardSession {
    pub id: Uuid,
    pub step: OnboardingStep,
    pub partner: PartnerData,
    /// Set when the Agreement step completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
    /// Last time the visitor touched this session (drives idle pruning).
    #[serde(skip)]
    pub last_activity: DateTime<Utc>,
}

impl WizardSession {
    /// Open a fresh session at Identify with empty partner data.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: OnboardingStep::default(),
            partner: PartnerData::default(),
            signed_at: None,
            last_activity: Utc::now(),
        }
    }

    /// Whether the current step's guard is satisfied (the enabled-state of
    /// the step's continue control).
    pub fn can_advance(&self) -> bool {
        match self.step {
            OnboardingStep::Identify => self.partner.identity_complete(),
            OnboardingStep::Welcome => true,
            OnboardingStep::Agreement => self.partner.is_signed(),
            OnboardingStep::Success => false,
        }
    }

    /// Store the identity fields. Only valid while on Identify.
    pub fn set_identity(&mut self, name: String, business_name: String) -> SessionResult<()> {
        if self.step != OnboardingStep::Identify {
            return Err(SessionError::WrongStep {
                expected: OnboardingStep::Identify,
                actual: self.step,
            });
        }
        self.partner.name = name;
        self.partner.business_name = business_name;
        Ok(())
    }

    /// Store the typed signature. Only valid while on Agreement.
    pub fn set_signature(&mut self, signature: String) -> SessionResult<()> {
        if self.step != OnboardingStep::Agreement {
            return Err(SessionError::WrongStep {
                expected: OnboardingStep::Agreement,
                actual: self.step,
            });
        }
        self.partner.signature = signature;
        Ok(())
    }

    /// Advance to the next step, enforcing the current step's guard.
    ///
    /// A failed guard leaves the session unchanged.
    pub fn advance(&mut self) -> SessionResult<OnboardingStep> {
        let next = self.step.next().ok_or(SessionError::AlreadyComplete)?;
        if !self.step.can_transition_to(next) {
            return Err(SessionError::InvalidTransition {
                from: self.step,
                to: next,
            });
        }
        if !self.can_advance() {
            let missing = match self.step {
                OnboardingStep::Identify => "name and business name",
                _ => "signature",
            };
            return Err(SessionError::StepIncomplete {
                step: self.step,
                missing,
            });
        }
        if self.step == OnboardingStep::Agreement {
            self.signed_at = Some(Utc::now());
        }
        self.step = next;
        Ok(next)
    }

    /// Start-new-agreement: only offered on the Success screen. Clears all
    /// partner data and returns to Identify.
    pub fn reset(&mut self) -> SessionResult<()> {
        if self.step != OnboardingStep::Success {
            return Err(SessionError::WrongStep {
                expected: OnboardingStep::Success,
                actual: self.step,
            });
        }
        self.partner = PartnerData::default();
        self.signed_at = None;
        self.step = OnboardingStep::Identify;
        Ok(())
    }

    /// Record activity for idle pruning.
    pub fn touch(&mut self) {
        self.last_activity = Utc::now();
    }
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}
