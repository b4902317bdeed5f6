//! Onboarding wizard — the four-step partnership agreement flow.
//!
//! A wizard session walks a prospective partner through Identify → Welcome
//! → Agreement → Success, collecting their details, presenting the
//! templated terms, and finishing with a printable, emailable signed
//! summary. Sessions are in-memory only and vanish on close or idle
//! expiry.

pub mod agreement;
pub mod manager;
pub mod model;
pub mod routes;
pub mod state;

pub use manager::{OnboardingManager, spawn_prune_task};
pub use model::{PartnerData, WizardSession};
pub use routes::{OnboardingRouteState, OnboardingStatus, onboarding_routes};
pub use state::OnboardingStep;
