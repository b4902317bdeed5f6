//! Contact inquiry form model.

use serde::{Deserialize, Serialize};

use crate::mailto;

/// The four-field inquiry form. Submitted in one request, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// All four fields are required before the handoff is built. Presence
    /// only — the email field's format is left to the input's native type.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.business.is_empty()
            && !self.message.is_empty()
    }

    /// Build the inquiry mail handoff for this form.
    pub fn mailto_uri(&self, to: &str) -> String {
        mailto::inquiry_uri(to, &self.name, &self.email, &self.business, &self.message)
    }
}
