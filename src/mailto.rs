//! Mailto URI construction — the portal's only mail capability.
//!
//! Nothing here speaks SMTP. The portal builds `mailto:` URIs from
//! user-entered fields and delegates composition and delivery to the
//! visitor's configured mail client. There is no success signal.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape set matching JavaScript's `encodeURIComponent`: everything but
/// ASCII alphanumerics and `- _ . ! ~ * ' ( )` is percent-encoded.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one mailto query component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Render a complete `mailto:` URI with subject and body.
pub fn mailto_uri(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{to}?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

/// Handoff URI for a contact-form inquiry.
pub fn inquiry_uri(to: &str, name: &str, email: &str, business: &str, message: &str) -> String {
    let subject = format!("Inquiry for Brush of Light - {business}");
    let body =
        format!("Name: {name}\nBusiness: {business}\nEmail: {email}\n\nMessage:\n{message}");
    mailto_uri(to, &subject, &body)
}

/// Handoff URI for the signed-agreement notice sent from the SUCCESS screen.
pub fn signed_agreement_uri(to: &str, name: &str, business: &str) -> String {
    let subject = format!("Signed Partnership Agreement - {business}");
    let body = format!(
        "Hi Ezelle,\n\nPlease find the signed partnership agreement for {business} \
         attached to this email.\n\nBest regards,\n{name}"
    );
    mailto_uri(to, &subject, &body)
}
