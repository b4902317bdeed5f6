//! Wizard pages and REST endpoints for the onboarding flow.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::SiteConfig;
use crate::error::SessionError;
use crate::mailto;
use crate::site::layout::{html_escape, page};

use super::agreement;
use super::manager::OnboardingManager;
use super::model::{PartnerData, WizardSession};
use super::state::OnboardingStep;

/// Shared state for the wizard routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
    pub config: SiteConfig,
}

/// Build the wizard routes.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/partner", post(open_wizard))
        .route("/partner/{id}", get(wizard_page))
        .route("/partner/{id}/identity", post(submit_identity))
        .route("/partner/{id}/advance", post(advance_step))
        .route("/partner/{id}/sign", post(submit_signature))
        .route("/partner/{id}/reset", post(reset_wizard))
        .route("/partner/{id}/close", post(close_wizard))
        .route("/partner/{id}/agreement", get(agreement_document))
        .route("/api/onboarding/{id}/status", get(get_status))
        .with_state(state)
}

// ── JSON status ─────────────────────────────────────────────────────

/// Wizard status returned by the REST endpoint.
#[derive(Debug, Serialize)]
pub struct OnboardingStatus {
    pub id: Uuid,
    pub step: OnboardingStep,
    pub partner: PartnerData,
    /// Whether the current step's continue control is enabled.
    pub can_advance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
    /// Signed-agreement mail handoff, present once the wizard completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailto: Option<String>,
}

impl OnboardingStatus {
    fn from_session(session: &WizardSession, contact_address: &str) -> Self {
        let mailto = session.step.is_terminal().then(|| {
            mailto::signed_agreement_uri(
                contact_address,
                &session.partner.name,
                &session.partner.business_name,
            )
        });
        Self {
            id: session.id,
            step: session.step,
            partner: session.partner.clone(),
            can_advance: session.can_advance(),
            signed_at: session.signed_at,
            mailto,
        }
    }
}

/// GET /api/onboarding/{id}/status
async fn get_status(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.manager.get(id).await {
        Ok(session) => {
            Json(OnboardingStatus::from_session(&session, &state.config.contact_address))
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ── Form payloads ───────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct IdentityForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    business_name: String,
}

#[derive(Debug, Deserialize)]
struct SignatureForm {
    #[serde(default)]
    signature: String,
}

// ── Handlers ────────────────────────────────────────────────────────

/// POST /partner — open a fresh wizard session.
async fn open_wizard(State(state): State<OnboardingRouteState>) -> Redirect {
    let session = state.manager.open().await;
    Redirect::to(&format!("/partner/{}", session.id))
}

/// GET /partner/{id} — render the session's current step.
async fn wizard_page(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.manager.get(id).await {
        Ok(session) => Html(render_step(&session, &state.config.contact_address)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /partner/{id}/identity — store the identity fields and try to
/// continue. An unmet guard re-renders Identify unchanged.
async fn submit_identity(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
    Form(form): Form<IdentityForm>,
) -> Response {
    if let Err(e) = state.manager.set_identity(id, form.name, form.business_name).await {
        return e.into_response();
    }
    advance_or_stay(&state, id).await
}

/// POST /partner/{id}/advance — continue off the Welcome screen.
async fn advance_step(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    advance_or_stay(&state, id).await
}

/// POST /partner/{id}/sign — store the signature and try to sign.
async fn submit_signature(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
    Form(form): Form<SignatureForm>,
) -> Response {
    if let Err(e) = state.manager.set_signature(id, form.signature).await {
        return e.into_response();
    }
    advance_or_stay(&state, id).await
}

/// POST /partner/{id}/reset — start a new agreement from Success.
async fn reset_wizard(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.manager.reset(id).await {
        Ok(_) => Redirect::to(&format!("/partner/{id}")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// POST /partner/{id}/close — discard the session and return to the site.
async fn close_wizard(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.manager.close(id).await {
        Ok(()) => Redirect::to("/").into_response(),
        Err(e) => e.into_response(),
    }
}

/// GET /partner/{id}/agreement — the printable signed document.
async fn agreement_document(
    State(state): State<OnboardingRouteState>,
    Path(id): Path<Uuid>,
) -> Response {
    let session = match state.manager.get(id).await {
        Ok(s) => s,
        Err(e) => return e.into_response(),
    };
    if !session.step.is_terminal() {
        return SessionError::WrongStep {
            expected: OnboardingStep::Success,
            actual: session.step,
        }
        .into_response();
    }
    let body = format!(
        "<main>\n{}\n<div class=\"no-print\">\n\
         <button onclick=\"window.print()\">Print Copy</button>\n\
         <a href=\"/partner/{id}\">Back to summary</a>\n</div>\n</main>",
        document_card(&session)
    );
    Html(page("Partnership Agreement", &body)).into_response()
}

/// Guarded advance shared by the step-form handlers: an unmet guard keeps
/// the session on its current step, mirroring a disabled continue control.
async fn advance_or_stay(state: &OnboardingRouteState, id: Uuid) -> Response {
    match state.manager.advance(id).await {
        Ok(_) | Err(SessionError::StepIncomplete { .. }) => {
            Redirect::to(&format!("/partner/{id}")).into_response()
        }
        Err(e) => e.into_response(),
    }
}

// ── Step rendering ──────────────────────────────────────────────────

fn render_step(session: &WizardSession, contact_address: &str) -> String {
    let inner = match session.step {
        OnboardingStep::Identify => identify_step(session),
        OnboardingStep::Welcome => welcome_step(session),
        OnboardingStep::Agreement => agreement_step(session),
        OnboardingStep::Success => success_step(session, contact_address),
    };
    let body = format!(
        "<nav class=\"no-print\"><strong>Partnership Agreement</strong>\
         <span class=\"muted\">{} by {}</span></nav>\n<main>\n{inner}\n</main>",
        crate::site::content::SITE_NAME,
        crate::site::content::COMPANY,
    );
    page("Partnership Agreement", &body)
}

fn cancel_form(id: Uuid) -> String {
    format!(
        "<form method=\"post\" action=\"/partner/{id}/close\" class=\"no-print\">\
         <button type=\"submit\" class=\"quiet\">Cancel</button></form>"
    )
}

fn identify_step(session: &WizardSession) -> String {
    let id = session.id;
    format!(
        "<h3>Welcome, Partner</h3>\n\
         <p>Please provide your details to begin the partnership process.</p>\n\
         <form method=\"post\" action=\"/partner/{id}/identity\">\n\
         <label for=\"name\">Your Full Name</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" placeholder=\"Jane Doe\" value=\"{}\">\n\
         <label for=\"business_name\">Funeral Home / Business Name</label>\n\
         <input id=\"business_name\" name=\"business_name\" type=\"text\" \
         placeholder=\"Smith Family Funeral Home\" value=\"{}\">\n\
         <p><button type=\"submit\">Continue</button></p>\n</form>\n{}",
        html_escape(&session.partner.name),
        html_escape(&session.partner.business_name),
        cancel_form(id),
    )
}

fn welcome_step(session: &WizardSession) -> String {
    let id = session.id;
    format!(
        "<h3>Welcome, {}</h3>\n<p>from <strong>{}</strong></p>\n\
         <p>Thank you for your interest in partnering with Brush of Light by \
         Ezelle Art LLC.</p>\n\
         <p>We are honored to work alongside funeral service professionals like \
         yourself who understand the profound importance of meaningful memorial art \
         in the healing journey.</p>\n\
         <p><strong>This partnership will enable you to offer families a truly \
         unique way to honor their loved ones through custom memorial \
         paintings.</strong></p>\n\
         <form method=\"post\" action=\"/partner/{id}/advance\">\
         <button type=\"submit\">Review Agreement</button></form>\n{}",
        html_escape(&session.partner.name),
        html_escape(&session.partner.business_name),
        cancel_form(id),
    )
}

fn agreement_step(session: &WizardSession) -> String {
    let id = session.id;
    let sections: String = agreement::TERMS_SECTIONS
        .iter()
        .map(|(heading, text)| format!("<h4>{heading}</h4>\n<p>{text}</p>\n"))
        .collect();
    format!(
        "<div class=\"card terms\">\n<h3>Partnership Agreement Terms</h3>\n\
         <p><strong>{}</strong></p>\n{sections}</div>\n\
         <form method=\"post\" action=\"/partner/{id}/sign\">\n\
         <label for=\"signature\">Your Digital Signature</label>\n\
         <input id=\"signature\" name=\"signature\" type=\"text\" \
         class=\"signature-line\" placeholder=\"Type your name\" value=\"{}\">\n\
         <p class=\"muted\">By typing your name, you agree to the terms outlined \
         above.</p>\n\
         <p><button type=\"submit\" class=\"accent\">Sign Agreement</button></p>\n\
         </form>\n{}",
        html_escape(&agreement::preamble(&session.partner.business_name)),
        html_escape(&session.partner.signature),
        cancel_form(id),
    )
}

/// The signed-document card, shared by the Success screen and the
/// printable copy.
fn document_card(session: &WizardSession) -> String {
    let signed_on = agreement::long_date(session.signed_at.unwrap_or_else(Utc::now));
    format!(
        "<div class=\"card\">\n<h2>Partnership Agreement</h2>\n\
         <p class=\"muted\">{} by {} — {signed_on}</p>\n\
         <p><label>Partner Name</label>{}</p>\n\
         <p><label>Business Name</label>{}</p>\n\
         <p><label>Agreement Summary</label>{}</p>\n\
         <p><label>Digital Signature</label>\
         <span class=\"signature-line\">{}</span><br>\
         <span class=\"muted\">Signed on {signed_on}</span></p>\n</div>",
        agreement::BRAND,
        agreement::PROVIDER,
        html_escape(&session.partner.name),
        html_escape(&session.partner.business_name),
        html_escape(&agreement::summary(&session.partner.business_name)),
        html_escape(&session.partner.signature),
    )
}

fn success_step(session: &WizardSession, contact_address: &str) -> String {
    let id = session.id;
    let email_uri = mailto::signed_agreement_uri(
        contact_address,
        &session.partner.name,
        &session.partner.business_name,
    );
    format!(
        "<div class=\"no-print\">\n<h3>Agreement Signed</h3>\n\
         <p>Thank you for joining the Brush of Light family!</p>\n</div>\n{}\n\
         <div class=\"no-print\">\n\
         <button onclick=\"window.print()\">Print Copy</button>\n\
         <a href=\"{}\" class=\"button accent\">Email to Ezelle</a>\n\
         <a href=\"/partner/{id}/agreement\">Printable copy</a>\n\
         <form method=\"post\" action=\"/partner/{id}/reset\">\
         <button type=\"submit\" class=\"quiet\">Start New Agreement</button></form>\n\
         <form method=\"post\" action=\"/partner/{id}/close\">\
         <button type=\"submit\" class=\"quiet\">Close</button></form>\n</div>",
        document_card(session),
        html_escape(&email_uri),
    )
}
