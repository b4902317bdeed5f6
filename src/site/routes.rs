//! Site routes — marketing page, legal documents, health, and the
//! composed portal router.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{Datelike, Utc};
use tower_http::cors::CorsLayer;

use crate::config::SiteConfig;
use crate::contact::contact_routes;
use crate::legal::LegalDoc;
use crate::onboarding::{OnboardingManager, OnboardingRouteState, onboarding_routes};

use super::content;
use super::layout::page;

/// Build the page routes (home, legal, health).
pub fn site_routes(config: SiteConfig) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health))
        .route("/legal/{doc}", get(legal_page))
        .with_state(config)
}

/// Build the complete portal router: site pages, contact form, wizard.
pub fn portal_router(config: SiteConfig, manager: Arc<OnboardingManager>) -> Router {
    let onboarding_state = OnboardingRouteState {
        manager,
        config: config.clone(),
    };
    Router::new()
        .merge(site_routes(config.clone()))
        .merge(contact_routes(config))
        .merge(onboarding_routes(onboarding_state))
        .layer(CorsLayer::permissive())
}

// ── Health ──────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "partner-portal"
    }))
}

// ── Pages ───────────────────────────────────────────────────────────

/// GET / — the single marketing page.
async fn home_page(State(config): State<SiteConfig>) -> Html<String> {
    let benefits: String = content::BENEFITS
        .iter()
        .map(|(title, text)| {
            format!("<div class=\"card\"><h3>{title}</h3><p>{text}</p></div>\n")
        })
        .collect();

    let steps: String = content::PROCESS_STEPS
        .iter()
        .enumerate()
        .map(|(i, (title, text))| {
            format!(
                "<div class=\"card\"><h3>{}. {title}</h3><p>{text}</p></div>\n",
                i + 1
            )
        })
        .collect();

    let body = format!(
        "<nav class=\"no-print\">\n<div><strong>{site}</strong> \
         <span class=\"muted\">by {company}</span></div>\n\
         <div><a href=\"/contact\">Contact</a>\n\
         <form method=\"post\" action=\"/partner\" style=\"display:inline\">\
         <button type=\"submit\">Become a Partner</button></form></div>\n</nav>\n\
         <main>\n\
         <h1>{site}</h1>\n<p><strong>{tagline}</strong></p>\n<p>{hero}</p>\n\
         <form method=\"post\" action=\"/partner\">\
         <button type=\"submit\">Start Partnership Agreement</button></form>\n\
         <h2 id=\"benefits\">{benefits_heading}</h2>\n<p>{benefits_lede}</p>\n\
         {benefits}\
         <h2>{process_heading}</h2>\n<p>{process_lede}</p>\n\
         {steps}\
         <h2>{cta_heading}</h2>\n<p>{cta_lede}</p>\n\
         <form method=\"post\" action=\"/partner\">\
         <button type=\"submit\">Start Your Partnership Today</button></form>\n\
         </main>\n\
         <footer>\n<p>{blurb}</p>\n\
         <p>{company} — {contact} — <a href=\"/contact\">Send us a message</a></p>\n\
         <p><a href=\"/legal/privacy\">Privacy Policy</a> · \
         <a href=\"/legal/terms\">Terms &amp; Conditions</a></p>\n\
         <p>&copy; {year} {company}. All rights reserved.</p>\n</footer>",
        site = content::SITE_NAME,
        company = content::COMPANY,
        tagline = content::TAGLINE,
        hero = content::HERO_LEDE,
        benefits_heading = content::BENEFITS_HEADING,
        benefits_lede = content::BENEFITS_LEDE,
        process_heading = content::PROCESS_HEADING,
        process_lede = content::PROCESS_LEDE,
        cta_heading = content::CTA_HEADING,
        cta_lede = content::CTA_LEDE,
        blurb = content::FOOTER_BLURB,
        contact = config.contact_address,
        year = Utc::now().year(),
    );
    Html(page(content::SITE_NAME, &body))
}

/// GET /legal/{doc} — one of the two fixed legal documents.
async fn legal_page(Path(doc): Path<String>) -> Response {
    let Ok(doc) = LegalDoc::from_str(&doc) else {
        return (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("Unknown legal document: {doc}") })),
        )
            .into_response();
    };

    let sections: String = doc
        .sections()
        .iter()
        .map(|(heading, text)| format!("<h4>{heading}</h4>\n<p>{text}</p>\n"))
        .collect();
    let body = format!(
        "<main>\n<h2>{}</h2>\n<p><strong>{}</strong></p>\n{sections}\
         <p><a href=\"/\">Close</a></p>\n</main>",
        doc.title(),
        doc.lede(),
    );
    Html(page(doc.title(), &body)).into_response()
}
