//! Integration tests for the portal HTTP surface.
//!
//! Each test binds the real router to a random port and drives it with
//! reqwest, following the form-post redirects a browser would.

use std::time::Duration;

use serde_json::Value;
use tokio::net::TcpListener;
use tokio::time::timeout;

use partner_portal::config::SiteConfig;
use partner_portal::onboarding::OnboardingManager;
use partner_portal::site::portal_router;

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Start the portal on a random port, return its base URL.
async fn start_server() -> String {
    let config = SiteConfig::default();
    let manager = OnboardingManager::new();
    let app = portal_router(config, manager);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{port}")
}

/// Open a wizard session and return its page URL (`{base}/partner/{id}`).
async fn open_wizard(client: &reqwest::Client, base: &str) -> String {
    let resp = client.post(format!("{base}/partner")).send().await.unwrap();
    assert!(resp.status().is_success());
    let url = resp.url().to_string();
    assert!(url.contains("/partner/"), "expected redirect to the session page");
    url
}

/// Derive the JSON status URL from a session page URL.
fn status_url(session_url: &str) -> String {
    let (base, id) = session_url.rsplit_once("/partner/").unwrap();
    format!("{base}/api/onboarding/{id}/status")
}

async fn status(client: &reqwest::Client, session_url: &str) -> Value {
    client
        .get(status_url(session_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

// ── Site ────────────────────────────────────────────────────────────

#[tokio::test]
async fn health_ok() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let json: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "partner-portal");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn home_page_carries_the_partnership_pitch() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let html = reqwest::get(format!("{base}/")).await.unwrap().text().await.unwrap();
        assert!(html.contains("Brush of Light"));
        assert!(html.contains("Become a Partner"));
        assert!(html.contains("20% Commission"));
        assert!(html.contains("Privacy Policy"));
        assert!(html.contains("@media print"));
    })
    .await
    .expect("test timed out");
}

// ── Wizard ──────────────────────────────────────────────────────────

#[tokio::test]
async fn identify_guard_blocks_until_both_fields() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();
        let session = open_wizard(&client, &base).await;

        // Name alone is not enough.
        let resp = client
            .post(format!("{session}/identity"))
            .form(&[("name", "Jane Doe"), ("business_name", "")])
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();
        assert!(html.contains("Welcome, Partner"), "should still be on Identify");

        let json = status(&client, &session).await;
        assert_eq!(json["step"], "identify");
        assert_eq!(json["can_advance"], false);

        // Both fields filled advances to Welcome.
        let resp = client
            .post(format!("{session}/identity"))
            .form(&[("name", "Jane Doe"), ("business_name", "Smith Family Funeral Home")])
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();
        assert!(html.contains("Welcome, Jane Doe"));

        let json = status(&client, &session).await;
        assert_eq!(json["step"], "welcome");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn full_wizard_flow_signs_and_offers_handoffs() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();
        let session = open_wizard(&client, &base).await;

        client
            .post(format!("{session}/identity"))
            .form(&[("name", "Jane Doe"), ("business_name", "Smith & Sons Funeral Home")])
            .send()
            .await
            .unwrap();

        // Welcome → Agreement.
        let resp = client
            .post(format!("{session}/advance"))
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();
        assert!(html.contains("Partnership Agreement Terms"));
        assert!(
            html.contains("Smith &amp; Sons Funeral Home (&quot;Partner&quot;)"),
            "terms interpolate the business name"
        );

        // Empty signature is rejected: still on Agreement.
        client
            .post(format!("{session}/sign"))
            .form(&[("signature", "")])
            .send()
            .await
            .unwrap();
        let json = status(&client, &session).await;
        assert_eq!(json["step"], "agreement");
        assert_eq!(json["can_advance"], false);

        // Signing completes the wizard.
        let resp = client
            .post(format!("{session}/sign"))
            .form(&[("signature", "Jane E. Doe")])
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();
        assert!(html.contains("Agreement Signed"));
        assert!(html.contains("Jane E. Doe"));
        assert!(html.contains("Smith &amp; Sons Funeral Home"));
        assert!(html.contains("Signed on"));
        assert!(
            html.contains("Signed%20Partnership%20Agreement%20-%20Smith%20%26%20Sons%20Funeral%20Home"),
            "mail handoff escapes the business name"
        );

        let json = status(&client, &session).await;
        assert_eq!(json["step"], "success");
        assert!(json["signed_at"].is_string());
        assert_eq!(json["partner"]["signature"], "Jane E. Doe");
        let mailto = json["mailto"].as_str().unwrap();
        assert!(mailto.starts_with("mailto:ezelle@ezelleart.com?subject="));
        assert!(mailto.contains("Best%20regards%2C%0AJane%20Doe"));

        // The printable document interpolates the summary.
        let doc = client
            .get(format!("{session}/agreement"))
            .send()
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(doc.contains("has entered into a partnership agreement"));
        assert!(doc.contains("Jane E. Doe"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reset_from_success_starts_over_empty() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();
        let session = open_wizard(&client, &base).await;

        client
            .post(format!("{session}/identity"))
            .form(&[("name", "Jane Doe"), ("business_name", "Smith Family Funeral Home")])
            .send()
            .await
            .unwrap();
        client.post(format!("{session}/advance")).send().await.unwrap();
        client
            .post(format!("{session}/sign"))
            .form(&[("signature", "Jane Doe")])
            .send()
            .await
            .unwrap();

        let resp = client.post(format!("{session}/reset")).send().await.unwrap();
        let html = resp.text().await.unwrap();
        assert!(html.contains("Welcome, Partner"), "back on Identify");

        let json = status(&client, &session).await;
        assert_eq!(json["step"], "identify");
        assert_eq!(json["partner"]["name"], "");
        assert_eq!(json["partner"]["business_name"], "");
        assert_eq!(json["partner"]["signature"], "");
        assert!(json.get("signed_at").is_none() || json["signed_at"].is_null());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn reset_before_success_is_rejected() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();
        let session = open_wizard(&client, &base).await;

        let resp = client.post(format!("{session}/reset")).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CONFLICT);

        let json = status(&client, &session).await;
        assert_eq!(json["step"], "identify");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn close_discards_the_session_silently() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();
        let session = open_wizard(&client, &base).await;

        client
            .post(format!("{session}/identity"))
            .form(&[("name", "Jane Doe"), ("business_name", "Smith Family Funeral Home")])
            .send()
            .await
            .unwrap();

        // Closing mid-wizard lands back on the marketing page.
        let resp = client.post(format!("{session}/close")).send().await.unwrap();
        assert!(resp.status().is_success());
        let html = resp.text().await.unwrap();
        assert!(html.contains("Brush of Light"));

        // The session and its data are gone.
        let resp = client.get(status_url(&session)).send().await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn unknown_session_is_not_found() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let resp = reqwest::get(format!(
            "{base}/api/onboarding/00000000-0000-0000-0000-000000000000/status"
        ))
        .await
        .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    })
    .await
    .expect("test timed out");
}

// ── Contact ─────────────────────────────────────────────────────────

#[tokio::test]
async fn contact_submission_flips_to_submitted_with_escaped_mailto() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/contact"))
            .form(&[
                ("name", "Jane Doe"),
                ("email", "jane@smith.example"),
                ("business", "Jane & Joe Funeral Home"),
                ("message", "Samples please\nThanks"),
            ])
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();

        assert!(html.contains("Message Initiated"));
        assert!(html.contains("Inquiry%20for%20Brush%20of%20Light%20-%20Jane%20%26%20Joe%20Funeral%20Home"));
        assert!(html.contains("Name%3A%20Jane%20Doe"));
        assert!(html.contains("jane%40smith.example"));
        assert!(html.contains("Samples%20please%0AThanks"));
        // The auto-navigation script must keep the raw `&` between the
        // subject and body params so the mail client sees both.
        assert!(html.contains("window.location.href = \"mailto:"));
        assert!(html.contains("Funeral%20Home&body=Name%3A"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn contact_missing_field_rerenders_the_form() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/contact"))
            .form(&[
                ("name", "Jane Doe"),
                ("email", "jane@smith.example"),
                ("business", "Smith Family Funeral Home"),
                ("message", ""),
            ])
            .send()
            .await
            .unwrap();
        let html = resp.text().await.unwrap();

        assert!(!html.contains("Message Initiated"));
        assert!(html.contains("Send Inquiry to Ezelle"), "form is shown again");
        assert!(html.contains("value=\"Jane Doe\""), "entered values are kept");
    })
    .await
    .expect("test timed out");
}

// ── Legal ───────────────────────────────────────────────────────────

#[tokio::test]
async fn legal_documents_render_and_unknown_tags_404() {
    timeout(TEST_TIMEOUT, async {
        let base = start_server().await;

        let privacy = reqwest::get(format!("{base}/legal/privacy"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(privacy.contains("Privacy Policy"));
        assert!(privacy.contains("Data Collection"));

        let terms = reqwest::get(format!("{base}/legal/terms"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert!(terms.contains("Terms and Conditions"));
        assert!(terms.contains("Intellectual Property"));

        let resp = reqwest::get(format!("{base}/legal/cookies")).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    })
    .await
    .expect("test timed out");
}
