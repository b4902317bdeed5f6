//! Contact form pages — render, submit, hand off to the mail client.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};

use crate::config::SiteConfig;
use crate::site::layout::{html_escape, page};

use super::model::ContactForm;

/// Build the contact routes.
pub fn contact_routes(config: SiteConfig) -> Router {
    Router::new()
        .route("/contact", get(contact_page).post(submit_contact))
        .with_state(config)
}

/// GET /contact — the blank inquiry form.
async fn contact_page() -> Html<String> {
    Html(page("Contact", &form_view(&ContactForm::default())))
}

/// POST /contact — flip to the submitted view, or re-render the form when a
/// required field is missing. No retry path: if the visitor's mail client
/// fails to open, the portal never knows.
async fn submit_contact(
    State(config): State<SiteConfig>,
    Form(form): Form<ContactForm>,
) -> Html<String> {
    if !form.is_complete() {
        return Html(page("Contact", &form_view(&form)));
    }
    let uri = form.mailto_uri(&config.contact_address);
    tracing::info!(business = %form.business, "contact inquiry handed off");
    Html(page("Contact", &submitted_view(&uri)))
}

fn form_view(form: &ContactForm) -> String {
    format!(
        "<main>\n<h2>Contact Ezelle Art LLC</h2>\n\
         <form method=\"post\" action=\"/contact\">\n\
         <label for=\"name\">Your Name</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\" required value=\"{}\">\n\
         <label for=\"email\">Business Email</label>\n\
         <input id=\"email\" name=\"email\" type=\"email\" required value=\"{}\">\n\
         <label for=\"business\">Business Name</label>\n\
         <input id=\"business\" name=\"business\" type=\"text\" required value=\"{}\">\n\
         <label for=\"message\">Your Message</label>\n\
         <textarea id=\"message\" name=\"message\" rows=\"4\" required>{}</textarea>\n\
         <p><button type=\"submit\">Send Inquiry to Ezelle</button></p>\n</form>\n\
         <p><a href=\"/\">Close</a></p>\n</main>",
        html_escape(&form.name),
        html_escape(&form.email),
        html_escape(&form.business),
        html_escape(&form.message),
    )
}

fn submitted_view(mailto_uri: &str) -> String {
    // Script content is raw text — character references are not decoded
    // there, so the URI goes in unescaped. Percent-encoding leaves no `"`,
    // `<`, or `&` in the user-supplied parts; the separator must stay `&`.
    format!(
        "<main>\n<h3>Message Initiated</h3>\n\
         <p>Your email client has been opened to complete the request. We look \
         forward to connecting!</p>\n\
         <p><a href=\"{}\">Open mail client</a></p>\n\
         <p><a href=\"/\">Close Window</a></p>\n\
         <script>window.location.href = \"{mailto_uri}\";</script>\n</main>",
        html_escape(mailto_uri)
    )
}
