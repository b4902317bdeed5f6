//! Contact form — independent of the wizard, hands inquiries to the
//! visitor's mail client.

pub mod model;
pub mod routes;

pub use model::ContactForm;
pub use routes::contact_routes;
