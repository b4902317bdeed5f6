//! Site shell — page layout, marketing copy, and route composition.

pub mod content;
pub mod layout;
pub mod routes;

pub use routes::{portal_router, site_routes};
