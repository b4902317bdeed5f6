//! Portal configuration, built from environment variables.

use std::time::Duration;

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Port the HTTP server binds on.
    pub bind_port: u16,
    /// Address every mailto handoff targets.
    pub contact_address: String,
    /// Wizard sessions idle longer than this are pruned.
    pub session_idle_timeout: Duration,
    /// How often the prune sweep runs.
    pub sweep_interval: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_port: 8080,
            contact_address: "ezelle@ezelleart.com".to_string(),
            session_idle_timeout: Duration::from_secs(3600), // 1 hour
            sweep_interval: Duration::from_secs(60),
        }
    }
}

impl SiteConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_port: u16 = std::env::var("PORTAL_BIND_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.bind_port);

        let contact_address =
            std::env::var("PORTAL_CONTACT_ADDRESS").unwrap_or(defaults.contact_address);

        let session_idle_timeout = std::env::var("PORTAL_SESSION_IDLE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.session_idle_timeout);

        let sweep_interval = std::env::var("PORTAL_SWEEP_INTERVAL_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.sweep_interval);

        Self {
            bind_port,
            contact_address,
            session_idle_timeout,
            sweep_interval,
        }
    }
}
