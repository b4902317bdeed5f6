use std::sync::Arc;

use partner_portal::config::SiteConfig;
use partner_portal::onboarding::{OnboardingManager, spawn_prune_task};
use partner_portal::site::portal_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SiteConfig::from_env();

    eprintln!("🎨 Partner Portal v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Site:    http://0.0.0.0:{}/", config.bind_port);
    eprintln!(
        "   Status:  http://0.0.0.0:{}/api/onboarding/{{id}}/status",
        config.bind_port
    );
    eprintln!("   Contact: {}\n", config.contact_address);

    let manager = OnboardingManager::new();
    let _prune_handle = spawn_prune_task(
        Arc::clone(&manager),
        config.sweep_interval,
        config.session_idle_timeout,
    );

    let app = portal_router(config.clone(), manager);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.bind_port)).await?;
    tracing::info!(port = config.bind_port, "Partner portal started");
    axum::serve(listener, app).await?;

    Ok(())
}
