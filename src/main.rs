//! Ink asset sample server
//!
//! Serves a page whose stylesheet and script URLs are resolved by the asset
//! manager, plus a small JSON API to inspect resolutions.

use rocket::{launch, Build, Rocket};
use rocket_prometheus::PrometheusMetrics;

use ink_assets::config::{InkConfig, TEMPLATE_GLOBAL_NAME};
use ink_assets::service::Ink;
use ink_assets::{build_rocket, INK_VERSION};

/// Configure the Rocket application
fn configure_rocket(config: &InkConfig) -> Rocket<Build> {
    let ink = match Ink::new(config) {
        Ok(ink) => ink,
        Err(e) => {
            log::error!("Failed to initialize assets: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Asset loader available to templates as {TEMPLATE_GLOBAL_NAME}, locations: {:?}",
        ink.assets().registry().names()
    );

    let prometheus = PrometheusMetrics::new();
    build_rocket(config, ink)
        // for prometheus telemetry
        .attach(prometheus.clone())
        .mount("/metrics", prometheus)
}

/// Application entry point
#[launch]
fn rocket() -> _ {
    // init log
    tracing_subscriber::fmt::init();

    // Load environment variables before the config is read
    dotenv::dotenv().ok();

    log::info!("Ink asset server");
    log::info!("Ink version: {INK_VERSION}");

    configure_rocket(&ink_assets::CONFIG)
}
