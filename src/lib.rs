//! Ink asset URL resolution
//!
//! Resolves logical asset filenames (stylesheets, scripts) to the URL a
//! browser should fetch: from the host's static folder or from a CDN, with
//! optional minified names and cache-busting version tokens. The Rocket
//! glue in [`route`] and [`build_rocket`] shows how a host application
//! exposes the resolver to its templates.

pub mod config;
pub mod error;
pub mod route;
pub mod service;

// Re-export commonly used types for convenience
pub use config::{InkConfig, CONFIG, INK_VERSION};
pub use error::{AssetError, AssetResult};

use rocket::fs::FileServer;
use rocket::{Build, Rocket};
use std::path::Path;

use crate::error::{bad_request, internal_error, not_found};
use crate::service::Ink;

/// Assemble the host application around an initialized [`Ink`]
pub fn build_rocket(config: &InkConfig, ink: Ink) -> Rocket<Build> {
    let mut rocket = rocket::build()
        .manage(ink)
        .mount("/", rocket::routes![route::assets::index])
        .mount("/assets", route::assets::routes())
        .register("/", rocket::catchers![not_found, internal_error, bad_request]);

    let static_url_path = utils::normalize_prefix(&config.static_url_path);
    if Path::new(&config.static_folder).is_dir() && !static_url_path.is_empty() {
        rocket = rocket.mount(
            static_url_path.as_str(),
            FileServer::from(&config.static_folder),
        );
    } else {
        log::warn!(
            "Static folder {:?} not found, local assets will not be served",
            config.static_folder
        );
    }

    rocket
}

/// Utility functions for the application
pub mod utils {
    /// `static/` -> `/static`, blank stays blank
    pub fn normalize_prefix(prefix: &str) -> String {
        let trimmed = prefix.trim().trim_matches('/');
        if trimmed.is_empty() {
            return String::new();
        }
        format!("/{trimmed}")
    }
}

/// Prelude module for commonly used imports
pub mod prelude {
    pub use crate::config::{InkConfig, CONFIG, INK_VERSION};
    pub use crate::error::{AssetError, AssetResult};
    pub use crate::service::{
        AssetLocation, AssetManager, AssetOptions, AssetRegistry, CdnAssetLocation,
        ExternalAssetLocation, Ink, LocalAssetLocation, StaticResolver,
    };
}
