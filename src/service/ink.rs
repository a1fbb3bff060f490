//! Ink host integration
//!
//! Builds the application-wide [`AssetManager`] with the two stock
//! locations: the Ink CDN under `sapo` and the bundled static files under
//! `local`.

use crate::config::{InkConfig, LOCAL_LOCATION, SAPO_LOCATION, TEMPLATE_GLOBAL_NAME};
use crate::error::AssetResult;
use crate::service::asset_manager::{AssetManager, AssetOptions};
use crate::service::external::CdnAssetLocation;
use crate::service::location::{AssetLocation, LocalAssetLocation};
use crate::service::registry::AssetRegistry;
use std::sync::Arc;

/// Application-wide asset state
#[derive(Debug, Clone)]
pub struct Ink {
    assets: Arc<AssetManager>,
}

impl Ink {
    /// Set up the asset manager from configuration
    pub fn new(config: &InkConfig) -> AssetResult<Self> {
        Self::with_locations(config, std::iter::empty::<(String, Arc<dyn AssetLocation>)>())
    }

    /// Like [`Ink::new`], with extra locations registered after the stock ones
    pub fn with_locations<I>(config: &InkConfig, extra: I) -> AssetResult<Self>
    where
        I: IntoIterator<Item = (String, Arc<dyn AssetLocation>)>,
    {
        let mut registry = default_registry(config);
        for (name, location) in extra {
            registry.register_shared(name, location);
        }

        let options = AssetOptions::from(config);
        log::info!(
            "Ink assets: default location {:?}, version {:?}, minified {}, append query string {}",
            options.default_location,
            options.default_version,
            options.minified,
            options.append_query_string
        );

        let assets = AssetManager::new(registry, options)?;
        Ok(Self {
            assets: Arc::new(assets),
        })
    }

    pub fn assets(&self) -> &Arc<AssetManager> {
        &self.assets
    }

    /// Entry point templates call as `ink_load_asset`
    pub fn load_asset(&self, filename: &str, location: Option<&str>) -> AssetResult<String> {
        self.assets.load(filename, location)
    }

    pub fn template_global_name(&self) -> &'static str {
        TEMPLATE_GLOBAL_NAME
    }
}

/// Registry holding the stock `sapo` and `local` locations
pub fn default_registry(config: &InkConfig) -> AssetRegistry {
    let mut registry = AssetRegistry::new();
    registry.register(SAPO_LOCATION, CdnAssetLocation::new());
    registry.register(
        LOCAL_LOCATION,
        LocalAssetLocation::with_static_url_path(&config.static_url_path),
    );
    registry
}
