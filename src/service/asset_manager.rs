//! Asset Manager for template asset URLs
//!
//! The manager is what the templating layer talks to. It owns the location
//! registry plus the global asset policy and exposes a single
//! [`AssetManager::load`] call.

use crate::config::InkConfig;
use crate::error::{AssetError, AssetResult};
use crate::service::location::AssetLocation;
use crate::service::registry::AssetRegistry;
use std::sync::Arc;

/// Global asset policy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetOptions {
    /// Request minified variants
    pub minified: bool,
    /// Version handed to every location
    pub default_version: Option<String>,
    /// Location used when `load` gets no explicit one
    pub default_location: String,
    /// Append `?v=<default_version>` to every URL the manager returns
    pub append_query_string: bool,
}

impl From<&InkConfig> for AssetOptions {
    fn from(config: &InkConfig) -> Self {
        Self {
            minified: config.minify_assets,
            default_version: Some(config.asset_version.clone()),
            default_location: config.default_location.clone(),
            append_query_string: config.append_version_querystring,
        }
    }
}

/// Resolves asset filenames to URLs
#[derive(Debug, Clone)]
pub struct AssetManager {
    registry: AssetRegistry,
    options: AssetOptions,
}

impl AssetManager {
    /// Create a manager, validating the options against the registry
    ///
    /// Only the default location is checked for double versioning here;
    /// other locations are checked when `load` resolves them.
    pub fn new(registry: AssetRegistry, options: AssetOptions) -> AssetResult<Self> {
        if !options.default_location.is_empty() && !registry.contains(&options.default_location)
        {
            log::warn!(
                "Default asset location {:?} is not registered",
                options.default_location
            );
            return Err(AssetError::unknown_location(&options.default_location));
        }

        if options.append_query_string
            && options
                .default_version
                .as_deref()
                .map_or(true, str::is_empty)
        {
            return Err(AssetError::invalid_config(
                "appending the version query string requires an asset version",
            ));
        }

        let manager = Self { registry, options };
        if !manager.options.default_location.is_empty() {
            let default = manager.registry.resolve(&manager.options.default_location)?;
            manager.check_versioning(&manager.options.default_location, default.as_ref())?;
        }

        Ok(manager)
    }

    /// Create a manager from the host configuration
    pub fn from_config(config: &InkConfig, registry: AssetRegistry) -> AssetResult<Self> {
        Self::new(registry, AssetOptions::from(config))
    }

    /// Register a location after construction
    ///
    /// Replacing the default location goes through the same versioning check
    /// as construction.
    pub fn register_location<S, L>(&mut self, name: S, location: L) -> AssetResult<()>
    where
        S: Into<String>,
        L: AssetLocation + 'static,
    {
        let name = name.into();
        if name == self.options.default_location {
            self.check_versioning(&name, &location)?;
        }
        self.registry.register(name, location);
        Ok(())
    }

    /// Resolve `filename` against `location`, or the default location
    ///
    /// An empty location name counts as no name.
    pub fn load(&self, filename: &str, location: Option<&str>) -> AssetResult<String> {
        let name = location
            .filter(|l| !l.is_empty())
            .unwrap_or(self.options.default_location.as_str());
        let instance = self.registry.resolve(name)?;
        self.check_versioning(name, instance.as_ref())?;

        let filename = filename.trim_matches('/');
        let mut url = instance.asset_url(
            filename,
            self.options.minified,
            self.options.default_version.as_deref(),
        )?;

        if self.options.append_query_string {
            if let Some(version) = self.options.default_version.as_deref() {
                url = format!("{url}?v={version}");
            }
        }

        log::debug!("Resolved asset {filename:?} via {name:?} to {url}");
        Ok(url)
    }

    /// Look up a registered location
    pub fn location(&self, name: &str) -> AssetResult<Arc<dyn AssetLocation>> {
        self.registry.resolve(name)
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn options(&self) -> &AssetOptions {
        &self.options
    }

    pub fn default_location(&self) -> &str {
        &self.options.default_location
    }

    /// The two `?v=` mechanisms must not stack on one URL
    fn check_versioning(&self, name: &str, location: &dyn AssetLocation) -> AssetResult<()> {
        if self.options.append_query_string && location.appends_version() {
            log::warn!("Asset location {name:?} already versions its URLs");
            return Err(AssetError::invalid_config(format!(
                "location {name:?} already appends a version query string; \
                 disable append_query_string or use an unversioned location"
            )));
        }
        Ok(())
    }
}
