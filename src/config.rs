use lazy_static::lazy_static;
use std::env;

/// Ink release the bundled assets and CDN paths default to
pub const INK_VERSION: &str = "2.2.1";

/// Host of the Ink CDN
pub const INK_CDN_BASE_URL: &str = "cdn.ink.sapo.pt";

/// Namespace segment local assets live under inside the static folder
pub const INK_NAMESPACE: &str = "ink";

/// Name templates use to call the asset loader
pub const TEMPLATE_GLOBAL_NAME: &str = "ink_load_asset";

/// Location names registered by default
pub const SAPO_LOCATION: &str = "sapo";
pub const LOCAL_LOCATION: &str = "local";

/// Asset configuration read by the host application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InkConfig {
    /// INK_ASSET_MINIFY
    pub minify_assets: bool,
    /// INK_ASSET_VERSION
    pub asset_version: String,
    /// INK_ASSET_DEFAULT_LOCATION
    pub default_location: String,
    /// INK_ASSET_APPEND_VERSION_QUERYSTRING
    pub append_version_querystring: bool,

    // Host static file settings
    pub static_url_path: String,
    pub static_folder: String,
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            minify_assets: false,
            asset_version: INK_VERSION.to_string(),
            default_location: SAPO_LOCATION.to_string(),
            append_version_querystring: false,

            static_url_path: "/static".to_string(),
            static_folder: "./static".to_string(),
        }
    }
}

impl InkConfig {
    /// Build the configuration from environment variables
    ///
    /// Unset or blank variables keep their default value.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(v) = value("INK_ASSET_MINIFY") {
            config.minify_assets = parse_bool(&v);
        }
        if let Some(v) = value("INK_ASSET_VERSION") {
            config.asset_version = v;
        }
        if let Some(v) = value("INK_ASSET_DEFAULT_LOCATION") {
            config.default_location = v;
        }
        if let Some(v) = value("INK_ASSET_APPEND_VERSION_QUERYSTRING") {
            config.append_version_querystring = parse_bool(&v);
        }
        if let Some(v) = value("INK_STATIC_URL_PATH") {
            config.static_url_path = v;
        }
        if let Some(v) = value("INK_STATIC_FOLDER") {
            config.static_folder = v;
        }

        config
    }

    /// URL path the Ink static folder is mounted on
    pub fn ink_static_url_path(&self) -> String {
        format!(
            "{}/{}",
            self.static_url_path.trim_end_matches('/'),
            INK_NAMESPACE
        )
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

lazy_static! {
    /// Global configuration instance
    pub static ref CONFIG: InkConfig = InkConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = InkConfig::from_lookup(|_| None);
        assert_eq!(config, InkConfig::default());
        assert!(!config.minify_assets);
        assert_eq!(config.asset_version, INK_VERSION);
        assert_eq!(config.default_location, "sapo");
        assert!(!config.append_version_querystring);
    }

    #[test]
    fn test_overrides() {
        let config = InkConfig::from_lookup(lookup_from(&[
            ("INK_ASSET_MINIFY", "True"),
            ("INK_ASSET_VERSION", "3.0.0"),
            ("INK_ASSET_DEFAULT_LOCATION", "local"),
            ("INK_ASSET_APPEND_VERSION_QUERYSTRING", "1"),
            ("INK_STATIC_URL_PATH", "/assets/"),
        ]));

        assert!(config.minify_assets);
        assert_eq!(config.asset_version, "3.0.0");
        assert_eq!(config.default_location, "local");
        assert!(config.append_version_querystring);
        assert_eq!(config.ink_static_url_path(), "/assets/ink");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = InkConfig::from_lookup(lookup_from(&[
            ("INK_ASSET_VERSION", "   "),
            ("INK_ASSET_MINIFY", "nope"),
        ]));
        assert_eq!(config.asset_version, INK_VERSION);
        assert!(!config.minify_assets);
    }
}
