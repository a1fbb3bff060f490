//! Remote asset locations
//!
//! [`ExternalAssetLocation`] builds URLs from a `{token}` pattern such as
//! `//{base_url}/{version}`. [`CdnAssetLocation`] is the Ink CDN flavour with
//! its own minified naming.

use crate::config::{INK_CDN_BASE_URL, INK_VERSION};
use crate::error::{AssetError, AssetResult};
use crate::service::location::{default_minified_filename, split_extension, AssetLocation};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};

/// Default pattern for external locations
pub const DEFAULT_URL_PATTERN: &str = "//{base_url}";

/// Pattern used by the Ink CDN
pub const CDN_URL_PATTERN: &str = "//{base_url}/{version}";

/// Token names every external location understands
pub const BASE_URL_TOKEN: &str = "base_url";
pub const VERSION_TOKEN: &str = "version";

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{(\w+)\}").expect("valid placeholder regex");
}

/// Assets hosted under a remote base URL
#[derive(Debug, Clone)]
pub struct ExternalAssetLocation {
    base_url: String,
    url_pattern: String,
    tokens: HashMap<String, String>,
}

impl ExternalAssetLocation {
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self::with_pattern(base_url, DEFAULT_URL_PATTERN)
    }

    pub fn with_pattern<S: Into<String>, P: Into<String>>(base_url: S, url_pattern: P) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let mut tokens = HashMap::new();
        tokens.insert(BASE_URL_TOKEN.to_string(), base_url.clone());

        let mut location = Self {
            base_url,
            url_pattern: String::new(),
            tokens,
        };
        location.set_url_pattern(url_pattern);
        location
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_pattern(&self) -> &str {
        &self.url_pattern
    }

    pub fn tokens(&self) -> &HashMap<String, String> {
        &self.tokens
    }

    pub fn set_url_pattern<P: Into<String>>(&mut self, url_pattern: P) {
        self.url_pattern = url_pattern.into().trim_end_matches('/').to_string();
    }

    /// Bind a custom token value
    pub fn set_token<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.tokens.insert(name.into(), value.into());
    }

    pub fn with_url_pattern<P: Into<String>>(mut self, url_pattern: P) -> Self {
        self.set_url_pattern(url_pattern);
        self
    }

    pub fn with_token<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.set_token(name, value);
        self
    }

    /// Substitute every placeholder of the URL pattern
    ///
    /// `version` falls back to [`INK_VERSION`]. Fails with the full list of
    /// placeholders that have no bound value.
    pub fn compile_base_url(&self, version: Option<&str>) -> AssetResult<String> {
        let version = non_empty(version).unwrap_or(INK_VERSION);
        let lookup = |name: &str| -> Option<&str> {
            if name == VERSION_TOKEN {
                Some(version)
            } else {
                self.tokens.get(name).map(String::as_str)
            }
        };

        let unknown: BTreeSet<&str> = PLACEHOLDER
            .captures_iter(&self.url_pattern)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|name| lookup(name).is_none())
            .collect();
        if !unknown.is_empty() {
            log::warn!(
                "url pattern {:?} has unbound tokens: {:?}",
                self.url_pattern,
                unknown
            );
            return Err(AssetError::unknown_token(unknown));
        }

        let compiled = PLACEHOLDER.replace_all(&self.url_pattern, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_default().to_string()
        });
        Ok(compiled.into_owned())
    }

    /// Join an already renamed filename onto the compiled base
    fn url_for(&self, filename: String, version: Option<&str>) -> AssetResult<String> {
        let version = non_empty(version);
        let filename = match version {
            Some(v) => format!("{filename}?v={v}"),
            None => filename,
        };

        let base = self.compile_base_url(version)?;
        Ok(format!("{base}/{filename}"))
    }
}

impl AssetLocation for ExternalAssetLocation {
    fn asset_url(
        &self,
        filename: &str,
        minified: bool,
        version: Option<&str>,
    ) -> AssetResult<String> {
        let filename = if minified {
            self.minified_filename(filename)?
        } else {
            filename.to_string()
        };
        self.url_for(filename, version)
    }

    fn appends_version(&self) -> bool {
        true
    }
}

/// The Ink CDN
///
/// Stylesheets are minified as `name-min.css`, everything else as
/// `name.min.ext`.
#[derive(Debug, Clone)]
pub struct CdnAssetLocation {
    inner: ExternalAssetLocation,
    pinned_version: Option<String>,
}

impl CdnAssetLocation {
    pub fn new() -> Self {
        Self::with_base_url(INK_CDN_BASE_URL)
    }

    /// CDN flavour served from a mirror host
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            inner: ExternalAssetLocation::with_pattern(base_url, CDN_URL_PATTERN),
            pinned_version: None,
        }
    }

    /// Always resolve against `version`, whatever the caller asks for
    pub fn pinned_to<S: Into<String>>(mut self, version: S) -> Self {
        self.pinned_version = Some(version.into());
        self
    }

    pub fn pinned_version(&self) -> Option<&str> {
        self.pinned_version.as_deref()
    }

    pub fn external(&self) -> &ExternalAssetLocation {
        &self.inner
    }

    pub fn compile_base_url(&self, version: Option<&str>) -> AssetResult<String> {
        self.inner
            .compile_base_url(self.pinned_version.as_deref().or(version))
    }
}

impl Default for CdnAssetLocation {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetLocation for CdnAssetLocation {
    fn asset_url(
        &self,
        filename: &str,
        minified: bool,
        version: Option<&str>,
    ) -> AssetResult<String> {
        let version = self.pinned_version.as_deref().or(version);
        let filename = if minified {
            self.minified_filename(filename)?
        } else {
            filename.to_string()
        };
        self.inner.url_for(filename, version)
    }

    fn minified_filename(&self, filename: &str) -> AssetResult<String> {
        let (stem, ext) = split_extension(filename)?;
        if ext == "css" {
            Ok(format!("{stem}-min.{ext}"))
        } else {
            default_minified_filename(filename)
        }
    }

    fn appends_version(&self) -> bool {
        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jquery() -> ExternalAssetLocation {
        ExternalAssetLocation::new("https://code.jquery.com/")
    }

    #[test]
    fn test_base_url_is_normalized() {
        let location = jquery();
        assert_eq!(location.base_url(), "https://code.jquery.com");
        assert_eq!(
            location.tokens().get(BASE_URL_TOKEN).map(String::as_str),
            Some("https://code.jquery.com")
        );

        let location = location.with_url_pattern("{base_url}/libs/");
        assert_eq!(location.url_pattern(), "{base_url}/libs");
    }

    #[test]
    fn test_minified_filename() {
        let location = jquery();
        assert_eq!(
            location.minified_filename("afile.with.dots.js").unwrap(),
            "afile.with.dots.min.js"
        );
        assert_eq!(
            location.minified_filename("afile_with_underscores.css").unwrap(),
            "afile_with_underscores.min.css"
        );
    }

    #[test]
    fn test_compile_base_url() {
        let mut location = jquery();
        location.set_token("custom_token", "custom_value");
        location.set_token("test_token", "ink_test");
        location.set_url_pattern("{base_url}/{custom_token}?test_token={test_token}");

        assert_eq!(
            location.compile_base_url(None).unwrap(),
            "https://code.jquery.com/custom_value?test_token=ink_test"
        );
    }

    #[test]
    fn test_compile_base_url_is_repeatable() {
        let location = jquery().with_url_pattern("{base_url}/{version}");
        let first = location.compile_base_url(Some("1.2")).unwrap();
        let second = location.compile_base_url(Some("1.2")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, "https://code.jquery.com/1.2");
    }

    #[test]
    fn test_compile_base_url_version_defaults() {
        let location = jquery().with_url_pattern("{base_url}/{version}");
        assert_eq!(
            location.compile_base_url(None).unwrap(),
            format!("https://code.jquery.com/{INK_VERSION}")
        );
        assert_eq!(
            location.compile_base_url(Some("")).unwrap(),
            format!("https://code.jquery.com/{INK_VERSION}")
        );
    }

    #[test]
    fn test_compile_base_url_with_invalid_tokens() {
        // Only base_url and version are bound by default
        let location = jquery().with_url_pattern("{base_url}/{bogus}/{another}/{bogus}");

        match location.compile_base_url(None) {
            Err(AssetError::UnknownToken { tokens }) => {
                assert_eq!(tokens, vec!["another".to_string(), "bogus".to_string()]);
            }
            other => panic!("expected unknown token error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_token_fails_asset_url() {
        let location = jquery().with_url_pattern("{base_url}/{bogus}");
        let err = location.asset_url("app.js", false, None).unwrap_err();
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_asset_url_minified_versioned() {
        let location = ExternalAssetLocation::new("cdn.ink.sapo.pt");
        assert_eq!(
            location.asset_url("demo.css", true, Some(INK_VERSION)).unwrap(),
            format!("//cdn.ink.sapo.pt/demo.min.css?v={INK_VERSION}")
        );
    }

    #[test]
    fn test_asset_url_without_version() {
        let location = ExternalAssetLocation::new("cdn.example.com");
        assert_eq!(
            location.asset_url("demo.js", false, None).unwrap(),
            "//cdn.example.com/demo.js"
        );
        assert!(location.appends_version());
    }

    #[test]
    fn test_cdn_minified_filename() {
        let cdn = CdnAssetLocation::new();
        assert_eq!(
            cdn.minified_filename("development.css").unwrap(),
            "development-min.css"
        );
        assert_eq!(
            cdn.minified_filename("development.js").unwrap(),
            "development.min.js"
        );
        assert!(matches!(
            cdn.minified_filename("development"),
            Err(AssetError::FilenameFormat { .. })
        ));
    }

    #[test]
    fn test_cdn_asset_url() {
        let cdn = CdnAssetLocation::new();
        assert_eq!(
            cdn.asset_url("application.css", true, Some("1.0")).unwrap(),
            "//cdn.ink.sapo.pt/1.0/application-min.css?v=1.0"
        );
        assert_eq!(
            cdn.asset_url("ink.js", false, None).unwrap(),
            format!("//cdn.ink.sapo.pt/{INK_VERSION}/ink.js")
        );
    }

    #[test]
    fn test_cdn_mirror_and_pinned_version() {
        let cdn = CdnAssetLocation::with_base_url("mirror.example.org/").pinned_to("3.1.10");
        assert_eq!(cdn.pinned_version(), Some("3.1.10"));
        assert_eq!(
            cdn.asset_url("ink.css", false, Some("1.0")).unwrap(),
            "//mirror.example.org/3.1.10/ink.css?v=3.1.10"
        );
        assert_eq!(
            cdn.compile_base_url(None).unwrap(),
            "//mirror.example.org/3.1.10"
        );
    }
}
