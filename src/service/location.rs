//! Asset locations
//!
//! An [`AssetLocation`] knows where an asset physically lives and turns a
//! bare filename into the URL a browser should fetch. This module holds the
//! trait, the shared minified-name rule and the local static folder location.
//! Remote locations live in [`crate::service::external`].

use crate::config::INK_NAMESPACE;
use crate::error::{AssetError, AssetResult};
use std::fmt;
use std::sync::Arc;

/// Anything that can turn a filename into a final URL
pub trait AssetLocation: fmt::Debug + Send + Sync {
    /// Build the URL for `filename`
    ///
    /// `version` of `None` means "use the library default" for locations
    /// that version their URLs.
    fn asset_url(&self, filename: &str, minified: bool, version: Option<&str>)
        -> AssetResult<String>;

    /// Name of the minified variant of `filename`
    fn minified_filename(&self, filename: &str) -> AssetResult<String> {
        default_minified_filename(filename)
    }

    /// Whether this location appends its own `?v=` query to URLs
    fn appends_version(&self) -> bool {
        false
    }
}

/// Split a filename on the last `.` of its final path segment
pub fn split_extension(filename: &str) -> AssetResult<(&str, &str)> {
    let name_start = filename.rfind('/').map_or(0, |i| i + 1);
    match filename[name_start..].rfind('.') {
        Some(dot) => {
            let dot = name_start + dot;
            Ok((&filename[..dot], &filename[dot + 1..]))
        }
        None => Err(AssetError::filename_format(filename)),
    }
}

/// `name.ext` -> `name.min.ext`
pub fn default_minified_filename(filename: &str) -> AssetResult<String> {
    let (stem, ext) = split_extension(filename)?;
    Ok(format!("{stem}.min.{ext}"))
}

/// Host hook that maps a path inside a static endpoint to a URL
pub trait StaticResolver: fmt::Debug + Send + Sync {
    fn resolve_static(&self, endpoint: &str, path: &str) -> String;
}

/// Resolver that joins paths onto the static URL prefix the host serves
#[derive(Debug, Clone)]
pub struct StaticUrlResolver {
    static_url_path: String,
}

impl StaticUrlResolver {
    pub fn new<S: Into<String>>(static_url_path: S) -> Self {
        let path: String = static_url_path.into();
        Self {
            static_url_path: path.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for StaticUrlResolver {
    fn default() -> Self {
        Self::new("/static")
    }
}

impl StaticResolver for StaticUrlResolver {
    fn resolve_static(&self, _endpoint: &str, path: &str) -> String {
        format!("{}/{}", self.static_url_path, path.trim_start_matches('/'))
    }
}

/// Assets served from the host's own static folder, under `ink/`
#[derive(Debug, Clone)]
pub struct LocalAssetLocation {
    directory: String,
    resolver: Arc<dyn StaticResolver>,
}

impl LocalAssetLocation {
    pub fn new<S: Into<String>>(directory: S, resolver: Arc<dyn StaticResolver>) -> Self {
        Self {
            directory: directory.into(),
            resolver,
        }
    }

    /// Local location resolving through the given static URL prefix
    pub fn with_static_url_path<S: Into<String>>(static_url_path: S) -> Self {
        Self::new("static", Arc::new(StaticUrlResolver::new(static_url_path)))
    }

    /// Static endpoint name handed to the resolver
    pub fn directory(&self) -> &str {
        &self.directory
    }
}

impl Default for LocalAssetLocation {
    fn default() -> Self {
        Self::new("static", Arc::new(StaticUrlResolver::default()))
    }
}

impl AssetLocation for LocalAssetLocation {
    fn asset_url(
        &self,
        filename: &str,
        minified: bool,
        _version: Option<&str>,
    ) -> AssetResult<String> {
        let filename = if minified {
            self.minified_filename(filename)?
        } else {
            filename.to_string()
        };

        let path = format!("{INK_NAMESPACE}/{filename}");
        Ok(self.resolver.resolve_static(&self.directory, &path))
    }
}
