use crate::error::{AssetError, AssetResult};
use crate::service::location::AssetLocation;
use std::collections::HashMap;
use std::sync::Arc;

/// Symbolic name -> asset location
#[derive(Debug, Clone, Default)]
pub struct AssetRegistry {
    locations: HashMap<String, Arc<dyn AssetLocation>>,
}

impl AssetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `location` under `name`, replacing any previous entry
    pub fn register<S, L>(&mut self, name: S, location: L)
    where
        S: Into<String>,
        L: AssetLocation + 'static,
    {
        self.register_shared(name, Arc::new(location));
    }

    /// Register an already shared location
    pub fn register_shared<S: Into<String>>(&mut self, name: S, location: Arc<dyn AssetLocation>) {
        let name = name.into();
        if self.locations.insert(name.clone(), location).is_some() {
            log::debug!("Replaced asset location {name:?}");
        } else {
            log::debug!("Registered asset location {name:?}");
        }
    }

    pub fn with_location<S, L>(mut self, name: S, location: L) -> Self
    where
        S: Into<String>,
        L: AssetLocation + 'static,
    {
        self.register(name, location);
        self
    }

    /// Look up a location by name
    pub fn resolve(&self, name: &str) -> AssetResult<Arc<dyn AssetLocation>> {
        if name.is_empty() {
            return Err(AssetError::unknown_location(""));
        }

        self.locations
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::unknown_location(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        !name.is_empty() && self.locations.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn AssetLocation>)> {
        self.locations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
