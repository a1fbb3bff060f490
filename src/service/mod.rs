pub mod asset_manager;
pub mod external;
pub mod ink;
pub mod location;
pub mod registry;

// Re-export commonly used service types for convenience
pub use asset_manager::{AssetManager, AssetOptions};
pub use external::{CdnAssetLocation, ExternalAssetLocation};
pub use ink::Ink;
pub use location::{AssetLocation, LocalAssetLocation, StaticResolver, StaticUrlResolver};
pub use registry::AssetRegistry;
