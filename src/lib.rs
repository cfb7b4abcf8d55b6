// Public API exports
pub mod bundle;
pub mod catalog;
pub mod packer;

// Re-export main types for convenience
pub use catalog::{load_catalog, CatalogError, Job, SensorId};

pub use packer::{
    pack_catalog, pack_remainders, split_oversized, Assignment, NodeBundle, PackParams, MAX_FIT,
    NODE_CAPACITY,
};

pub use bundle::{write_bundles, BundleError, BUNDLE_SUFFIX};
