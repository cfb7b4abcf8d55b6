mod error;
mod writer;


pub use error::BundleError;
pub use writer::{write_bundles, BUNDLE_SUFFIX};
