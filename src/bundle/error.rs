use thiserror::Error;

#[derive(Error, Debug)]
pub enum BundleError {
    #[error("Failed to encode bundle {path}: {source}")]
    Encode {
        path: String,
        source: serde_json::Error,
    },

    #[error("Failed to write bundle {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
