use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("Catalog {path} is not a JSON object of job id -> sensor list: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}
