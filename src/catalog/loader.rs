use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::{CatalogError, Job, SensorId};

/// Load a job catalog from a JSON document shaped as an object mapping
/// job id (string) to an array of sensor ids (strings).
///
/// JSON objects carry no reliable iteration order, so the loader imposes an
/// explicit total order: jobs come back sorted ascending by job id. Every
/// later stage inherits its determinism from this ordering.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Job>, CatalogError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    // BTreeMap both validates the string -> [string] shape and sorts by key
    let raw: BTreeMap<String, Vec<SensorId>> =
        serde_json::from_str(&text).map_err(|source| CatalogError::Malformed {
            path: path.display().to_string(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .map(|(id, sensors)| Job::new(id, sensors))
        .collect())
}
