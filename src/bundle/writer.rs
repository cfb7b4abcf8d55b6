use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::packer::{Assignment, NodeBundle};

use super::BundleError;

/// File name suffix of every bundle document
pub const BUNDLE_SUFFIX: &str = ".json";

/// Every bundle file wraps its assignment list under this single fixed key,
/// regardless of which node the file is for; consumers identify the node by
/// file name, not by the key.
#[derive(Serialize)]
struct BundleDoc<'a> {
    node0: &'a [Assignment],
}

/// Write one JSON document per bundle at `<prefix><index>.json`.
///
/// Files are independent and self-contained, so there is no rollback: the
/// first failure aborts the run and any files already written stay in place.
/// A re-run over the same catalog regenerates every file byte-identically.
///
/// Returns the written paths in bundle-index order.
pub fn write_bundles(bundles: &[NodeBundle], prefix: &str) -> Result<Vec<PathBuf>, BundleError> {
    let mut written = Vec::with_capacity(bundles.len());

    for bundle in bundles {
        let path = PathBuf::from(format!("{prefix}{}{BUNDLE_SUFFIX}", bundle.index()));

        let doc = BundleDoc {
            node0: bundle.assignments(),
        };
        let text = serde_json::to_string(&doc).map_err(|source| BundleError::Encode {
            path: path.display().to_string(),
            source,
        })?;

        fs::write(&path, text).map_err(|source| BundleError::Write {
            path: path.display().to_string(),
            source,
        })?;

        written.push(path);
    }

    Ok(written)
}
