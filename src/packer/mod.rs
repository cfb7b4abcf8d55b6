mod bin;
mod ffd;
mod splitter;


pub use bin::{Assignment, NodeBundle};
pub use ffd::pack_remainders;
pub use splitter::split_oversized;

use crate::catalog::Job;

/// Maximum total sensor count one node may run (hardware thread limit)
pub const NODE_CAPACITY: usize = 64;

/// Maximum distinct job assignments per node; keeps a node from running out
/// of memory when too many visits share it
pub const MAX_FIT: usize = 5;

/// Per-run packing limits
#[derive(Debug, Clone, Copy)]
pub struct PackParams {
    /// Sensor capacity of one node
    pub capacity: usize,
    /// Assignment limit of one node
    pub max_fit: usize,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            capacity: NODE_CAPACITY,
            max_fit: MAX_FIT,
        }
    }
}

/// Run both packing phases over a loaded catalog.
///
/// Oversized jobs are first carved into full-capacity dedicated bundles, then
/// the sub-capacity remainders are packed first-fit-decreasing. The returned
/// bundles are final: indices are dense from 0 and nothing rebalances them
/// afterwards.
pub fn pack_catalog(jobs: &mut [Job], params: PackParams) -> Vec<NodeBundle> {
    let mut bundles = split_oversized(jobs, params);
    pack_remainders(jobs, params, &mut bundles);
    bundles
}
