use crate::catalog::Job;

use super::{NodeBundle, PackParams};

/// Carve every oversized job into full-capacity dedicated bundles.
///
/// A job holding at least `capacity` unconsumed sensors can never share a
/// node, so each full-capacity chunk gets a node of its own: one assignment,
/// `load == capacity`. Dedicated bundles are indexed 0, 1, 2, ... in creation
/// order, all ahead of any packing bundle.
///
/// On return every job satisfies `remaining() < capacity`.
pub fn split_oversized(jobs: &mut [Job], params: PackParams) -> Vec<NodeBundle> {
    let mut bundles = Vec::new();

    for job in jobs.iter_mut() {
        while job.remaining() >= params.capacity {
            let sensors = job.take(params.capacity);
            let mut bundle = NodeBundle::new(bundles.len());
            bundle.push(job.id(), sensors);
            bundles.push(bundle);
        }
    }

    bundles
}
