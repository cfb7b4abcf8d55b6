use std::cmp::Reverse;

use crate::catalog::Job;

use super::{NodeBundle, PackParams};

/// Pack sub-capacity job remainders first-fit-decreasing.
///
/// Remainders are visited largest first; ties keep their catalog load order
/// (the sort is stable and the key is remaining size alone). Each remainder
/// goes whole into the first open packing bundle that has room for its
/// sensors and has not hit the assignment limit; when no open bundle
/// qualifies, a fresh bundle is opened right after the highest index used so
/// far. Splitting ended with the dedicated phase — a remainder is never
/// divided here.
///
/// Jobs with nothing remaining are skipped, so a zero-sensor catalog entry
/// contributes no assignment to any bundle.
///
/// Minimizing the bundle count is a goal, not a guarantee: first-fit over a
/// descending order is a heuristic and accepted as such.
pub fn pack_remainders(jobs: &mut [Job], params: PackParams, bundles: &mut Vec<NodeBundle>) {
    let mut order: Vec<usize> = (0..jobs.len())
        .filter(|&i| jobs[i].remaining() > 0)
        .collect();
    order.sort_by_key(|&i| Reverse(jobs[i].remaining()));

    // Dedicated bundles are already full by construction; only bundles opened
    // during this phase are candidates.
    let first_open = bundles.len();

    for idx in order {
        let size = jobs[idx].remaining();
        let sensors = jobs[idx].take(size);

        let slot = bundles[first_open..]
            .iter()
            .position(|b| b.accepts(size, params));

        match slot {
            Some(offset) => bundles[first_open + offset].push(jobs[idx].id(), sensors),
            None => {
                let mut bundle = NodeBundle::new(bundles.len());
                bundle.push(jobs[idx].id(), sensors);
                bundles.push(bundle);
            }
        }
    }
}
