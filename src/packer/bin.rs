use serde::{Deserialize, Serialize};

use crate::catalog::SensorId;

use super::PackParams;

/// One job's share of a node: the owning job id plus the sensors it runs
/// there. Serializes as `[job-id, [sensor-id, ...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment(pub String, pub Vec<SensorId>);

impl Assignment {
    pub fn job_id(&self) -> &str {
        &self.0
    }

    pub fn sensors(&self) -> &[SensorId] {
        &self.1
    }
}

/// The complete work assignment for one compute node.
///
/// Accumulates assignments during packing; once packing completes it is only
/// read, never modified.
#[derive(Debug, Clone)]
pub struct NodeBundle {
    index: usize,
    assignments: Vec<Assignment>,
    load: usize,
}

impl NodeBundle {
    pub(super) fn new(index: usize) -> Self {
        Self {
            index,
            assignments: Vec::new(),
            load: 0,
        }
    }

    /// Position in the global bundle sequence; also the output file number
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total sensor count across all assignments
    pub fn load(&self) -> usize {
        self.load
    }

    /// Number of distinct job assignments
    pub fn fit_count(&self) -> usize {
        self.assignments.len()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Whether `size` more sensors from a new job fit under both limits
    pub(super) fn accepts(&self, size: usize, params: PackParams) -> bool {
        self.load + size <= params.capacity && self.fit_count() < params.max_fit
    }

    pub(super) fn push(&mut self, job_id: &str, sensors: Vec<SensorId>) {
        self.load += sensors.len();
        self.assignments.push(Assignment(job_id.to_string(), sensors));
    }
}
