/// Opaque identifier for one atomic unit of work (a "sensor" or "visit").
/// Never split across bundles.
pub type SensorId = String;

/// A unit of simulation work: an instance catalog plus the ordered list of
/// sensors it must process.
///
/// The job is the sole owner of its sensor sequence. Consumption is tracked
/// with a read cursor over the tail instead of physically removing elements,
/// so the original list stays intact for the lifetime of the job.
#[derive(Debug, Clone)]
pub struct Job {
    id: String,
    sensors: Vec<SensorId>,
    /// Count of sensors not yet handed out; the live range is `sensors[..cursor]`
    cursor: usize,
}

impl Job {
    pub fn new(id: impl Into<String>, sensors: Vec<SensorId>) -> Self {
        let cursor = sensors.len();
        Self {
            id: id.into(),
            sensors,
            cursor,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Number of sensors not yet assigned to a bundle
    pub fn remaining(&self) -> usize {
        self.cursor
    }

    /// Hand out the `n` unconsumed sensors nearest the tail, last-listed first.
    ///
    /// Tail order is a deliberate, documented policy: chunks are carved from
    /// the back of the list, and within a chunk the last-listed sensor comes
    /// first. Two runs over the same catalog always carve identical chunks.
    ///
    /// # Panics
    /// If `n` exceeds `remaining()` — callers size requests from `remaining()`.
    pub fn take(&mut self, n: usize) -> Vec<SensorId> {
        assert!(
            n <= self.cursor,
            "requested {} sensors from job {} with {} remaining",
            n,
            self.id,
            self.cursor
        );
        let start = self.cursor - n;
        let chunk = self.sensors[start..self.cursor]
            .iter()
            .rev()
            .cloned()
            .collect();
        self.cursor = start;
        chunk
    }
}
