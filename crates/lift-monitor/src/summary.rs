//! Aggregate statistics over completed riders.

/// Sum, mean and median of one per-rider duration.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aggregate {
    pub total:  f64,
    pub mean:   f64,
    pub median: f64,
}

impl Aggregate {
    /// Aggregate `samples`.  An empty slice yields all zeros.
    ///
    /// The median of an even-sized sample is the mean of the two middle
    /// values.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }
        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let total: f64 = sorted.iter().sum();
        let n = sorted.len();
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };
        Self { total, mean: total / n as f64, median }
    }
}

/// Headline numbers of one run.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerformanceSummary {
    /// Riders that issued a request.
    pub riders:              usize,
    /// Riders that reached their destination.
    pub completed_riders:    usize,
    pub wait:                Aggregate,
    pub ride:                Aggregate,
    pub time_to_destination: Aggregate,
    /// Timestamp of the last logged event, in seconds.
    pub completion_time:     f64,
}
