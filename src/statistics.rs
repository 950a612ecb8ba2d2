use std::fmt;
use std::time::Duration;

use crate::algorithms::SearchResult;

/// Aggregate of one algorithm's repeated runs against one scenario.
#[derive(Debug, Clone)]
pub struct AlgorithmStat {
    pub scenario: String,
    pub algorithm: &'static str,
    pub result: SearchResult,
    pub mean_elapsed: Duration,
    pub mean_peak_bytes: f64,
}

impl AlgorithmStat {
    /// Distance column value: the found distance, or "-" for unreachable.
    pub fn distance_label(&self) -> String {
        match self.result.distance() {
            Some(distance) => distance.to_string(),
            None => "-".to_string(),
        }
    }
}

impl fmt::Display for AlgorithmStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {}: distance {}, {:.6} s, {:.1} B peak",
            self.scenario,
            self.algorithm,
            self.distance_label(),
            self.mean_elapsed.as_secs_f64(),
            self.mean_peak_bytes,
        )
    }
}
