use std::time::{Duration, Instant};

use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::algorithms::{all_strategies, SearchResult, SearchStrategy};
use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};
use crate::memory::AllocationSpan;
use crate::scenario::Scenario;
use crate::statistics::AlgorithmStat;

pub const DEFAULT_REPETITIONS: usize = 50;

/// Aggregated timing and memory readings for one (strategy, grid, origin).
#[derive(Debug, Clone)]
pub struct Measurement {
    pub result: SearchResult,
    pub mean_elapsed: Duration,
    pub mean_peak_bytes: f64,
}

/// Runs each strategy repeatedly and aggregates per-run wall-clock time and
/// peak heap use. Runs execute strictly one after another; each one gets a
/// fresh [`AllocationSpan`] so memory readings never bleed into each other.
pub struct BenchmarkHarness {
    repetitions: usize,
}

impl BenchmarkHarness {
    /// `repetitions` is clamped to at least 1.
    pub fn new(repetitions: usize) -> Self {
        BenchmarkHarness {
            repetitions: repetitions.max(1),
        }
    }

    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    pub fn measure(
        &self,
        strategy: &dyn SearchStrategy,
        grid: &Grid,
        origin: Coordinate,
    ) -> Result<Measurement, SearchError> {
        let mut elapsed_total = Duration::ZERO;
        let mut peak_total = 0.0_f64;
        let mut results = Vec::with_capacity(self.repetitions);

        for _ in 0..self.repetitions {
            let span = AllocationSpan::begin();
            let started = Instant::now();
            let result = strategy.search(grid, origin)?;
            let elapsed = started.elapsed();
            let peak = span.peak_bytes();

            elapsed_total += elapsed;
            peak_total += peak as f64;
            results.push(result);
        }

        Ok(Measurement {
            result: reconcile(strategy.name(), &results),
            mean_elapsed: elapsed_total / self.repetitions as u32,
            mean_peak_bytes: peak_total / self.repetitions as f64,
        })
    }

    /// Measure every strategy against every scenario, in input order. Each
    /// scenario's origin is seeded occupied first: the car is standing there,
    /// so the origin cannot be its own spot.
    pub fn run_corpus(&self, scenarios: &[Scenario]) -> Result<Vec<AlgorithmStat>, SearchError> {
        let strategies = all_strategies();
        let mut stats = Vec::with_capacity(scenarios.len() * strategies.len());

        for scenario in scenarios {
            let grid = scenario.grid().with_occupied(scenario.origin())?;
            for strategy in &strategies {
                debug!(
                    "measuring {} on '{}' ({} repetitions)",
                    strategy.name(),
                    scenario.name(),
                    self.repetitions
                );
                let measurement = self.measure(strategy.as_ref(), &grid, scenario.origin())?;
                stats.push(AlgorithmStat {
                    scenario: scenario.name().to_string(),
                    algorithm: strategy.name(),
                    result: measurement.result,
                    mean_elapsed: measurement.mean_elapsed,
                    mean_peak_bytes: measurement.mean_peak_bytes,
                });
            }
        }

        Ok(stats)
    }
}

/// Repetitions of a deterministic search over an immutable grid must agree.
/// If they do not, something interfered with the measurement; keep the most
/// frequent result (earliest on a tie) and flag the disagreement instead of
/// failing the whole run.
fn reconcile(algorithm: &str, results: &[SearchResult]) -> SearchResult {
    let first = results[0];
    if results.iter().all(|result| *result == first) {
        return first;
    }

    warn!("{algorithm}: repetitions disagree on the search result; keeping the most frequent value");

    let mut counts: FxHashMap<SearchResult, usize> = FxHashMap::default();
    for result in results {
        *counts.entry(*result).or_insert(0) += 1;
    }

    let mut modal = first;
    let mut modal_count = 0;
    for result in results {
        let count = counts[result];
        if count > modal_count {
            modal = *result;
            modal_count = count;
        }
    }
    modal
}
