use crate::algorithms::common::{run_search, SearchResult, SearchStrategy};
use crate::algorithms::frontier::DistanceFrontier;
use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};

/// Uniform-cost (Dijkstra) search: a priority frontier ordered by accumulated
/// distance, ties by coordinate.
///
/// A cell counts as visited when it leaves the heap; duplicates pushed from
/// different parents are skipped on later pops (lazy deletion). Pop order is
/// globally non-decreasing in distance, so the first popped free cell is a
/// nearest spot. With unit edge costs this matches BFS distances exactly and
/// exists to exercise the general-weight machinery.
#[derive(Debug, Default)]
pub struct UniformCostSearch;

impl SearchStrategy for UniformCostSearch {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &Grid, origin: Coordinate) -> Result<SearchResult, SearchError> {
        run_search(grid, origin, DistanceFrontier::new())
    }
}
