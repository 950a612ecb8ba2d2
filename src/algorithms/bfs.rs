use crate::algorithms::common::{run_search, SearchResult, SearchStrategy};
use crate::algorithms::frontier::FifoFrontier;
use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};

/// Breadth-first search: expands the frontier in strict discovery order.
///
/// Cells are marked visited as they are enqueued, so the queue never holds a
/// cell twice. Because every move costs one, layer order equals distance
/// order and the first dequeued free cell is a nearest spot.
#[derive(Debug, Default)]
pub struct BreadthFirstSearch;

impl SearchStrategy for BreadthFirstSearch {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &Grid, origin: Coordinate) -> Result<SearchResult, SearchError> {
        run_search(grid, origin, FifoFrontier::new())
    }
}
