use crate::algorithms::common::{run_search, SearchResult, SearchStrategy};
use crate::algorithms::frontier::ManhattanFrontier;
use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};

/// A* search: a priority frontier ordered by f = g + h, with h the Manhattan
/// distance from the candidate cell back to the origin.
///
/// Same lazy visited-on-pop discipline as uniform-cost search. Any path of
/// length g to a cell satisfies g >= h for that cell, so f never decreases
/// along the pop order and the first popped free cell is a nearest spot.
#[derive(Debug, Default)]
pub struct AStarSearch;

impl SearchStrategy for AStarSearch {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(&self, grid: &Grid, origin: Coordinate) -> Result<SearchResult, SearchError> {
        run_search(grid, origin, ManhattanFrontier::new(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f_ties_resolve_by_g_then_coordinate() {
        // (0, 1) and (1, 0) both have g=1, h=1, f=2; the (row, col) tail of
        // the heap ordering picks (0, 1).
        let grid = Grid::from_ascii(
            ".....
             .....
             ..#..
             .....
             .....",
        )
        .unwrap()
        .with_occupied(Coordinate::new(0, 0))
        .unwrap();

        let result = AStarSearch.search(&grid, Coordinate::new(0, 0)).unwrap();
        assert_eq!(
            result,
            SearchResult::Found {
                spot: Coordinate::new(0, 1),
                distance: 1,
            }
        );
    }

    #[test]
    fn interior_origin_finds_adjacent_spot() {
        let grid = Grid::from_ascii(
            "###
             #..
             ###",
        )
        .unwrap()
        .with_occupied(Coordinate::new(1, 1))
        .unwrap();
        let result = AStarSearch.search(&grid, Coordinate::new(1, 1)).unwrap();
        assert_eq!(
            result,
            SearchResult::Found {
                spot: Coordinate::new(1, 2),
                distance: 1,
            }
        );
    }
}
