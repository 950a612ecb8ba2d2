use std::fmt;

use rustc_hash::FxHashSet;

use crate::algorithms::a_star::AStarSearch;
use crate::algorithms::bfs::BreadthFirstSearch;
use crate::algorithms::frontier::Frontier;
use crate::algorithms::uniform_cost::UniformCostSearch;
use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};

/// Outcome of a nearest-free-spot search.
///
/// `Unreachable` is a regular business outcome (the lot is full, or every free
/// spot is walled off), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchResult {
    Found { spot: Coordinate, distance: usize },
    Unreachable,
}

impl SearchResult {
    pub fn distance(&self) -> Option<usize> {
        match self {
            SearchResult::Found { distance, .. } => Some(*distance),
            SearchResult::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, SearchResult::Unreachable)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchResult::Found { spot, distance } => {
                write!(f, "spot {} at distance {}", spot, distance)
            }
            SearchResult::Unreachable => write!(f, "no free spot reachable"),
        }
    }
}

/// A nearest-free-spot search over an occupancy grid.
///
/// The origin cell is never a valid target, even when free: the caller's car
/// is standing there. Movement is 4-directional through free cells only, so a
/// spot behind a wall of occupied cells does not count as reachable.
pub trait SearchStrategy {
    /// Short display name used in reports and CSV output.
    fn name(&self) -> &'static str;

    fn search(&self, grid: &Grid, origin: Coordinate) -> Result<SearchResult, SearchError>;
}

/// Every strategy the benchmark compares, in report order.
pub fn all_strategies() -> Vec<Box<dyn SearchStrategy>> {
    vec![
        Box::new(BreadthFirstSearch),
        Box::new(UniformCostSearch),
        Box::new(AStarSearch),
    ]
}

/// Shared traversal loop: expand cells in the frontier's order until a free
/// non-origin cell leaves the frontier, or the frontier drains.
///
/// Visited bookkeeping follows the frontier's discipline: FIFO frontiers mark
/// at enqueue so nothing is enqueued twice; heap frontiers may hold duplicates
/// of a cell and the first pop wins, later pops are skipped.
pub(crate) fn run_search<F: Frontier>(
    grid: &Grid,
    origin: Coordinate,
    mut frontier: F,
) -> Result<SearchResult, SearchError> {
    if !grid.contains(origin) {
        return Err(SearchError::InvalidOrigin {
            origin,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let mut visited: FxHashSet<Coordinate> = FxHashSet::default();
    frontier.push(origin, 0);
    if F::MARKS_AT_ENQUEUE {
        visited.insert(origin);
    }

    while let Some((cell, distance)) = frontier.pop() {
        if !F::MARKS_AT_ENQUEUE && !visited.insert(cell) {
            continue;
        }

        if cell != origin && grid.is_free(cell)? {
            return Ok(SearchResult::Found {
                spot: cell,
                distance,
            });
        }

        for neighbor in grid.neighbors(cell) {
            if visited.contains(&neighbor) || grid.is_occupied(neighbor)? {
                continue;
            }
            if F::MARKS_AT_ENQUEUE {
                visited.insert(neighbor);
            }
            frontier.push(neighbor, distance + 1);
        }
    }

    Ok(SearchResult::Unreachable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::grid::Cell;

    fn origin() -> Coordinate {
        Coordinate::new(0, 0)
    }

    /// Independent check built on the `pathfinding` crate's BFS.
    fn oracle_distance(grid: &Grid, origin: Coordinate) -> Option<usize> {
        let path = pathfinding::prelude::bfs(
            &origin,
            |&c| {
                grid.neighbors(c)
                    .into_iter()
                    .filter(|&n| grid.is_free(n).unwrap())
                    .collect::<Vec<_>>()
            },
            |&c| c != origin && grid.is_free(c).unwrap(),
        );
        path.map(|p| p.len() - 1)
    }

    fn random_grid(rng: &mut StdRng, rows: usize, cols: usize, occupancy: f64) -> Grid {
        let cells = (0..rows)
            .map(|_| {
                (0..cols)
                    .map(|_| {
                        if rng.gen_bool(occupancy) {
                            Cell::Occupied
                        } else {
                            Cell::Free
                        }
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(cells).unwrap()
    }

    #[test]
    fn strategies_agree_on_fixed_lots() {
        let lots = [
            "..\n..",
            ".#\n#.",
            "##\n##",
            "#.#\n...\n#.#",
            ".....\n.###.\n.#.#.\n.###.\n.....",
        ];
        for art in lots {
            let grid = Grid::from_ascii(art).unwrap().with_occupied(origin()).unwrap();
            let distances: Vec<_> = all_strategies()
                .iter()
                .map(|s| s.search(&grid, origin()).unwrap().distance())
                .collect();
            assert_eq!(distances[0], distances[1], "lot:\n{art}");
            assert_eq!(distances[1], distances[2], "lot:\n{art}");
            assert_eq!(distances[0], oracle_distance(&grid, origin()), "lot:\n{art}");
        }
    }

    #[test]
    fn strategies_agree_on_random_lots() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let rows = rng.gen_range(1..12);
            let cols = rng.gen_range(1..12);
            let occupancy = rng.gen_range(0.0..1.0);
            let grid = random_grid(&mut rng, rows, cols, occupancy);
            let origin = Coordinate::new(rng.gen_range(0..rows), rng.gen_range(0..cols));
            let grid = grid.with_occupied(origin).unwrap();

            let expected = oracle_distance(&grid, origin);
            for strategy in all_strategies() {
                let result = strategy.search(&grid, origin).unwrap();
                assert_eq!(
                    result.distance(),
                    expected,
                    "{} disagrees on {rows}x{cols} lot, origin {origin}",
                    strategy.name(),
                );
            }
        }
    }

    #[test]
    fn search_is_idempotent() {
        let grid = Grid::from_ascii("#.\n..").unwrap();
        for strategy in all_strategies() {
            let first = strategy.search(&grid, origin()).unwrap();
            let second = strategy.search(&grid, origin()).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn single_cell_lot_is_unreachable() {
        // The origin is excluded as its own target, free or not.
        let grid = Grid::from_ascii(".").unwrap();
        for strategy in all_strategies() {
            assert_eq!(
                strategy.search(&grid, origin()).unwrap(),
                SearchResult::Unreachable
            );
        }
    }

    #[test]
    fn fully_occupied_lot_is_unreachable() {
        let grid = Grid::from_ascii("###\n#.#\n###")
            .unwrap()
            .with_occupied(Coordinate::new(1, 1))
            .unwrap();
        for strategy in all_strategies() {
            assert_eq!(
                strategy.search(&grid, Coordinate::new(1, 1)).unwrap(),
                SearchResult::Unreachable
            );
        }
    }

    #[test]
    fn free_diagonal_does_not_count() {
        // All four orthogonal neighbors of the origin are occupied; the free
        // diagonal at (0, 0) is not connected by any 4-directional chain.
        let grid = Grid::from_ascii(
            ".#.
             #.#
             .#.",
        )
        .unwrap()
        .with_occupied(Coordinate::new(1, 1))
        .unwrap();
        for strategy in all_strategies() {
            assert_eq!(
                strategy.search(&grid, Coordinate::new(1, 1)).unwrap(),
                SearchResult::Unreachable
            );
        }
    }

    #[test]
    fn any_reachable_spot_is_adjacent() {
        // Free cells are both the targets and the only traversable terrain,
        // so a reachable spot is always one step away from the origin.
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let grid = random_grid(&mut rng, 6, 6, 0.4);
            let origin = Coordinate::new(rng.gen_range(0..6), rng.gen_range(0..6));
            let grid = grid.with_occupied(origin).unwrap();
            for strategy in all_strategies() {
                match strategy.search(&grid, origin).unwrap() {
                    SearchResult::Found { spot, distance } => {
                        assert_eq!(distance, 1);
                        assert_eq!(spot.manhattan(origin), 1);
                    }
                    SearchResult::Unreachable => {}
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_origin_is_rejected() {
        let grid = Grid::from_ascii("..\n..").unwrap();
        for strategy in all_strategies() {
            assert_eq!(
                strategy.search(&grid, Coordinate::new(9, 9)),
                Err(SearchError::InvalidOrigin {
                    origin: Coordinate::new(9, 9),
                    rows: 2,
                    cols: 2,
                })
            );
        }
    }
}
