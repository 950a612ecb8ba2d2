use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

use crate::error::SearchError;
use crate::grid::{Coordinate, Grid};

/// A traced drive from the origin to the chosen spot, endpoints inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub spot: Coordinate,
    pub distance: usize,
    pub path: Vec<Coordinate>,
}

/// Find the nearest free spot and the route the car takes to it.
///
/// Unlike the benchmark strategies, the tracer models the car rolling down
/// the lot: occupied spots are passed by, not driven around, so traversal
/// covers every in-bounds cell. Each newly discovered cell is tested for
/// vacancy at discovery time; on the first free one the path is rebuilt by
/// walking parent links back to the origin. Returns `None` when the lot
/// holds no free cell at all.
pub fn trace_route(grid: &Grid, origin: Coordinate) -> Result<Option<Route>, SearchError> {
    if !grid.contains(origin) {
        return Err(SearchError::InvalidOrigin {
            origin,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }

    let mut visited: FxHashSet<Coordinate> = FxHashSet::default();
    let mut parents: FxHashMap<Coordinate, Coordinate> = FxHashMap::default();
    let mut queue: VecDeque<(Coordinate, usize)> = VecDeque::new();

    queue.push_back((origin, 0));
    visited.insert(origin);

    while let Some((cell, distance)) = queue.pop_front() {
        for neighbor in grid.neighbors(cell) {
            if !visited.insert(neighbor) {
                continue;
            }
            parents.insert(neighbor, cell);

            if grid.is_free(neighbor)? {
                let mut path = vec![neighbor];
                let mut current = cell;
                while current != origin {
                    path.push(current);
                    current = parents[&current];
                }
                path.push(origin);
                path.reverse();
                return Ok(Some(Route {
                    spot: neighbor,
                    distance: distance + 1,
                    path,
                }));
            }

            queue.push_back((neighbor, distance + 1));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{all_strategies, SearchResult};

    #[test]
    fn route_ends_at_adjacent_spot() {
        let grid = Grid::from_ascii("..\n..")
            .unwrap()
            .with_occupied(Coordinate::new(0, 0))
            .unwrap();
        let route = trace_route(&grid, Coordinate::new(0, 0)).unwrap().unwrap();
        assert_eq!(route.spot, Coordinate::new(1, 0));
        assert_eq!(route.distance, 1);
        assert_eq!(route.path, vec![Coordinate::new(0, 0), Coordinate::new(1, 0)]);
    }

    #[test]
    fn car_passes_occupied_spots() {
        // Both neighbors of the origin are taken; the car drives past one of
        // them to the free spot at (2, 0).
        let grid = Grid::from_ascii(
            ".#.
             #..
             ...",
        )
        .unwrap()
        .with_occupied(Coordinate::new(0, 0))
        .unwrap();
        let origin = Coordinate::new(0, 0);

        let route = trace_route(&grid, origin).unwrap().unwrap();
        assert_eq!(route.distance, 2);
        assert_eq!(route.path.len(), 3);
        assert_eq!(route.path[0], origin);
        assert_eq!(*route.path.last().unwrap(), route.spot);

        // The strict strategies refuse to drive through occupied cells and
        // call the same lot unreachable.
        for strategy in all_strategies() {
            assert_eq!(
                strategy.search(&grid, origin).unwrap(),
                SearchResult::Unreachable
            );
        }
    }

    #[test]
    fn path_is_orthogonally_chained() {
        let grid = Grid::from_ascii(
            "####
             ####
             ###.",
        )
        .unwrap();
        let origin = Coordinate::new(0, 0);
        let route = trace_route(&grid, origin).unwrap().unwrap();

        assert_eq!(route.spot, Coordinate::new(2, 3));
        assert_eq!(route.path.len(), route.distance + 1);
        for pair in route.path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn full_lot_has_no_route() {
        let grid = Grid::from_ascii("##\n##").unwrap();
        assert_eq!(trace_route(&grid, Coordinate::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn single_cell_lot_has_no_route() {
        let grid = Grid::from_ascii(".").unwrap();
        assert_eq!(trace_route(&grid, Coordinate::new(0, 0)).unwrap(), None);
    }

    #[test]
    fn out_of_bounds_origin_is_rejected() {
        let grid = Grid::from_ascii("..").unwrap();
        assert!(matches!(
            trace_route(&grid, Coordinate::new(3, 3)),
            Err(SearchError::InvalidOrigin { .. })
        ));
    }
}
