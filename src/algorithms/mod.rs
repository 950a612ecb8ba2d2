pub mod a_star;
pub mod bfs;
pub mod common;
pub mod frontier;
pub mod route;
pub mod uniform_cost;

pub use a_star::AStarSearch;
pub use bfs::BreadthFirstSearch;
pub use common::{all_strategies, SearchResult, SearchStrategy};
pub use route::{trace_route, Route};
pub use uniform_cost::UniformCostSearch;
