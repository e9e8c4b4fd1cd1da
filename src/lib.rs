//! # grid_traversal
//!
//! Searches over implicit graphs and the grids they usually run on. Implements
//! lazy [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search),
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! with an early-exit variant and a variant keeping every shortest path, and
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Graphs are given as
//! a start state and a successor closure, so states can be anything hashable:
//! grid points, points with a facing, or whole puzzle configurations.
//!
//! [BorderedGrid] wraps a grid in a ring of sentinel cells so that "off the
//! grid" and "wall" become the same check, and neighbour queries need no bounds
//! checks.
//!
//! Edge weights must be non-negative. Costs are generic over
//! [num_traits::Zero] + [Ord] + [Copy]; pick an integer type wide enough for
//! the sums involved.
pub mod bordered_grid;
pub mod grid;
pub mod point;
pub mod regions;
pub mod search;

pub use bordered_grid::BorderedGrid;
pub use grid::{Grid, GridError, GridView};
pub use point::{Direction, Point};
pub use regions::Regions;
pub use search::all_paths::{all_shortest_paths, AllShortestPaths};
pub use search::astar::astar;
pub use search::bfs::{bfs, bfs_path, bfs_with_parents, Bfs, BfsWithParents};
pub use search::dijkstra::{dijkstra, dijkstra_until, ShortestPaths};
pub use search::{Edge, FxIndexMap, FxIndexSet};
