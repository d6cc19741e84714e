//! # grid_search
//!
//! Traversal and shortest paths on a 4-connected grid. A [PathingGrid] holds walls, a start and a
//! goal; a run with one of four interchangeable [Strategy] values produces the order in which
//! cells were visited together with the path from start to goal:
//!
//! - [Strategy::Bfs], breadth-first,
//! - [Strategy::Dfs], depth-first (the path is not necessarily shortest),
//! - [Strategy::Dijkstra], uniform-cost search,
//! - [Strategy::AStar], A* with the
//!   [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//!
//! All moves cost one step. The results are plain sequences, so a renderer can replay the visit
//! order at its own pace without touching the grid again.
//!
//! ```
//! use grid_search::{create_grid, run_search, toggle_wall, Strategy};
//! use grid_util::point::Point;
//!
//! let mut grid = create_grid(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! toggle_wall(&mut grid, Point::new(1, 1)).unwrap();
//! let result = run_search(&grid, Strategy::AStar).unwrap();
//! assert!(result.reached);
//! assert_eq!(result.path.len(), 5);
//! ```
pub mod error;
pub mod frontier;
pub mod path;
pub mod pathing_grid;
pub mod search_context;
pub mod solver;

use grid_util::point::Point;

pub use crate::error::{EndpointIssue, Result, SearchError};
pub use crate::path::{is_valid_path, path_cost};
pub use crate::pathing_grid::PathingGrid;
pub use crate::solver::{GridSolver, SearchResult, Strategy};

/// Maximum number of neighbours of a cell on a 4-connected grid.
pub const N_SMALLVEC_SIZE: usize = 4;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 50;
/// (row, col) of the start in the default layout.
pub const DEFAULT_START: (usize, usize) = (10, 15);
/// (row, col) of the goal in the default layout.
pub const DEFAULT_GOAL: (usize, usize) = (10, 35);

pub fn manhattan_distance(p1: &Point, p2: &Point) -> i32 {
    (p1.x - p2.x).abs() + (p1.y - p2.y).abs()
}

/// Creates a wall-free grid. Fails if an endpoint is out of bounds or start and goal coincide.
pub fn create_grid(rows: usize, cols: usize, start: Point, goal: Point) -> Result<PathingGrid> {
    PathingGrid::new(rows, cols, start, goal)
}

/// Flips the wall state of a cell. Does nothing on the start or goal.
pub fn toggle_wall(grid: &mut PathingGrid, cell: Point) -> Result<()> {
    grid.toggle_wall(cell)
}

pub fn move_start(grid: &mut PathingGrid, cell: Point) -> Result<()> {
    grid.move_start(cell)
}

pub fn move_goal(grid: &mut PathingGrid, cell: Point) -> Result<()> {
    grid.move_goal(cell)
}

pub fn run_search(grid: &PathingGrid, strategy: Strategy) -> Result<SearchResult> {
    grid.run_search(strategy)
}
