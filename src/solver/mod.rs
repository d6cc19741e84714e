use crate::error::{Result, SearchError};
use crate::frontier::{Discipline, Frontier};
use crate::path::{path_cost, reconstruct};
use crate::pathing_grid::PathingGrid;
use crate::search_context::SearchContext;
use core::fmt;
use core::str::FromStr;
use grid_util::point::Point;
use log::info;
use num_traits::PrimInt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::PoisonError;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Outcome of one run. An unreachable goal is a normal outcome: `reached` is `false`, `path` is
/// empty and `visited` lists every cell reachable from the start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// The strategy that produced this result.
    pub strategy: Strategy,
    /// Cells in the order they were finalized.
    pub visited: Vec<Point>,
    /// Cells from start to goal inclusive, or empty.
    pub path: Vec<Point>,
    pub reached: bool,
}

impl SearchResult {
    /// Number of unit steps along the path.
    pub fn path_cost(&self) -> usize {
        path_cost(&self.path)
    }
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// The ordering rules that distinguish one traversal from another. Every solver is driven by the
/// same loop in [traverse]; a solver only decides how the frontier is ordered and when a
/// neighbour is (re)inserted.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// The built-in [Strategy] this solver belongs to, reported in [SearchResult::strategy].
    fn strategy(&self) -> Strategy;

    fn discipline(&self) -> Discipline;

    /// If [true], a discovered but unvisited cell is re-inserted whenever a strictly shorter
    /// distance to it is found. Otherwise cells are inserted once, on first discovery.
    fn relaxes(&self) -> bool;

    /// Estimated remaining cost from `p1` to `p2`.
    fn heuristic<C: PrimInt>(&self, _p1: &Point, _p2: &Point) -> C {
        C::zero()
    }

    fn priority<C: PrimInt>(&self, distance: C, point: &Point, goal: &Point) -> C {
        distance + self.heuristic(point, goal)
    }

    fn search(&self, grid: &PathingGrid) -> Result<SearchResult>
    where
        Self: Sized,
    {
        self.search_with(grid, None)
    }

    /// Like [search](Self::search), but aborts with [SearchError::Cancelled] once `cancel` is
    /// raised. The flag is checked once per frontier pop.
    fn search_cancellable(&self, grid: &PathingGrid, cancel: &AtomicBool) -> Result<SearchResult>
    where
        Self: Sized,
    {
        self.search_with(grid, Some(cancel))
    }

    fn search_with(&self, grid: &PathingGrid, cancel: Option<&AtomicBool>) -> Result<SearchResult>
    where
        Self: Sized,
    {
        // Scratch state is reset at the start of every run, so a context left behind by a
        // panicking run is still usable.
        let mut ct = grid.context.lock().unwrap_or_else(PoisonError::into_inner);
        info!("{}: searching from {} to {}", self.name(), grid.start(), grid.goal());
        let reached = traverse(self, grid, &mut *ct, cancel)?;
        let start_ix = grid.cell_index(grid.start());
        let goal_ix = grid.cell_index(grid.goal());
        let path = reconstruct(&ct.predecessor, start_ix, goal_ix)?
            .into_iter()
            .map(|ix| grid.cell_point(ix))
            .collect::<Vec<_>>();
        let visited = ct
            .visit_order()
            .map(|ix| grid.cell_point(ix))
            .collect::<Vec<_>>();
        if reached {
            info!(
                "{}: reached {} after visiting {} cells, path has {} cells",
                self.name(),
                grid.goal(),
                visited.len(),
                path.len()
            );
        } else {
            info!(
                "{}: {} is unreachable from {}, visited {} cells",
                self.name(),
                grid.goal(),
                grid.start(),
                visited.len()
            );
        }
        Ok(SearchResult {
            strategy: self.strategy(),
            visited,
            path,
            reached,
        })
    }
}

/// Runs one traversal from the grid's start towards its goal, filling `ct` with the visit order,
/// distances and predecessors. Returns whether the goal was reached.
///
/// Fails with [SearchError::InvalidEndpoints] before touching `ct` if the endpoints are invalid.
pub fn traverse<S, C>(
    solver: &S,
    grid: &PathingGrid,
    ct: &mut SearchContext<C>,
    cancel: Option<&AtomicBool>,
) -> Result<bool>
where
    S: GridSolver,
    C: PrimInt,
{
    grid.validate_endpoints()?;
    ct.reset(grid.len());
    let (start, goal) = (grid.start(), grid.goal());
    let start_ix = grid.cell_index(start);
    let goal_ix = grid.cell_index(goal);

    let mut frontier = Frontier::new(solver.discipline());
    ct.distance[start_ix] = C::zero();
    frontier.push(start_ix, solver.priority(C::zero(), &start, &goal));

    while let Some(ix) = frontier.pop() {
        if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            return Err(SearchError::Cancelled);
        }
        // Priority frontiers may hold stale entries for cells that were improved later.
        if !ct.mark_visited(ix) {
            continue;
        }
        if ix == goal_ix {
            return Ok(true);
        }
        let point = grid.cell_point(ix);
        let next_distance = ct.distance[ix] + C::one();
        for n in grid.neighbors(&point) {
            let n_ix = grid.cell_index(n);
            if ct.is_visited(n_ix) {
                continue;
            }
            let insert = if solver.relaxes() {
                next_distance < ct.distance[n_ix]
            } else {
                !ct.is_discovered(n_ix)
            };
            if insert {
                ct.distance[n_ix] = next_distance;
                ct.predecessor[n_ix] = ix;
                frontier.push(n_ix, solver.priority(next_distance, &n, &goal));
            }
        }
    }
    Ok(false)
}

/// Selects one of the built-in traversals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::Dijkstra,
        Strategy::AStar,
    ];

    /// Whether the path produced by this strategy is guaranteed to be a shortest one.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Strategy::Dfs)
    }

    pub fn run(self, grid: &PathingGrid) -> Result<SearchResult> {
        self.run_with(grid, None)
    }

    pub fn run_cancellable(self, grid: &PathingGrid, cancel: &AtomicBool) -> Result<SearchResult> {
        self.run_with(grid, Some(cancel))
    }

    fn run_with(self, grid: &PathingGrid, cancel: Option<&AtomicBool>) -> Result<SearchResult> {
        match self {
            Strategy::Bfs => BfsSolver.search_with(grid, cancel),
            Strategy::Dfs => DfsSolver.search_with(grid, cancel),
            Strategy::Dijkstra => DijkstraSolver.search_with(grid, cancel),
            Strategy::AStar => AstarSolver::new().search_with(grid, cancel),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Strategy::Bfs => "bfs",
            Strategy::Dfs => "dfs",
            Strategy::Dijkstra => "dijkstra",
            Strategy::AStar => "astar",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Strategy> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Strategy::Bfs),
            "dfs" | "depth-first" => Ok(Strategy::Dfs),
            "dijkstra" => Ok(Strategy::Dijkstra),
            "astar" | "a*" => Ok(Strategy::AStar),
            _ => Err(SearchError::UnknownStrategy(s.to_owned())),
        }
    }
}

impl PathingGrid {
    /// Runs `strategy` from the current start to the current goal.
    pub fn run_search(&self, strategy: Strategy) -> Result<SearchResult> {
        strategy.run(self)
    }

    pub fn run_search_cancellable(
        &self,
        strategy: Strategy,
        cancel: &AtomicBool,
    ) -> Result<SearchResult> {
        strategy.run_cancellable(self, cancel)
    }

    /// Runs a solver that is not one of the built-in strategies, for example an
    /// [AstarSolver] with a non-default heuristic factor.
    pub fn run_solver<S: GridSolver>(&self, solver: &S) -> Result<SearchResult> {
        solver.search(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EndpointIssue;
    use crate::search_context::DefaultSearchContext;
    use grid_util::grid::Grid;

    fn open_3x3() -> PathingGrid {
        PathingGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap()
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(" BFS ".parse::<Strategy>().unwrap(), Strategy::Bfs);
        assert!(matches!(
            "greedy".parse::<Strategy>(),
            Err(SearchError::UnknownStrategy(_))
        ));
    }

    #[test]
    fn walled_endpoint_fails_before_traversal() {
        let mut grid = open_3x3();
        // Bypass the editor to force an invalid state.
        grid.grid.set(2, 2, true);
        let mut ct: DefaultSearchContext = SearchContext::new();
        let err = traverse(&BfsSolver, &grid, &mut ct, None).unwrap_err();
        assert!(matches!(
            err,
            SearchError::InvalidEndpoints {
                reason: EndpointIssue::Wall,
                ..
            }
        ));
        assert!(ct.is_empty());
        for strategy in Strategy::ALL {
            assert!(grid.run_search(strategy).is_err());
        }
    }

    #[test]
    fn raised_cancel_flag_aborts() {
        let grid = open_3x3();
        let cancel = AtomicBool::new(true);
        for strategy in Strategy::ALL {
            assert_eq!(
                grid.run_search_cancellable(strategy, &cancel),
                Err(SearchError::Cancelled)
            );
        }
        cancel.store(false, Ordering::Relaxed);
        assert!(grid.run_search_cancellable(Strategy::Bfs, &cancel).unwrap().reached);
    }

    #[test]
    fn results_report_their_strategy() {
        let grid = open_3x3();
        for strategy in Strategy::ALL {
            assert_eq!(grid.run_search(strategy).unwrap().strategy, strategy);
        }
        let greedy = AstarSolver {
            heuristic_factor: 3.0,
        };
        assert_eq!(grid.run_solver(&greedy).unwrap().strategy, Strategy::AStar);
    }

    #[test]
    fn runs_are_independent() {
        let grid = open_3x3();
        let first = grid.run_search(Strategy::Dijkstra).unwrap();
        grid.run_search(Strategy::Dfs).unwrap();
        let second = grid.run_search(Strategy::Dijkstra).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn traverse_works_with_other_cost_types() {
        let grid = open_3x3();
        let mut ct: SearchContext<u64> = SearchContext::new();
        assert!(traverse(&DijkstraSolver, &grid, &mut ct, None).unwrap());
        assert_eq!(ct.distance[grid.cell_index(grid.goal())], 4);
    }
}
