use crate::frontier::Discipline;
use crate::solver::{GridSolver, Strategy};

/// Breadth-first traversal. Every edge has unit cost, so the first discovery of a cell is already
/// along a shortest route and the resulting path is optimal.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }
    fn strategy(&self) -> Strategy {
        Strategy::Bfs
    }
    fn discipline(&self) -> Discipline {
        Discipline::Fifo
    }
    fn relaxes(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathing_grid::PathingGrid;
    use grid_util::point::Point;

    fn points(cells: &[(i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn visits_in_rings() {
        let grid = PathingGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let result = BfsSolver.search(&grid).unwrap();
        assert!(result.reached);
        assert_eq!(
            result.visited,
            points(&[(0, 0), (0, 1), (1, 0), (0, 2), (1, 1), (2, 0), (1, 2), (2, 1), (2, 2)])
        );
        assert_eq!(result.path, points(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
    }

    #[test]
    fn routes_around_walls() {
        // S.#.
        // .##.
        // ...G
        let grid: PathingGrid = "S.#.\n.##.\n...G".parse().unwrap();
        let result = BfsSolver.search(&grid).unwrap();
        assert_eq!(result.path, points(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (3, 2)]));
        assert_eq!(result.path_cost(), 5);
    }
}
