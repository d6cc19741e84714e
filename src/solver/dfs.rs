use crate::frontier::Discipline;
use crate::solver::{GridSolver, Strategy};

/// Depth-first traversal. Useful for showing a very different visiting order; the path it
/// produces is whatever predecessor chain the dive happened to build and is not necessarily a
/// shortest one.
#[derive(Clone, Copy, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }
    fn strategy(&self) -> Strategy {
        Strategy::Dfs
    }
    fn discipline(&self) -> Discipline {
        Discipline::Lifo
    }
    fn relaxes(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::is_valid_path;
    use crate::pathing_grid::PathingGrid;
    use grid_util::point::Point;

    fn points(cells: &[(i32, i32)]) -> Vec<Point> {
        cells.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn dives_along_last_pushed_neighbour() {
        let grid = PathingGrid::new(3, 3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let result = DfsSolver.search(&grid).unwrap();
        let expected = points(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]);
        assert_eq!(result.visited, expected);
        assert_eq!(result.path, expected);
    }

    /// The goal sits two steps below the start, but the dive reaches it the long way round.
    #[test]
    fn path_is_not_necessarily_shortest() {
        let grid = PathingGrid::new(3, 3, Point::new(0, 0), Point::new(0, 2)).unwrap();
        let result = DfsSolver.search(&grid).unwrap();
        assert!(result.reached);
        assert_eq!(
            result.path,
            points(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)])
        );
        assert!(is_valid_path(&result.path));
    }
}
