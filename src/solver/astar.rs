use grid_util::point::Point;
use num_traits::{NumCast, PrimInt};

use crate::frontier::Discipline;
use crate::manhattan_distance;
use crate::solver::{GridSolver, Strategy};

/// A* ordered by distance plus the Manhattan distance to the goal. With the default heuristic
/// factor of 1.0 the heuristic never overestimates on a 4-connected unit-cost grid, so the path
/// is optimal. Larger factors trade optimality for fewer visited cells.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "A*"
    }
    fn strategy(&self) -> Strategy {
        Strategy::AStar
    }
    fn discipline(&self) -> Discipline {
        Discipline::Priority
    }
    fn relaxes(&self) -> bool {
        true
    }
    /// The Manhattan distance times the heuristic factor.
    fn heuristic<C: PrimInt>(&self, p1: &Point, p2: &Point) -> C {
        let h = (manhattan_distance(p1, p2) as f32 * self.heuristic_factor) as i64;
        <C as NumCast>::from(h).unwrap_or_else(C::max_value)
    }
}
