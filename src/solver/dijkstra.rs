use crate::frontier::Discipline;
use crate::solver::{GridSolver, Strategy};

/// Uniform-cost search ordered by distance from the start. On this unit-cost lattice it finds the
/// same distances as BFS, but through explicit relaxation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }
    fn strategy(&self) -> Strategy {
        Strategy::Dijkstra
    }
    fn discipline(&self) -> Discipline {
        Discipline::Priority
    }
    fn relaxes(&self) -> bool {
        true
    }
}
