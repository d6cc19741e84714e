use grid_util::point::Point;
use itertools::Itertools;
use log::warn;

use crate::error::{Result, SearchError};
use crate::manhattan_distance;
use crate::search_context::NO_PREDECESSOR;

/// Follows the predecessor links backwards from `goal` and returns the cell indices from
/// `start` to `goal` inclusive.
///
/// Returns an empty path if the goal was never reached. A chain that does not arrive at `start`
/// within `predecessors.len()` steps, or that ends anywhere else, can only come from a broken
/// run and is reported as [SearchError::MalformedPredecessorChain].
pub fn reconstruct(predecessors: &[usize], start: usize, goal: usize) -> Result<Vec<usize>> {
    if goal == start {
        return Ok(vec![goal]);
    }
    if predecessors[goal] == NO_PREDECESSOR {
        return Ok(Vec::new());
    }
    let bound = predecessors.len();
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        if path.len() > bound {
            warn!("Predecessor chain from {} exceeds {} cells", goal, bound);
            return Err(SearchError::MalformedPredecessorChain { steps: path.len() - 1 });
        }
        match predecessors[current] {
            NO_PREDECESSOR => {
                warn!("Predecessor chain from {} ends at {} instead of {}", goal, current, start);
                return Err(SearchError::MalformedPredecessorChain { steps: path.len() - 1 });
            }
            p => {
                current = p;
                path.push(current);
            }
        }
    }
    path.reverse();
    Ok(path)
}

/// Number of unit steps taken along a path.
pub fn path_cost(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that a path never repeats a cell and that every step moves to a 4-adjacent cell.
pub fn is_valid_path(path: &[Point]) -> bool {
    path.iter().all_unique()
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| manhattan_distance(a, b) == 1)
}
