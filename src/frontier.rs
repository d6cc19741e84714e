use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

/// How a [Frontier] orders the cells pushed into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discipline {
    /// First in, first out.
    Fifo,
    /// Last in, first out.
    Lifo,
    /// Smallest priority first, ties broken by insertion order.
    Priority,
}

/// Heap entry of the priority discipline.
pub struct SmallestCostHolder<K> {
    estimated_cost: K,
    sequence: u64,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: reverse both keys so the smallest estimate, and among equal
        // estimates the earliest insertion, comes out first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            s => s,
        }
    }
}

/// The open set of a traversal. One type covers the queue (BFS), stack (DFS) and min-priority
/// structure (Dijkstra and A*) so that a single search loop can drive every strategy.
pub enum Frontier<K> {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority {
        heap: BinaryHeap<SmallestCostHolder<K>>,
        sequence: u64,
    },
}

impl<K: Ord> Frontier<K> {
    pub fn new(discipline: Discipline) -> Frontier<K> {
        match discipline {
            Discipline::Fifo => Frontier::Fifo(VecDeque::new()),
            Discipline::Lifo => Frontier::Lifo(Vec::new()),
            Discipline::Priority => Frontier::Priority {
                heap: BinaryHeap::new(),
                sequence: 0,
            },
        }
    }

    pub fn discipline(&self) -> Discipline {
        match self {
            Frontier::Fifo(_) => Discipline::Fifo,
            Frontier::Lifo(_) => Discipline::Lifo,
            Frontier::Priority { .. } => Discipline::Priority,
        }
    }

    /// Adds a cell index. `priority` is only consulted by the priority discipline.
    pub fn push(&mut self, index: usize, priority: K) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(index),
            Frontier::Lifo(stack) => stack.push(index),
            Frontier::Priority { heap, sequence } => {
                heap.push(SmallestCostHolder {
                    estimated_cost: priority,
                    sequence: *sequence,
                    index,
                });
                *sequence += 1;
            }
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|holder| holder.index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority { heap, .. } => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(frontier: &mut Frontier<i32>) -> Vec<usize> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn fifo_pops_in_insertion_order() {
        let mut frontier = Frontier::new(Discipline::Fifo);
        for ix in [4, 2, 7] {
            frontier.push(ix, 0);
        }
        assert_eq!(drain(&mut frontier), vec![4, 2, 7]);
    }

    #[test]
    fn lifo_pops_last_pushed_first() {
        let mut frontier = Frontier::new(Discipline::Lifo);
        for ix in [4, 2, 7] {
            frontier.push(ix, 0);
        }
        assert_eq!(drain(&mut frontier), vec![7, 2, 4]);
    }

    #[test]
    fn priority_pops_smallest_then_oldest() {
        let mut frontier = Frontier::new(Discipline::Priority);
        frontier.push(10, 3);
        frontier.push(11, 1);
        frontier.push(12, 3);
        frontier.push(13, 1);
        frontier.push(14, 2);
        assert_eq!(frontier.len(), 5);
        assert_eq!(drain(&mut frontier), vec![11, 13, 14, 10, 12]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn other_disciplines_ignore_priority() {
        let mut frontier = Frontier::new(Discipline::Fifo);
        frontier.push(1, 9);
        frontier.push(2, 0);
        assert_eq!(frontier.discipline(), Discipline::Fifo);
        assert_eq!(drain(&mut frontier), vec![1, 2]);
    }
}
