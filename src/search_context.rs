use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use num_traits::PrimInt;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Marks a cell that has not been reached from another cell (the start, or an undiscovered cell).
pub const NO_PREDECESSOR: usize = usize::MAX;

/// Per-run scratch state, stored as flat arrays indexed by cell index. Predecessors are indices
/// into the same arena rather than references, so the predecessor forest cannot own or alias
/// cells.
///
/// The visited set keeps insertion order, which is exactly the order in which cells were
/// finalized.
#[derive(Clone, Debug)]
pub struct SearchContext<C> {
    pub distance: Vec<C>,
    pub predecessor: Vec<usize>,
    pub visited: FxIndexSet<usize>,
}

pub type DefaultSearchContext = SearchContext<i32>;

impl<C: PrimInt> SearchContext<C> {
    pub fn new() -> SearchContext<C> {
        SearchContext {
            distance: Vec::new(),
            predecessor: Vec::new(),
            visited: FxIndexSet::default(),
        }
    }

    /// Clears all scratch fields for a grid of `len` cells: distance to infinity, no visits and
    /// no predecessors. Buffers are reused between runs.
    pub fn reset(&mut self, len: usize) {
        self.distance.clear();
        self.distance.resize(len, C::max_value());
        self.predecessor.clear();
        self.predecessor.resize(len, NO_PREDECESSOR);
        self.visited.clear();
    }

    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    pub fn is_visited(&self, ix: usize) -> bool {
        self.visited.contains(&ix)
    }

    /// Marks a cell visited, returning `false` if it already was.
    pub fn mark_visited(&mut self, ix: usize) -> bool {
        self.visited.insert(ix)
    }

    /// A cell is discovered once it has a finite tentative distance.
    pub fn is_discovered(&self, ix: usize) -> bool {
        self.distance[ix] != C::max_value()
    }

    pub fn predecessor_of(&self, ix: usize) -> Option<usize> {
        match self.predecessor[ix] {
            NO_PREDECESSOR => None,
            p => Some(p),
        }
    }

    /// Visited cell indices in the order they were finalized.
    pub fn visit_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited.iter().copied()
    }
}

impl<C: PrimInt> Default for SearchContext<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_clears_previous_run() {
        let mut ct: DefaultSearchContext = SearchContext::new();
        ct.reset(4);
        ct.distance[0] = 0;
        ct.predecessor[1] = 0;
        assert!(ct.mark_visited(0));
        assert!(!ct.mark_visited(0));

        ct.reset(6);
        assert_eq!(ct.len(), 6);
        assert!(ct.distance.iter().all(|&d| d == i32::MAX));
        assert!((0..6).all(|ix| ct.predecessor_of(ix).is_none()));
        assert_eq!(ct.visit_order().count(), 0);
    }

    #[test]
    fn visit_order_follows_insertion() {
        let mut ct: DefaultSearchContext = SearchContext::new();
        ct.reset(5);
        for ix in [3, 1, 4, 1, 0] {
            ct.mark_visited(ix);
        }
        assert_eq!(ct.visit_order().collect::<Vec<_>>(), vec![3, 1, 4, 0]);
        assert!(ct.is_visited(4));
        assert!(!ct.is_visited(2));
    }
}
