use std::cmp::Ordering;


/// Open set entry
/// Entries are never updated in place, an improved distance pushes a new entry
/// and the old one becomes stale
#[derive(Clone, Copy, Debug)]
pub(crate) struct PriorityEntry {
    pub index: usize, // index of the node in its search tree
    pub priority: f64, // distance so far + heuristic estimate
}

impl PriorityEntry {
    pub fn new(index: usize, priority: f64) -> Self {
        Self { index, priority }
    }
}

// BinaryHeap is a max-heap, reverse the ordering so the lowest priority pops first
impl Ord for PriorityEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority.total_cmp(&self.priority)
    }
}
impl PartialOrd for PriorityEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for PriorityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for PriorityEntry {}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_pops_lowest_priority_first() {
        let mut heap = BinaryHeap::new();
        heap.push(PriorityEntry::new(0, 3.5));
        heap.push(PriorityEntry::new(1, 0.25));
        heap.push(PriorityEntry::new(2, 7.0));
        heap.push(PriorityEntry::new(3, 1.0));

        let order: Vec<usize> = std::iter::from_fn(|| heap.pop()).map(|e| e.index).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_infinite_priority_sorts_last() {
        let mut heap = BinaryHeap::new();
        heap.push(PriorityEntry::new(0, f64::INFINITY));
        heap.push(PriorityEntry::new(1, 1e300));
        assert_eq!(heap.peek().map(|e| e.index), Some(1));
    }
}
