use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A frontier candidate: a flat cell index with the scores it was pushed
/// with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    pub f: i32,
    pub g: i32,
    pub idx: usize,
    seq: u64,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on every key so BinaryHeap (max-heap) pops the smallest
        // f, then the smallest g, then the earliest push.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority queue of open cells with lazy deletion.
///
/// A cell whose cost improves is simply pushed again; the caller discards
/// outdated entries when they surface.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a candidate. Entries pushed earlier win exact ties.
    pub fn push(&mut self, f: i32, g: i32, idx: usize) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(FrontierEntry { f, g, idx, seq });
    }

    /// Pop the best candidate.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(mut fr: Frontier) -> Vec<usize> {
        std::iter::from_fn(|| fr.pop()).map(|e| e.idx).collect()
    }

    #[test]
    fn lowest_f_first() {
        let mut fr = Frontier::new();
        fr.push(7, 0, 1);
        fr.push(3, 0, 2);
        fr.push(5, 0, 3);
        assert_eq!(drain(fr), vec![2, 3, 1]);
    }

    #[test]
    fn equal_f_prefers_lower_g() {
        let mut fr = Frontier::new();
        fr.push(6, 4, 10);
        fr.push(6, 2, 11);
        fr.push(6, 3, 12);
        assert_eq!(drain(fr), vec![11, 12, 10]);
    }

    #[test]
    fn full_tie_is_fifo() {
        let mut fr = Frontier::new();
        for idx in [9, 4, 7, 1] {
            fr.push(5, 5, idx);
        }
        assert_eq!(fr.len(), 4);
        assert_eq!(drain(fr), vec![9, 4, 7, 1]);
    }
}
