//! Indexed binary min-heap with changeable priorities.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SearchError;

#[derive(Clone, Copy, Debug)]
struct Entry<K> {
    key: K,
    priority: f64,
}

/// A binary min-heap over keys whose priorities can change after insertion.
///
/// The heap keeps a key → slot map next to its backing array, so
/// [`update`](Self::update), [`decrease_key`](Self::decrease_key) and
/// [`increase_key`](Self::increase_key) find the entry in O(1) and restore
/// heap order in O(log n).
///
/// When both children of a slot carry the same priority the left one is
/// promoted.
#[derive(Clone, Debug)]
pub struct PriorityQueue<K> {
    heap: Vec<Entry<K>>,
    slots: HashMap<K, usize>,
}

impl<K: Copy + Eq + Hash> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash> PriorityQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Create an empty queue with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Number of queued keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `key` is currently queued.
    #[inline]
    pub fn contains(&self, key: K) -> bool {
        self.slots.contains_key(&key)
    }

    /// Current priority of `key`, if queued.
    pub fn priority(&self, key: K) -> Option<f64> {
        self.slots.get(&key).map(|&i| self.heap[i].priority)
    }

    /// Remove every key.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    /// Queue `key` with `priority`. A key that is already queued has its
    /// priority replaced instead.
    pub fn insert(&mut self, key: K, priority: f64) {
        if self.contains(key) {
            self.update(key, priority);
            return;
        }
        let i = self.heap.len();
        self.heap.push(Entry { key, priority });
        self.slots.insert(key, i);
        self.sift_up(i);
    }

    /// The key with the smallest priority, without removing it.
    pub fn peek(&self) -> Result<(K, f64), SearchError> {
        self.heap
            .first()
            .map(|e| (e.key, e.priority))
            .ok_or(SearchError::EmptyQueue)
    }

    /// Remove and return the key with the smallest priority.
    pub fn pop(&mut self) -> Result<(K, f64), SearchError> {
        if self.heap.is_empty() {
            return Err(SearchError::EmptyQueue);
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let Some(min) = self.heap.pop() else {
            return Err(SearchError::EmptyQueue);
        };
        self.slots.remove(&min.key);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok((min.key, min.priority))
    }

    /// Set a new priority for `key` and move it up or down as needed.
    ///
    /// Returns `false` if `key` is not queued.
    pub fn update(&mut self, key: K, priority: f64) -> bool {
        let Some(&i) = self.slots.get(&key) else {
            return false;
        };
        let old = self.heap[i].priority;
        self.heap[i].priority = priority;
        if priority < old {
            self.sift_up(i);
        } else if priority > old {
            self.sift_down(i);
        }
        true
    }

    /// Lower the priority of `key`. Returns `false`, leaving the queue
    /// untouched, if `key` is absent or `priority` is not lower.
    pub fn decrease_key(&mut self, key: K, priority: f64) -> bool {
        match self.priority(key) {
            Some(old) if priority < old => self.update(key, priority),
            _ => false,
        }
    }

    /// Raise the priority of `key`. Returns `false`, leaving the queue
    /// untouched, if `key` is absent or `priority` is not higher.
    pub fn increase_key(&mut self, key: K, priority: f64) -> bool {
        match self.priority(key) {
            Some(old) if priority > old => self.update(key, priority),
            _ => false,
        }
    }

    // -----------------------------------------------------------------------
    // Heap maintenance
    // -----------------------------------------------------------------------

    // Slots are 0-based: the children of `i` are `2i + 1` and `2i + 2`.

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.heap.swap(a, b);
        self.slots.insert(self.heap[a].key, a);
        self.slots.insert(self.heap[b].key, b);
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].priority >= self.heap[parent].priority {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            if left >= len {
                break;
            }
            let child = if right < len && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };
            if self.heap[i].priority <= self.heap[child].priority {
                break;
            }
            self.swap(i, child);
            i = child;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].priority <= self.heap[i].priority)
            && self.heap.iter().enumerate().all(|(i, e)| self.slots.get(&e.key) == Some(&i))
            && self.slots.len() == self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;

    #[test]
    fn pops_in_priority_order() {
        let mut pq = PriorityQueue::new();
        for (k, p) in [(1, 5.0), (2, 1.0), (3, 4.0), (4, 2.0), (5, 3.0)] {
            pq.insert(k, p);
        }
        let order: Vec<i32> = std::iter::from_fn(|| pq.pop().ok().map(|(k, _)| k)).collect();
        assert_eq!(order, vec![2, 4, 5, 3, 1]);
    }

    #[test]
    fn empty_queue_errors() {
        let mut pq: PriorityQueue<u8> = PriorityQueue::new();
        assert_eq!(pq.pop(), Err(SearchError::EmptyQueue));
        assert_eq!(pq.peek(), Err(SearchError::EmptyQueue));
        assert!(pq.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut pq = PriorityQueue::new();
        pq.insert('a', 2.0);
        pq.insert('b', 1.0);
        assert_eq!(pq.peek(), Ok(('b', 1.0)));
        assert_eq!(pq.len(), 2);
    }

    #[test]
    fn infinity_sorts_last() {
        let mut pq = PriorityQueue::new();
        pq.insert(0, f64::INFINITY);
        pq.insert(1, 0.0);
        pq.insert(2, f64::INFINITY);
        assert_eq!(pq.pop(), Ok((1, 0.0)));
        assert_eq!(pq.pop().map(|(_, p)| p), Ok(f64::INFINITY));
    }

    #[test]
    fn decrease_key_moves_to_front() {
        let mut pq = PriorityQueue::new();
        for k in 0..10 {
            pq.insert(k, f64::INFINITY);
        }
        assert!(pq.decrease_key(7, 3.0));
        assert!(pq.decrease_key(4, 1.0));
        assert!(!pq.decrease_key(4, 2.0));
        assert!(pq.is_heap());
        assert_eq!(pq.pop(), Ok((4, 1.0)));
        assert_eq!(pq.pop(), Ok((7, 3.0)));
    }

    #[test]
    fn increase_key_moves_to_back() {
        let mut pq = PriorityQueue::new();
        for k in 0..5 {
            pq.insert(k, k as f64);
        }
        assert!(pq.increase_key(0, 10.0));
        assert!(!pq.increase_key(1, 0.5));
        assert!(!pq.increase_key(99, 1.0));
        assert!(pq.is_heap());
        assert_eq!(pq.pop(), Ok((1, 1.0)));
        assert_eq!(pq.priority(0), Some(10.0));
    }

    #[test]
    fn reinsert_replaces_priority() {
        let mut pq = PriorityQueue::new();
        pq.insert("x", 5.0);
        pq.insert("y", 3.0);
        pq.insert("x", 1.0);
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.pop(), Ok(("x", 1.0)));
    }

    #[test]
    fn equal_children_promote_left() {
        let mut pq = PriorityQueue::new();
        pq.insert('r', 0.0);
        pq.insert('a', 1.0);
        pq.insert('b', 1.0);
        pq.insert('c', 5.0);
        pq.pop().unwrap();
        // 'c' was last, so it went to the root and the left child 'a' won.
        assert_eq!(pq.peek(), Ok(('a', 1.0)));
    }

    #[test]
    fn update_unknown_key_is_ignored() {
        let mut pq: PriorityQueue<u32> = PriorityQueue::new();
        assert!(!pq.update(3, 1.0));
        assert!(pq.is_empty());
    }

    #[test]
    fn heap_invariant_holds_under_random_operations() {
        fn prop(ops: Vec<(u8, u8, u16)>) -> bool {
            let mut pq = PriorityQueue::new();
            for (op, key, prio) in ops {
                let key = key % 32;
                let prio = f64::from(prio);
                match op % 4 {
                    0 | 1 => pq.insert(key, prio),
                    2 => {
                        pq.update(key, prio);
                    }
                    _ => {
                        let _ = pq.pop();
                    }
                }
                if !pq.is_heap() {
                    return false;
                }
            }
            let mut prev = f64::NEG_INFINITY;
            while let Ok((_, p)) = pq.pop() {
                if p < prev {
                    return false;
                }
                prev = p;
            }
            true
        }
        quickcheck(prop as fn(Vec<(u8, u8, u16)>) -> bool);
    }
}
