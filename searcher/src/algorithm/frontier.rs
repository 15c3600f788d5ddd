//! Frontier containers holding discovered but unexpanded states.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::default::Default;
use std::hash::Hash;

use crate::strategy::Priority;

/// Heap entry. Entries go stale when their state is relaxed
/// or extracted, and are skipped when they surface.
#[derive(Debug)]
struct Entry<S> {
    priority: Priority,
    sequence: u64,
    state: S,
}

impl<S> Entry<S> {
    fn key(&self) -> (Priority, u64) {
        (self.priority, self.sequence)
    }
}

impl<S> PartialEq for Entry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl<S> Eq for Entry<S> {}

impl<S> Ord for Entry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl<S> PartialOrd for Entry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A priority queue of states supporting decrease-key.
///
/// Each state is held at most once. Ties between equal
/// priorities are broken by insertion order, and a relaxed
/// state counts as freshly inserted.
#[derive(Debug)]
pub struct PriorityFrontier<S>
where
    S: Eq + Hash + Clone,
{
    heap: BinaryHeap<Entry<S>>,
    live: HashMap<S, (Priority, u64)>,
    sequence: u64,
}

impl<S> Default for PriorityFrontier<S>
where
    S: Eq + Hash + Clone,
{
    fn default() -> Self {
        PriorityFrontier {
            heap: BinaryHeap::new(),
            live: HashMap::new(),
            sequence: 0,
        }
    }
}

impl<S> PriorityFrontier<S>
where
    S: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a state, or lower the priority of a state already present.
    ///
    /// Returns false, leaving the frontier untouched, when the state is
    /// already held at an equal or lower priority.
    pub fn insert(&mut self, state: S, priority: Priority) -> bool {
        if let Some((current, _)) = self.live.get(&state) {
            if *current <= priority {
                return false;
            }
        }

        let sequence = self.sequence;
        self.sequence += 1;

        self.live.insert(state.clone(), (priority, sequence));
        self.heap.push(Entry {
            priority,
            sequence,
            state,
        });
        true
    }

    /// Remove the lowest priority state, returning it with its priority.
    pub fn pop(&mut self) -> Option<(S, Priority)> {
        while let Some(entry) = self.heap.pop() {
            match self.live.get(&entry.state) {
                Some(key) if *key == entry.key() => {
                    self.live.remove(&entry.state);
                    return Some((entry.state, entry.priority));
                }
                _ => continue,
            }
        }
        None
    }

    /// Remove the lowest priority state.
    pub fn extract_min(&mut self) -> Option<S> {
        self.pop().map(|(state, _)| state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.live.contains_key(state)
    }

    /// Current priority of a state, if it is in the frontier.
    pub fn priority(&self, state: &S) -> Option<Priority> {
        self.live.get(state).map(|(p, _)| *p)
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Number of live states.
    pub fn len(&self) -> usize {
        self.live.len()
    }
}

/// First-in first-out queue for breadth-first traversal.
#[derive(Debug)]
pub struct BreadthQueue<S> {
    queue: VecDeque<S>,
}

impl<S> Default for BreadthQueue<S> {
    fn default() -> Self {
        BreadthQueue {
            queue: VecDeque::new(),
        }
    }
}

impl<S> BreadthQueue<S> {
    pub fn pop(&mut self) -> Option<S> {
        self.queue.pop_front()
    }

    pub fn push(&mut self, item: S) {
        self.queue.push_back(item);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
