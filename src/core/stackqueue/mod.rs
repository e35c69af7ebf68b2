use crate::core::queue::Queue;
use serde::{Serialize, Deserialize};

/// Queue backed by two stacks. Enqueue pushes onto `incoming`; dequeue
/// pops from `outgoing`, refilling it from `incoming` in reverse only
/// when it runs dry. Each item crosses over exactly once, so dequeue is
/// O(1) amortized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DualStackQueue<T> {
    incoming: Vec<T>,
    outgoing: Vec<T>,
    /// Lifetime count of items moved between the stacks (instrumentation,
    /// not queue state)
    #[serde(skip)]
    transferred: u64,
}

impl<T> DualStackQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            incoming: Vec::new(),
            outgoing: Vec::new(),
            transferred: 0,
        }
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.incoming.len() + self.outgoing.len()
    }

    /// Current backing-stack sizes as (incoming, outgoing)
    pub fn stack_sizes(&self) -> (usize, usize) {
        (self.incoming.len(), self.outgoing.len())
    }

    /// Total items ever moved from `incoming` to `outgoing`
    pub fn transferred(&self) -> u64 {
        self.transferred
    }
}

impl<T> Queue<T> for DualStackQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.incoming.push(item);
        // --post operation assertion
        assert!(!self.incoming.is_empty(), "incoming must hold the item just enqueued");
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.outgoing.is_empty() {
            // Refill by popping incoming in reverse, so its oldest item
            // ends up on top of outgoing
            while let Some(item) = self.incoming.pop() {
                self.outgoing.push(item);
                self.transferred += 1;
            }
            // -- post op assertion: a transfer leaves nothing behind
            assert!(self.incoming.is_empty(), "incoming must be drained after a transfer");
        }
        self.outgoing.pop()
    }

    /// Head is the top of `outgoing` if any, else the oldest pending item
    /// at the bottom of `incoming`. Never triggers the transfer.
    fn peek(&self) -> Option<&T> {
        if !self.outgoing.is_empty() {
            self.outgoing.last()
        } else {
            self.incoming.first()
        }
    }

    fn is_empty(&self) -> bool {
        self.incoming.is_empty() && self.outgoing.is_empty()
    }
}
