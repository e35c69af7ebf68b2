use crate::core::queue::Queue;
use serde::{Serialize, Deserialize};

/// Queue backed by a single array. Enqueue appends; dequeue removes the
/// front and shifts everything behind it down one slot, so it costs O(n).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> ArrayQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Get the current queue length
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Queue<T> for ArrayQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.items.push(item);
        // --post operation assertion
        assert!(self.items.len() > 0, "Queue must have at least one item after enqueue");
    }

    fn dequeue(&mut self) -> Option<T> {
        let len_before = self.items.len();
        let result = if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        };
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.items.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
