use std::collections::BinaryHeap;

use crate::system::Event;

/// A queue of pending events ordered by time.
///
/// Events scheduled for the same time leave the queue in the order they
/// entered it.
#[derive(Debug, Default)]
pub struct Queue {
    heap: BinaryHeap<Entry>,
    count: u64,
}

#[derive(Debug)]
struct Entry {
    time: f64,
    sequence: u64,
    event: Event,
}

order!(Entry(time, sequence) descending);

impl Queue {
    /// Insert an event.
    pub fn push(&mut self, event: Event) {
        debug_assert!(!event.time.is_nan());
        let sequence = self.count;
        self.count += 1;
        self.heap.push(Entry { time: event.time, sequence: sequence, event: event });
    }

    /// Remove and return the earliest event.
    #[inline]
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|entry| entry.event)
    }

    /// Return the earliest event without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&Event> {
        self.heap.peek().map(|entry| &entry.event)
    }
}

#[cfg(test)]
mod tests {
    use random::Source;

    use super::Queue;
    use crate::system::{Event, EventKind};

    #[test]
    fn pop_ordered() {
        let mut source = random::default(42);
        let mut queue = Queue::default();
        for _ in 0..100 {
            queue.push(Event::arrival(100.0 * source.read::<f64>()));
        }
        let (mut last, mut count) = (0.0, 0);
        while let Some(event) = queue.pop() {
            assert!(event.time >= last);
            last = event.time;
            count += 1;
        }
        assert_eq!(count, 100);
        assert!(queue.peek().is_none());
    }

    #[test]
    fn pop_interleaved() {
        let mut source = random::default(69);
        let mut queue = Queue::default();
        let mut last = 0.0;
        for i in 0..100 {
            queue.push(Event::arrival(last + 10.0 * source.read::<f64>()));
            if i % 3 == 2 {
                let event = queue.pop().unwrap();
                assert!(event.time >= last);
                last = event.time;
            }
        }
        while let Some(event) = queue.pop() {
            assert!(event.time >= last);
            last = event.time;
        }
    }

    #[test]
    fn pop_stable() {
        let mut queue = Queue::default();
        queue.push(Event::completion(2.0, 1));
        queue.push(Event::arrival(1.0));
        queue.push(Event::time_slice(2.0, 2));
        queue.push(Event::arrival(2.0));

        assert_eq!(queue.peek().unwrap().kind, EventKind::Arrival);
        assert_eq!(queue.pop().unwrap().time, 1.0);
        assert_eq!(queue.pop().unwrap().kind, EventKind::Completion(1));
        assert_eq!(queue.pop().unwrap().kind, EventKind::TimeSlice(2));
        assert_eq!(queue.pop().unwrap().kind, EventKind::Arrival);
        assert!(queue.pop().is_none());
    }
}
