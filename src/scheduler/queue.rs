//! Ready Queue - FIFO container with eligibility ordering
//!
//! FIFO semantics for insertion order, re-sorted after every insertion by
//! the single eligibility comparator (arrival time ascending, process id
//! ascending on ties). The comparator is the sole source of ordering among
//! equally-eligible processes, which keeps runs bit-for-bit reproducible.

use super::process::Process;
use core::cmp::Ordering;
use std::collections::VecDeque;

/// Eligibility ordering: earliest arrival first, smallest id on ties
pub fn eligibility_order(a: &Process, b: &Process) -> Ordering {
    a.arrival_time()
        .cmp(&b.arrival_time())
        .then_with(|| a.id().cmp(&b.id()))
}

/// Ready container owning the processes queued at one priority level
#[derive(Debug, Default)]
pub struct ReadyQueue {
    items: VecDeque<Process>,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add a process to the back of the queue
    pub fn enqueue(&mut self, process: Process) {
        self.items.push_back(process);
    }

    /// Remove and return the head process
    pub fn dequeue(&mut self) -> Option<Process> {
        self.items.pop_front()
    }

    /// Head process, if any
    pub fn peek(&self) -> Option<&Process> {
        self.items.front()
    }

    /// Arrival time of the head process, if any
    pub fn head_arrival(&self) -> Option<u64> {
        self.items.front().map(Process::arrival_time)
    }

    /// Re-establish eligibility order after an insertion
    pub fn resort(&mut self) {
        self.items
            .make_contiguous()
            .sort_by(|a, b| eligibility_order(a, b));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: u32, arrival: u64) -> Process {
        let mut p = Process::new(id, vec![1], vec![]);
        p.set_arrival_time(arrival);
        p
    }

    #[test]
    fn test_fifo_without_resort() {
        let mut q = ReadyQueue::new();
        q.enqueue(proc(2, 0));
        q.enqueue(proc(1, 0));
        assert_eq!(q.dequeue().map(|p| p.id()), Some(2));
        assert_eq!(q.dequeue().map(|p| p.id()), Some(1));
        assert!(q.dequeue().is_none());
    }

    #[test]
    fn test_resort_orders_by_arrival_then_id() {
        let mut q = ReadyQueue::new();
        q.enqueue(proc(3, 9));
        q.enqueue(proc(2, 4));
        q.enqueue(proc(1, 9));
        q.resort();

        let ids: Vec<u32> = q.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_id_breaks_arrival_ties() {
        let mut q = ReadyQueue::new();
        q.enqueue(proc(7, 0));
        q.enqueue(proc(1, 0));
        q.enqueue(proc(4, 0));
        q.resort();

        let ids: Vec<u32> = q.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![1, 4, 7]);
    }

    #[test]
    fn test_head_arrival() {
        let mut q = ReadyQueue::new();
        assert_eq!(q.head_arrival(), None);
        q.enqueue(proc(1, 12));
        assert_eq!(q.head_arrival(), Some(12));
    }
}
