use alloc::string::String;
use core::fmt;
use crate::linked_list::LinkedList;

/// FIFO queue. Items enter at the tail of the list and leave from the head.
pub struct Queue<T> {
    list: LinkedList<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    pub fn enqueue(&mut self, item: T) {
        self.list.append(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.list.delete_head()
    }

    /// The front item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.head()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.list.to_string_with(callback)
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
