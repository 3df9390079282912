use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use crate::linked_list::LinkedList;

/// LIFO stack. The top of the stack is the head of the list.
pub struct Stack<T> {
    list: LinkedList<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// The top element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.list.head()
    }

    pub fn push(&mut self, item: T) {
        self.list.prepend(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.list.delete_head()
    }

    /// Every element, top first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.to_vec()
    }

    pub fn to_string_with<F>(&self, callback: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        self.list.to_string_with(callback)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.list, f)
    }
}
