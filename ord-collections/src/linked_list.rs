use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};
use core::iter::FromIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;
use crate::comparator::{Comparator, NaturalOrder};

struct Node<T> {
    value: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    fn alloc(value: T, next: Option<NonNull<Node<T>>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, next })))
    }
}

/// Singly-linked list with O(1) access to both ends.
///
/// Value lookups (`find`, `delete`) go through the list's comparator.
pub struct LinkedList<T, C = NaturalOrder> {
    // Nodes come from `Box::leak` and are freed once through `Box::from_raw`.
    // Every node is reachable from `head`; `tail` aliases the last one.
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    comparator: C,
    _owns: PhantomData<Box<Node<T>>>,
}


impl<T> LinkedList<T, NaturalOrder> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C> LinkedList<T, C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            comparator,
            _owns: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).value })
    }

    pub fn prepend(&mut self, value: T) -> &mut Self {
        let node = Node::alloc(value, self.head);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.head = Some(node);
        self.len += 1;
        self
    }

    pub fn append(&mut self, value: T) -> &mut Self {
        self.push_node(Node::alloc(value, None));
        self
    }

    fn push_node(&mut self, node: NonNull<Node<T>>) {
        unsafe {
            (*node.as_ptr()).next = None;
            match self.tail {
                None => self.head = Some(node),
                Some(tail) => (*tail.as_ptr()).next = Some(node),
            }
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// Index 0 prepends, an index past the end appends.
    pub fn insert(&mut self, value: T, index: usize) -> &mut Self {
        if index == 0 {
            return self.prepend(value);
        }
        if index >= self.len {
            return self.append(value);
        }

        // 0 < index < len, so the new node never becomes the tail
        if let Some(cur) = self.node_at(index - 1) {
            unsafe {
                let cur = cur.as_ptr();
                (*cur).next = Some(Node::alloc(value, (*cur).next));
            }
            self.len += 1;
        }
        self
    }

    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        let mut cur = self.head?;
        for _ in 0..index {
            cur = unsafe { (*cur.as_ptr()).next }?;
        }
        Some(cur)
    }

    pub fn delete_head(&mut self) -> Option<T> {
        let head = self.head?;
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.value)
    }

    /// Removes the last node. O(n), the list only links forward.
    pub fn delete_tail(&mut self) -> Option<T> {
        if self.len <= 1 {
            return self.delete_head();
        }

        let prev = self.node_at(self.len - 2)?;
        let last = unsafe { (*prev.as_ptr()).next.take() }?;
        let node = unsafe { Box::from_raw(last.as_ptr()) };
        self.tail = Some(prev);
        self.len -= 1;
        Some(node.value)
    }

    /// First value matching `predicate`.
    pub fn find_by<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(*value))
    }

    pub fn reverse(&mut self) -> &mut Self {
        let mut rest = self.head;
        let mut prev = None;
        self.tail = self.head;
        while let Some(node) = rest {
            unsafe {
                rest = (*node.as_ptr()).next;
                (*node.as_ptr()).next = prev;
            }
            prev = Some(node);
        }
        self.head = prev;
        self
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            _marker: PhantomData,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Comma separated rendering of every value through `callback`.
    pub fn to_string_with<F>(&self, mut callback: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut out = String::new();
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(&callback(value));
        }
        out
    }
}

impl<T, C: Comparator<T>> LinkedList<T, C> {
    /// Removes every node equal to `value` and returns the last one removed.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut deleted = None;
        let mut rest = self.head.take();
        self.tail = None;
        self.len = 0;
        while let Some(node) = rest {
            unsafe {
                rest = (*node.as_ptr()).next;
                if self.comparator.equal(&(*node.as_ptr()).value, value) {
                    deleted = Some(Box::from_raw(node.as_ptr()).value);
                } else {
                    self.push_node(node);
                }
            }
        }
        deleted
    }

    /// First value equal to `value`.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.iter().find(|item| self.comparator.equal(item, value))
    }
}


impl<T, C> Drop for LinkedList<T, C> {
    fn drop(&mut self) {
        while self.delete_head().is_some() {}
    }
}

impl<T> Default for LinkedList<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, C> Extend<T> for LinkedList<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T: fmt::Display, C> fmt::Display for LinkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for LinkedList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a LinkedList<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}


pub struct Iter<'a, T> {
    next: Option<NonNull<Node<T>>>,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            &node.value
        })
    }
}
