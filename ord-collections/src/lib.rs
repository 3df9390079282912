#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
extern crate log;

mod comparator;
mod heap;
mod linked_list;
mod queue;
mod search;
mod sort;
mod stack;

pub use comparator::{
    comparing, comparing_with, natural_order, reverse_order,
    Comparator, Comparing, NaturalOrder, ReverseOrder,
};
pub use heap::{BinaryHeap, HeapOrder, MaxHeap, MaxOrder, MinHeap, MinOrder};
pub use linked_list::{Iter, LinkedList};
pub use queue::Queue;
pub use search::binary_search;
pub use sort::{heap_sort, quick_sort};
pub use stack::Stack;
