pub mod command;
pub mod error;
pub mod max_heap;

#[cfg(test)]
mod testing;

pub use crate::error::Error;
pub use crate::max_heap::{Entry, MaxHeap};

// priority of a queue entry; greater values are extracted first
pub type Priority = i64;
