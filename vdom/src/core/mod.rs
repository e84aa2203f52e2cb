//! Pure, deterministic element-descriptor logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! values and return deterministic outputs suitable for tests.

pub mod classifier;
pub mod clone_node;
pub mod create_element;
pub mod hyperscript;
pub mod types;
