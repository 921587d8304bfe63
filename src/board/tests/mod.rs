//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `edge_cases.rs` - Special positions and deep apply/revert sequences
//! - `proptest.rs` - Property-based tests
