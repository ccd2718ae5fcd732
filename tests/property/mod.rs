//! Property-based tests for comparison guarantees

mod classification;
