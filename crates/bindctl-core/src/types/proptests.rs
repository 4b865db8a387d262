//! Property-based tests for rule types and update strategies.
