//! Property-based tests for outcomes and capture boundaries.
