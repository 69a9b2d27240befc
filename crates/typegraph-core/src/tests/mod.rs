//! Shared fixtures for typegraph-core tests.
//!
//! - `simple_tree`: a hand-built syntax tree so the extractor can be tested
//!   without a real grammar
