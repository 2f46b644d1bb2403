//! Shared test utilities for munpul integration harnesses.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. Helpers are deterministic; anything touching the filesystem
//! goes through `tempfile`.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
