//! Port traits defining external boundaries.
//!
//! The generator only crosses one boundary, the filesystem. Implementations
//! live in `src/adapters/`.

pub mod filesystem;

pub use filesystem::FileSystem;
