//! Service context bundling the port trait objects a run needs.

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::ports::filesystem::FileSystem;

/// Bundles the external boundaries of a generation run.
///
/// Constructors wire up different adapter implementations (live, in-memory).
pub struct ServiceContext {
    /// Filesystem for document and artifact I/O.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context backed by the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context over the given filesystem adapter.
    #[must_use]
    pub fn with_fs(fs: impl FileSystem + 'static) -> Self {
        Self { fs: Box::new(fs) }
    }
}
