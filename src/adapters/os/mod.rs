mod disk;
mod system;

pub use disk::StatvfsDiskSource;
pub use system::UnameSystemSource;

/// Combined adapter for the OS-backed disk and system sources
#[derive(Debug, Clone, Default)]
pub struct OsAdapter;

impl OsAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn disk_source(&self) -> StatvfsDiskSource {
        StatvfsDiskSource::new()
    }

    pub fn system_source(&self) -> UnameSystemSource {
        UnameSystemSource::new()
    }
}
