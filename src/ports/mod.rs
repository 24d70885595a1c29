pub mod clock;
pub mod disk_source;
pub mod system_source;

pub use clock::Clock;
pub use disk_source::DiskUsageSource;
pub use system_source::SystemSource;
