pub mod disk;
pub mod host;
pub mod status;

pub use disk::{format_decimal, DiskUsage};
pub use host::HostInfo;
pub use status::UsageStatus;
