use crate::domain::HostInfo;

/// Port for fetching host identification
pub trait SystemSource {
    /// Get host name and OS description
    fn host_info(&self) -> HostInfo;
}
