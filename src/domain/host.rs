/// Host identification printed in the report header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub hostname: String,
    pub os_info: String,
}

impl HostInfo {
    pub fn new(hostname: impl Into<String>, os_info: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            os_info: os_info.into(),
        }
    }

    /// Placeholder used when the OS cannot identify itself
    pub fn unknown() -> Self {
        Self::new("unknown", "unknown")
    }
}
