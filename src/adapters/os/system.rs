use nix::sys::utsname::uname;
use tracing::warn;

use crate::domain::HostInfo;
use crate::ports::SystemSource;

/// System source backed by uname(2)
#[derive(Debug, Clone, Default)]
pub struct UnameSystemSource;

impl UnameSystemSource {
    pub fn new() -> Self {
        Self
    }
}

impl SystemSource for UnameSystemSource {
    fn host_info(&self) -> HostInfo {
        match uname() {
            Ok(uts) => HostInfo::new(
                uts.nodename().to_string_lossy(),
                format!(
                    "{} {}",
                    uts.sysname().to_string_lossy(),
                    uts.release().to_string_lossy()
                ),
            ),
            Err(e) => {
                warn!("uname failed: {}", e);
                HostInfo::unknown()
            }
        }
    }
}
