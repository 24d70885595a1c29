pub mod clock;
pub mod os;

pub use clock::SystemClock;
pub use os::OsAdapter;
