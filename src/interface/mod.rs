pub mod cli;
pub mod console;

pub use cli::Cli;
