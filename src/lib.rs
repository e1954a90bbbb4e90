pub mod cli;
pub mod core;
pub mod error;
pub mod storage;

pub use error::{Result, SvError};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
