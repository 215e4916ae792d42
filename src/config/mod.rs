//! Configuration module
//!
//! - Data directory resolution (env override or platform config dir)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
