//! Logging utilities.
//!
//! Centralizes logger initialization for binaries. The crates themselves
//! only use the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
