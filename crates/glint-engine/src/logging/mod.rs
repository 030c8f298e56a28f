//! Logging utilities.
//!
//! Centralizes logger initialization. Everything the runtime reports —
//! including windowing-layer failures — goes through the `log` facade
//! to the standard error stream.

mod init;

pub use init::init_logging;
