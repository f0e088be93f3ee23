//! Application initialization.
//!
//! The engine needs no shared resources, so the only process-wide setup is
//! the logger.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
