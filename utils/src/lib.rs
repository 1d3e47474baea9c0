//! Logging and configuration shared by hosts that run IOU contracts.

pub mod config;
pub mod error;
pub mod logging;

pub use config::LogConfig;
pub use error::UtilsError;
pub use logging::{init_logging, init_tracing, LogFormat};
