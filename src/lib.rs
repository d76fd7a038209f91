//! conlog - minimal leveled console logger
//!
//! Each call renders `YYYY-MM-DD.HH:MM:SS <TAG>: value value ...` to stdout
//! when its severity passes the logger's fixed threshold.

pub mod config;
pub mod logging;

pub use config::Config;
pub use logging::{Logger, Severity};
