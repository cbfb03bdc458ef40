//!
//! A minimal leveled console logger
//!
//! One line per call, written to standard error: a severity label,
//! optional ANSI color, optional wall-clock timestamp and the
//! call-site file and line, followed by the formatted message. No
//! sinks, no filtering, no framework.
//!
//! ```rust
//! use tinylog::{log_info, Level, Logger};
//!
//! let mut logger = Logger::new();
//! logger.enable_color(true);
//! logger.set_color(Level::Info, "\x1b[0;36m");
//!
//! log_info!(logger, "listening on port {}\n", 8080);
//! ```
//!

mod error;
mod level;
mod logger;

pub use error::UnknownLevel;
pub use level::Level;
pub use logger::Logger;

#[doc(hidden)]
pub use logger::_emit_global;
