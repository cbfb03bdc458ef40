//!
//! A module that contains the logger configuration and the line
//! formatting-and-emission routine
//!

use std::fmt::{Arguments, Write as _};
use std::io::Write;
use std::sync::RwLock;
use chrono::Local;
use lazy_static::lazy_static;
use crate::level::{Level, RESET_COLOR};

lazy_static! {
    static ref GLOBAL: RwLock<Logger> = RwLock::new(Logger::new());
}

///
/// A logging channel: per-level color overrides, a timestamp flag
/// and a color switch
///
/// The zero value emits no color and no timestamp:
///
/// ```rust
/// use tinylog::{log_warn, Logger};
///
/// let mut logger = Logger::new();
/// logger.enable_color(true);
/// logger.enable_time(true);
///
/// log_warn!(logger, "disk usage at {}%\n", 93);
/// ```
///
pub struct Logger {
    overrides: [Option<String>; 6],
    show_time: bool,
    color: bool
}

impl Logger {

    ///
    /// Create a logger with no overrides, no timestamp and no color
    ///
    pub fn new() -> Self {
        Self {
            overrides: Default::default(),
            show_time: false,
            color: false
        }
    }

    ///
    /// Enable or disable color escape sequences
    ///
    /// When disabled, lines contain no escape bytes at all.
    ///
    pub fn enable_color(&mut self, is_ok: bool) {
        self.color = is_ok;
    }

    ///
    /// Enable or disable the wall-clock timestamp in the prefix
    ///
    pub fn enable_time(&mut self, is_ok: bool) {
        self.show_time = is_ok;
    }

    ///
    /// Override the color of a level
    ///
    /// An empty string is ignored and the built-in color is kept.
    ///
    pub fn set_color(&mut self, level: Level, color: &str) {
        self.overrides[level as usize] = Some(color.to_string());
    }

    ///
    /// Drop the override of a level and fall back to its built-in color
    ///
    pub fn use_default_color(&mut self, level: Level) {
        self.overrides[level as usize] = None;
    }

    ///
    /// Install this logger as the process-wide channel used by [log!](crate::log)
    ///
    pub fn install(self) {
        if let Ok(mut global) = GLOBAL.write() {
            *global = self;
        }
    }

    ///
    /// Write one formatted line to standard error
    ///
    /// The payload gets no trailing newline; callers include `\n` in
    /// their format string. Write failures are ignored, a log call
    /// never aborts the caller.
    ///
    pub fn emit(&self, level: Level, file: &str, line: u32, args: Arguments<'_>) {
        let buf = self.render(level, file, line, args);
        let _ = std::io::stderr().lock().write_all(buf.as_bytes());
    }

    // The whole line is composed into one buffer and written with a
    // single call, so lines from concurrent callers are less likely
    // to interleave.
    fn render(&self, level: Level, file: &str, line: u32, args: Arguments<'_>) -> String {
        let (color, reset) = self.resolve_color(level);

        let mut out = String::new();
        let _ = write!(out, "* {}{}{}\t", color, level.name(), reset);

        if self.show_time {
            let _ = write!(out, "{} -> ", Local::now().format("%H:%M:%S"));
        } else {
            let _ = write!(out, "-> ");
        }

        let _ = write!(out, "{}:{}: ", file, line);
        let _ = out.write_fmt(args);
        out
    }

    fn resolve_color(&self, level: Level) -> (&str, &str) {
        if !self.color {
            return ("", "");
        }

        let color = match self.overrides[level as usize].as_deref() {
            Some(color) if !color.is_empty() => color,
            _ => level.default_color()
        };

        (color, RESET_COLOR)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

#[doc(hidden)]
pub fn _emit_global(level: Level, file: &str, line: u32, args: Arguments<'_>) {
    // A poisoned lock is swallowed, best-effort like every other
    // failure on this path.
    if let Ok(global) = GLOBAL.read() {
        global.emit(level, file, line, args);
    }
}

///
/// Log messages with specified severity levels through the
/// process-wide channel.
///
/// The channel starts out as the zero-value [Logger] (no color, no
/// timestamp); replace it with [Logger::install].
///
/// ## Usage
///
/// ```txt
/// log!(<severity> <format> <arguments>...);
/// ```
///
/// ## Output Format
///
/// ```txt
/// * SEVERITY\t[HH:MM:SS ]-> file:line: formatted message...
/// ```
///
/// - **Severity**: the capitalised name of the severity argument.
/// - **file:line**: the location of the `log!` call itself.
///
/// No trailing newline is appended; end the format string with `\n`.
///
/// ## Severity Levels
///
/// `trace`, `debug`, `info`, `warn`, `error`, `fatal`.
///
/// ## Examples
///
/// ```rust
/// use tinylog::log;
///
/// log!(info "Hello!\n");
/// log!(error "Error with {}\n", "Such error");
/// ```
///
#[macro_export]
macro_rules! log {
    (trace $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Trace, file!(), line!(), format_args!($($args)+))
    };

    (debug $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Debug, file!(), line!(), format_args!($($args)+))
    };

    (info $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Info, file!(), line!(), format_args!($($args)+))
    };

    (warn $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Warn, file!(), line!(), format_args!($($args)+))
    };

    (error $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Error, file!(), line!(), format_args!($($args)+))
    };

    (fatal $($args:tt)+) => {
        $crate::_emit_global($crate::Level::Fatal, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Trace logging on a [Logger], capturing the call site
///
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Trace, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Debug logging on a [Logger], capturing the call site
///
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Debug, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Information logging on a [Logger], capturing the call site
///
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Info, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Warning logging on a [Logger], capturing the call site
///
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Warn, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Error logging on a [Logger], capturing the call site
///
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Error, file!(), line!(), format_args!($($args)+))
    };
}

///
/// Fatal logging on a [Logger], capturing the call site
///
/// Fatal is only a label; the logger never terminates the process.
///
#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($args:tt)+) => {
        $logger.emit($crate::Level::Fatal, file!(), line!(), format_args!($($args)+))
    };
}
