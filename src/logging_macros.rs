#![warn(clippy::all, rust_2018_idioms)]

/// Tracing macros that prefix each message with `[file:module:line]`.
///
/// The walk runs once and exits, so the log file is usually read after the
/// fact; the source location makes it possible to tell which probe produced
/// a given line without enabling span output.
#[macro_export]
macro_rules! trace_trace {
    ($($arg:tt)*) => {
        tracing::trace!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_info {
    ($($arg:tt)*) => {
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Log level guidelines:

TRACE: per-record details (each subscription filter, each notification entry)
DEBUG: client construction, page fetches, graph insertions
INFO:  walk milestones (trail started, probe finished, artifact written)
WARN:  skipped input (unnamed trail, filter without destination ARN)
ERROR: the failure that aborts the run

Example output:
  [src/app/walker.rs:trailguard::app::walker:116] Walking trail audit-trail-1
*/
