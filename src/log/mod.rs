//! Logging collaborator for diagnostic output.
//!
//! The bus never writes diagnostics directly. It hands plain strings to a
//! [`Logger`]: informational lines only when the bus is verbose, warnings
//! always.
//!
//! | Logger | Destination |
//! |---|---|
//! | [`TracingLogger`] | `tracing` events under target `courier` (default) |
//! | [`NullLogger`] | discarded |
//! | [`MemoryLogger`] | shared in-memory buffer, for tests |

mod memory;
mod tracing_logger;

pub use memory::MemoryLogger;
pub use tracing_logger::TracingLogger;

/// Sink for the bus's diagnostic messages.
pub trait Logger {
    /// Informational line. Only called when the bus is verbose.
    fn log(&self, message: &str);

    /// Warning line. Called regardless of verbosity.
    fn log_warning(&self, message: &str);
}

/// Logger that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _message: &str) {}

    fn log_warning(&self, _message: &str) {}
}
