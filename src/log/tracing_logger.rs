use tracing::{info, warn};

use super::Logger;

/// Forwards bus diagnostics to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        info!(target: "courier", "{}", message);
    }

    fn log_warning(&self, message: &str) {
        warn!(target: "courier", "{}", message);
    }
}
