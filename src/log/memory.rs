use std::sync::{Arc, Mutex};

use super::Logger;

const INFO_PREFIX: &str = "[INFO] ";
const WARN_PREFIX: &str = "[WARN] ";

/// Logger that records lines into a shared buffer.
///
/// Clones write to the same buffer, so a test can keep one handle and give
/// the other to the bus.
///
/// ```
/// use courier::log::{Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.log_warning("careful");
/// assert_eq!(logger.warnings(), vec!["careful".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemoryLogger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        Self { buffer }
    }

    /// Every recorded line, prefixed with `[INFO] ` or `[WARN] `.
    pub fn lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// Informational lines without their prefix.
    pub fn infos(&self) -> Vec<String> {
        self.stripped(INFO_PREFIX)
    }

    /// Warning lines without their prefix.
    pub fn warnings(&self) -> Vec<String> {
        self.stripped(WARN_PREFIX)
    }

    fn stripped(&self, prefix: &str) -> Vec<String> {
        self.lines()
            .iter()
            .filter_map(|line| line.strip_prefix(prefix))
            .map(str::to_string)
            .collect()
    }

    fn push(&self, prefix: &str, message: &str) {
        // A poisoned buffer means a test already panicked; drop the line
        if let Ok(mut lines) = self.buffer.lock() {
            lines.push(format!("{}{}", prefix, message));
        }
    }
}

impl Logger for MemoryLogger {
    fn log(&self, message: &str) {
        self.push(INFO_PREFIX, message);
    }

    fn log_warning(&self, message: &str) {
        self.push(WARN_PREFIX, message);
    }
}
