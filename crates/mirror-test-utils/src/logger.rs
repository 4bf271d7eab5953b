//! In-memory [`SyncLogger`] for assertions on emitted events.

use mirror_core::{LogEvent, SyncLogger};

/// Records the rendered message of every event it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingLogger {
    messages: Vec<String>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages received so far, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Messages starting with `prefix`, e.g. `"Copying"`.
    pub fn with_prefix(&self, prefix: &str) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.starts_with(prefix))
            .map(String::as_str)
            .collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl SyncLogger for RecordingLogger {
    fn log(&mut self, event: &LogEvent<'_>) -> mirror_core::Result<()> {
        self.messages.push(event.to_string());
        Ok(())
    }
}
