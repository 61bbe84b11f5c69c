//! Logging collaborator handed to the pipeline.
//!
//! The pipeline reports through a `LogSink` instead of touching global
//! logging state. `TracingSink` forwards to `tracing`, whose subscriber is
//! set up once by the binary.

/// Severity-leveled sink for pipeline diagnostics.
pub trait LogSink {
    /// Detailed trace of decisions.
    fn debug(&self, message: &str);
    /// Run milestones and summaries.
    fn info(&self, message: &str);
    /// A file needs manual attention.
    fn warn(&self, message: &str);
    /// An operation failed but the run continues.
    fn error(&self, message: &str);
}

/// Forwards every message to `tracing` under the `shipsort` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "shipsort", "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "shipsort", "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "shipsort", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "shipsort", "{}", message);
    }
}

/// In-memory sink for unit tests in this crate.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    pub(crate) lines: std::cell::RefCell<Vec<(&'static str, String)>>,
}

#[cfg(test)]
impl MemorySink {
    pub(crate) fn at(&self, level: &str) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl LogSink for MemorySink {
    fn debug(&self, message: &str) {
        self.lines.borrow_mut().push(("debug", message.to_string()));
    }

    fn info(&self, message: &str) {
        self.lines.borrow_mut().push(("info", message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.lines.borrow_mut().push(("warn", message.to_string()));
    }

    fn error(&self, message: &str) {
        self.lines.borrow_mut().push(("error", message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_is_object_safe() {
        fn _takes_sink(_: &dyn LogSink) {}
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        let sink = TracingSink;
        sink.debug("debug");
        sink.info("info");
        sink.warn("warn");
        sink.error("error");
    }
}
