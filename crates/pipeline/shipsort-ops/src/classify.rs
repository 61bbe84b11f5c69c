//! Scope and single-detail classification of log text.

use shipsort_types::SINGLE_DETAIL_MARKER;

use crate::log::LogSink;

/// Result of classifying one log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The text contains the scope marker.
    pub in_scope: bool,
    /// The text may be extracted automatically.
    pub is_simple: bool,
}

/// Decides whether a log is relevant and safe to extract.
#[derive(Debug, Clone)]
pub struct Classifier {
    scope_marker: String,
    require_single_detail: bool,
}

impl Classifier {
    /// Create a classifier for `scope_marker`.
    ///
    /// With `require_single_detail` set, logs lacking the single-detail
    /// marker are not simple: they may describe several shipments and the
    /// extractor would only see the first.
    pub fn new(scope_marker: impl Into<String>, require_single_detail: bool) -> Self {
        Self {
            scope_marker: scope_marker.into(),
            require_single_detail,
        }
    }

    /// Classify `text`. Pure.
    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            in_scope: text.contains(self.scope_marker.as_str()),
            is_simple: !self.require_single_detail || text.contains(SINGLE_DETAIL_MARKER),
        }
    }

    /// Classify `text` and warn about in-scope logs that are not simple.
    pub fn classify_file(&self, file_name: &str, text: &str, log: &dyn LogSink) -> Classification {
        let classification = self.classify(text);
        if classification.in_scope && !classification.is_simple {
            log.warn(&format!(
                "{} contains more than 1 Detail, please add manually",
                file_name
            ));
        }
        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::MemorySink;

    #[test]
    fn test_in_scope_is_literal_substring() {
        let classifier = Classifier::new("ZRH", false);
        assert!(classifier.classify("from ZRH to JFK").in_scope);
        assert!(!classifier.classify("from zrh to JFK").in_scope);
        assert!(!classifier.classify("").in_scope);
    }

    #[test]
    fn test_simple_without_requirement() {
        let classifier = Classifier::new("ZRH", false);
        assert!(classifier.classify("ZRH 3Details").is_simple);
    }

    #[test]
    fn test_single_detail_requirement() {
        let classifier = Classifier::new("ZRH", true);
        assert!(classifier.classify("ZRH 1Details").is_simple);
        assert!(!classifier.classify("ZRH 2Details").is_simple);
    }

    #[test]
    fn test_is_simple_does_not_depend_on_scope() {
        let classifier = Classifier::new("ZRH", true);
        let c = classifier.classify("GVA 1Details");
        assert!(!c.in_scope);
        assert!(c.is_simple);
    }

    #[test]
    fn test_classify_file_warns_when_not_simple() {
        let sink = MemorySink::default();
        let classifier = Classifier::new("ZRH", true);

        classifier.classify_file("log_1.txt", "ZRH 2Details", &sink);
        classifier.classify_file("log_2.txt", "ZRH 1Details", &sink);
        classifier.classify_file("log_3.txt", "GVA 2Details", &sink);

        let warnings = sink.at("warn");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("log_1.txt"));
    }
}
