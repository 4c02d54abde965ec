//! Structured JSON logger
//!
//! One log line = one event:
//! - JSON object with `event` and `severity` first, then fields sorted by key
//! - Synchronous, unbuffered writes
//! - Info and below to stdout, errors to stderr

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use serde_json::json;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Debug = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured logger that writes one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        if severity >= Severity::Error {
            Self::log_to_writer(severity, event, fields, &mut io::stderr());
        } else {
            Self::log_to_writer(severity, event, fields, &mut io::stdout());
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        // BTreeMap gives deterministic (sorted) field order
        let sorted: BTreeMap<&str, &str> = fields.iter().copied().collect();

        let mut record = serde_json::Map::new();
        record.insert("event".to_string(), json!(event));
        record.insert("severity".to_string(), json!(severity.as_str()));
        for (key, value) in sorted {
            record.insert(key.to_string(), json!(value));
        }

        let mut line = serde_json::Value::Object(record).to_string();
        line.push('\n');

        // One write, then flush; a failed log write is never fatal
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }

    /// Log at DEBUG level
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Debug, event, fields);
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }
}

/// Capture a log line into a string for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
    }

    #[test]
    fn test_log_is_valid_json() {
        let output = capture_log(Severity::Info, "TEST_EVENT", &[("key", "value")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "TEST_EVENT");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["key"], "value");
    }

    #[test]
    fn test_log_deterministic_field_order() {
        let a = capture_log(Severity::Info, "T", &[("b", "2"), ("a", "1")]);
        let b = capture_log(Severity::Info, "T", &[("a", "1"), ("b", "2")]);

        assert_eq!(a, b);
        assert!(a.find("\"a\"").unwrap() < a.find("\"b\"").unwrap());
    }

    #[test]
    fn test_log_event_comes_first() {
        let output = capture_log(Severity::Warn, "MY_EVENT", &[("addr", "0.0.0.0:8080")]);

        assert!(output.find("\"event\"").unwrap() < output.find("\"severity\"").unwrap());
        assert!(output.find("\"severity\"").unwrap() < output.find("\"addr\"").unwrap());
    }

    #[test]
    fn test_log_is_one_line() {
        let output = capture_log(Severity::Info, "T", &[("msg", "line1\nline2")]);

        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        assert!(output.ends_with('\n'));

        // Embedded newlines are escaped, not emitted
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["msg"], "line1\nline2");
    }
}
