//! Structured logging with page context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::RequestId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Page load this entry belongs to.
    pub request_id: String,
    /// Page name (e.g. "listing").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Location the page was loaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}] {}", self.level, self.message);

        if let Some(page) = &self.page {
            s = format!("[{}] {}: {}", self.level, page, self.message);
        }

        if let Some(elapsed) = self.elapsed_us {
            s.push_str(&format!(" ({}us)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Where formatted entries go.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Standard error, the storefront's console.
    #[default]
    Stderr,
    /// In-memory buffer, read back with [`StructuredLogger::captured`].
    Memory(Arc<Mutex<Vec<String>>>),
    /// Discard everything.
    Null,
}

/// Structured logger with page context.
///
/// Each page load gets its own logger so every line carries the same
/// request id.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    page: Option<String>,
    route: Option<String>,
    start_time: std::time::Instant,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for one page load.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            page: None,
            route: None,
            start_time: std::time::Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Stderr,
        }
    }

    /// Logger that keeps entries in memory.
    pub fn capturing() -> Self {
        Self::new(RequestId::generate())
            .with_sink(LogSink::Memory(Arc::new(Mutex::new(Vec::new()))))
    }

    /// Logger that drops everything.
    pub fn silent() -> Self {
        Self::new(RequestId::generate()).with_sink(LogSink::Null)
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Copy of this logger scoped to another page, sharing sink and settings
    /// but starting a new page load.
    pub fn for_page(&self, page: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            request_id: RequestId::generate(),
            page: Some(page.into()),
            route: Some(route.into()),
            start_time: std::time::Instant::now(),
            min_level: self.min_level,
            format: self.format,
            sink: self.sink.clone(),
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at info level with fields.
    pub fn info_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        self.log(LogLevel::Info, message, to_fields(fields));
    }

    /// Log at warn level with fields.
    pub fn warn_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        self.log(LogLevel::Warn, message, to_fields(fields));
    }

    /// Log at error level with fields.
    pub fn error_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        self.log(LogLevel::Error, message, to_fields(fields));
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            request_id: self.request_id.to_string(),
            page: self.page.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.elapsed_us()),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        match &self.sink {
            LogSink::Stderr => eprintln!("{}", output),
            LogSink::Memory(buffer) => {
                if let Ok(mut lines) = buffer.lock() {
                    lines.push(output);
                }
            }
            LogSink::Null => {}
        }
    }

    /// Lines written to a memory sink so far.
    pub fn captured(&self) -> Vec<String> {
        match &self.sink {
            LogSink::Memory(buffer) => buffer.lock().map(|l| l.clone()).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Get the request ID.
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Get elapsed time since logger creation.
    pub fn elapsed_us(&self) -> u64 {
        self.start_time.elapsed().as_micros() as u64
    }
}

fn to_fields(fields: &[(&str, &dyn fmt::Display)]) -> BTreeMap<String, serde_json::Value> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_entry_has_context() {
        let logger = StructuredLogger::capturing().for_page("listing", "/products?q=rose");
        logger.info_with("loaded", &[("count", &3)]);

        let lines = logger.captured();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["page"], "listing");
        assert_eq!(value["route"], "/products?q=rose");
        assert_eq!(value["count"], "3");
        assert_eq!(value["request_id"], logger.request_id().to_string());
    }

    #[test]
    fn test_min_level_filters() {
        let logger = StructuredLogger::capturing().with_min_level(LogLevel::Warn);
        logger.info("skipped");
        logger.warn_with("kept", &[]);
        assert_eq!(logger.captured().len(), 1);
    }

    #[test]
    fn test_human_format() {
        let logger = StructuredLogger::capturing()
            .for_page("cart", "/cart")
            .with_format(LogFormat::Human);
        logger.error_with("update failed", &[("status", &500)]);

        let line = &logger.captured()[0];
        assert!(line.starts_with("[ERROR] cart: update failed"));
        assert!(line.contains("status=\"500\""));
    }

    #[test]
    fn test_for_page_shares_sink() {
        let root = StructuredLogger::capturing();
        let page = root.for_page("detail", "/products/4");
        page.info("hello");
        assert_eq!(root.captured().len(), 1);
        assert_ne!(root.request_id(), page.request_id());
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
    }
}
