//! Structured logging with session context.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::SessionId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
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

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Session the entry belongs to.
    pub session_id: String,
    /// Emitting part of the app, e.g. "cart" or "inquiry".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields, sorted by key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = format!("[{}]", self.level);
        if let Some(component) = &self.component {
            s.push_str(&format!(" {component}:"));
        }
        s.push(' ');
        s.push_str(&self.message);

        if let Some(route) = &self.route {
            s.push_str(&format!(" @ {route}"));
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
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Structured logger with session context.
///
/// Each entry is rendered in the configured format and handed to `tracing`
/// at the matching level, so whatever subscriber is installed (fmt on native
/// runs, the browser console on wasm) decides where it goes.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    session_id: SessionId,
    component: Option<String>,
    route: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Create a new logger for a session.
    pub fn new(session_id: SessionId) -> Self {
        Self {
            session_id,
            component: None,
            route: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the route path.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
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

    /// Same session and settings, different component.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        self.clone().with_component(component)
    }

    /// Build the entry, or `None` when `level` is below the threshold.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            session_id: self.session_id.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
        })
    }

    /// Render an entry in this logger's format.
    pub fn render(&self, entry: &LogEntry) -> String {
        match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        }
    }

    fn write(&self, entry: &LogEntry) {
        let output = self.render(entry);
        let session = self.session_id.as_str();

        match entry.level {
            LogLevel::Trace => tracing::trace!(session, "{output}"),
            LogLevel::Debug => tracing::debug!(session, "{output}"),
            LogLevel::Info => tracing::info!(session, "{output}"),
            LogLevel::Warn => tracing::warn!(session, "{output}"),
            LogLevel::Error => tracing::error!(session, "{output}"),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// The entry this builder would emit, if it passes the level threshold.
    pub fn build(self) -> Option<LogEntry> {
        self.logger.entry(self.level, &self.message, self.fields)
    }

    /// Emit the log entry.
    pub fn emit(self) {
        let logger = self.logger;
        if let Some(entry) = self.build() {
            logger.write(&entry);
        }
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new("sess_test01".parse().unwrap())
    }

    #[test]
    fn test_threshold() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.entry(LogLevel::Info, "skipped", BTreeMap::new()).is_none());
        assert!(logger.entry(LogLevel::Error, "kept", BTreeMap::new()).is_some());
        assert!(logger.debug_builder("skipped").build().is_none());
    }

    #[test]
    fn test_json_entry() {
        let logger = logger().with_component("cart").with_route("/cart");
        let entry = logger
            .info_builder("cart updated")
            .field("action", "add_item")
            .field_u64("total_items", 3)
            .field_bool("changed", true)
            .build()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&logger.render(&entry)).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["session_id"], "sess_test01");
        assert_eq!(json["component"], "cart");
        assert_eq!(json["route"], "/cart");
        assert_eq!(json["action"], "add_item");
        assert_eq!(json["total_items"], 3);
        assert_eq!(json["changed"], true);
    }

    #[test]
    fn test_json_omits_missing_context() {
        let entry = logger().entry(LogLevel::Info, "hi", BTreeMap::new()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert!(json.get("component").is_none());
        assert!(json.get("route").is_none());
    }

    #[test]
    fn test_human_entry() {
        let logger = logger()
            .with_format(LogFormat::Human)
            .for_component("inquiry");
        let entry = logger
            .warn_builder("submission failed")
            .field("form", "contact")
            .field_u64("attempt", 2)
            .build()
            .unwrap();

        assert_eq!(
            logger.render(&entry),
            "[WARN] inquiry: submission failed | attempt=2 form=\"contact\""
        );
    }

    #[test]
    fn test_emit_does_not_panic_without_subscriber() {
        let logger = logger().with_min_level(LogLevel::Trace);
        logger.debug_builder("quiet").emit();
        logger.error_builder("boom").field("k", "v").emit();
    }
}
