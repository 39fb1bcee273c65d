//! The record handed to encoders.

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::level::Level;

/// One log record, minus its structured fields.
#[derive(Debug, Clone)]
pub struct Entry {
    pub level: Level,
    pub time: DateTime<Local>,
    /// Logger name; empty for the root logger
    pub name: String,
    /// `file:line` of the logging call site
    pub caller: Option<String>,
    pub message: String,
    /// Captured backtrace, present for error severity and above
    pub stack: Option<String>,
}

impl Entry {
    /// Create an entry stamped with the current local time.
    pub fn new(level: Level, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            time: Local::now(),
            name: name.into(),
            caller: None,
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = Some(caller.into());
        self
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }
}

/// A structured key/value pair attached to a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
