//! Bridge from the `tracing` ecosystem into a facade's core.
//!
//! Crates that log with `tracing` macros can share the facade's encoder,
//! sink and threshold by installing [`FacadeLayer`]:
//!
//! ```rust,ignore
//! use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
//!
//! let log = logam_core::LogFacade::new(config);
//! tracing_subscriber::registry().with(log.layer()).init();
//! tracing::warn!(disk_pct = 93, "low disk");
//! ```
//!
//! The event target becomes NAME, `file:line` from the callsite becomes
//! CALLER and every field other than `message` is written as a typed field.

use serde_json::Value;
use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;
use tracing::field::{Field as TracingField, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::backend::Core;
use crate::entry::{Entry, Field};
use crate::level::Level;

/// A tracing layer that writes events through a facade's core.
#[derive(Debug, Clone)]
pub struct FacadeLayer {
    core: Arc<Core>,
    stacktrace_level: Level,
}

impl FacadeLayer {
    pub(crate) fn new(core: Arc<Core>, stacktrace_level: Level) -> Self {
        Self {
            core,
            stacktrace_level,
        }
    }
}

impl<S> Layer<S> for FacadeLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from_tracing(metadata.level());
        if !self.core.enabled(level) {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut entry = Entry::new(
            level,
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );
        if let (Some(file), Some(line)) = (metadata.file(), metadata.line()) {
            entry = entry.with_caller(format!("{file}:{line}"));
        }
        if level >= self.stacktrace_level {
            entry = entry.with_stack(Backtrace::force_capture().to_string());
        }
        self.core.write(&entry, &visitor.fields);
    }
}

/// Collects the message and typed fields of one event.
#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<Field>,
}

impl FieldVisitor {
    fn push(&mut self, field: &TracingField, value: Value) {
        self.fields.push(Field::new(field.name(), value));
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &TracingField, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        } else {
            self.push(field, Value::String(format!("{value:?}")));
        }
    }

    fn record_str(&mut self, field: &TracingField, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        } else {
            self.push(field, Value::from(value));
        }
    }

    fn record_i64(&mut self, field: &TracingField, value: i64) {
        self.push(field, Value::from(value));
    }

    fn record_u64(&mut self, field: &TracingField, value: u64) {
        self.push(field, Value::from(value));
    }

    fn record_f64(&mut self, field: &TracingField, value: f64) {
        self.push(field, Value::from(value));
    }

    fn record_bool(&mut self, field: &TracingField, value: bool) {
        self.push(field, Value::from(value));
    }
}
