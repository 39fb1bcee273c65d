//! The configured logger handed to application code.

use std::backtrace::Backtrace;
use std::panic::Location;
use std::sync::Arc;

use crate::config::Config;
use crate::backend::Core;
use crate::encoder::EncoderConfig;
use crate::entry::{Entry, Field};
use crate::fields::{sweeten, DANGLING_KEY_MESSAGE, NON_STRING_KEYS_MESSAGE};
use crate::layer::FacadeLayer;
use crate::level::{AtomicLevel, Level};
use crate::logger::{Logger, Payload};
use crate::sink::Sink;

/// What happens after a fatal record has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FatalHook {
    /// Exit the process with status 1
    #[default]
    Exit,
    /// Panic instead, so the unwind can be observed
    Panic,
}

/// A logger built once from a [`Config`] and immutable afterwards.
///
/// Cloning, [`named`](LogFacade::named) children and [`layer`](LogFacade::layer)
/// all share the same backend core.
#[derive(Debug, Clone)]
pub struct LogFacade {
    config: Config,
    core: Arc<Core>,
    name: String,
    stacktrace_level: Level,
    fatal_hook: FatalHook,
}

impl LogFacade {
    /// Build a facade that writes to standard error.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Sink::stderr())
    }

    /// Build a facade that writes to `sink`.
    pub fn with_sink(config: Config, sink: Sink) -> Self {
        let level = config.level();
        let encoder_config = EncoderConfig::for_layout(config.field_layout()).with_facade_keys();
        let encoder = config.encoding().build(encoder_config);
        let core = Core::new(encoder, sink, AtomicLevel::new(level));

        let facade = Self {
            name: config.name.clone(),
            config,
            core: Arc::new(core),
            stacktrace_level: Level::Error,
            fatal_hook: FatalHook::default(),
        };

        // Best effort: a sink that can't be flushed still takes writes.
        if let Err(e) = facade.sync() {
            facade.warn(&[&e]);
        }
        facade
    }

    /// Replace the fatal hook. Call before sharing the facade.
    pub fn with_fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = hook;
        self
    }

    /// A child logger with `name` appended to this logger's name.
    pub fn named(&self, name: &str) -> Self {
        let mut child = self.clone();
        child.name = match (self.name.is_empty(), name.is_empty()) {
            (_, true) => self.name.clone(),
            (true, false) => name.to_string(),
            (false, false) => format!("{}.{}", self.name, name),
        };
        child
    }

    /// A `tracing` layer that writes through this facade's core.
    pub fn layer(&self) -> FacadeLayer {
        FacadeLayer::new(Arc::clone(&self.core), self.stacktrace_level)
    }

    /// The configuration this facade was built from.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The minimum level written.
    pub fn level(&self) -> Level {
        self.core.level()
    }

    /// The logger name written to NAME.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flush the sink.
    pub fn sync(&self) -> std::io::Result<()> {
        self.core.sync()
    }

    fn write(
        &self,
        level: Level,
        message: String,
        caller: &'static Location<'static>,
        fields: &[Field],
    ) {
        if !self.core.enabled(level) {
            return;
        }
        let mut entry = Entry::new(level, self.name.as_str(), message)
            .with_caller(format!("{}:{}", caller.file(), caller.line()));
        if level >= self.stacktrace_level {
            entry = entry.with_stack(Backtrace::force_capture().to_string());
        }
        self.core.write(&entry, fields);
    }
}

impl Logger for LogFacade {
    fn log(&self, level: Level, payload: Payload<'_>, caller: &'static Location<'static>) {
        if !self.core.enabled(level) {
            return;
        }

        let sweetened = sweeten(payload.pairs());
        if let Some(field) = sweetened.ignored_field() {
            self.write(
                Level::DPanic,
                DANGLING_KEY_MESSAGE.to_string(),
                caller,
                &[field],
            );
        }
        if let Some(field) = sweetened.invalid_field() {
            self.write(
                Level::Error,
                NON_STRING_KEYS_MESSAGE.to_string(),
                caller,
                &[field],
            );
        }
        self.write(level, payload.message(), caller, &sweetened.fields);
    }

    fn terminate(&self) -> ! {
        if let Err(e) = self.core.sync() {
            eprintln!("logam: failed to sync before exit: {e}");
        }
        match self.fatal_hook {
            FatalHook::Exit => std::process::exit(1),
            FatalHook::Panic => panic!("fatal record logged"),
        }
    }
}
