//! The logging capability consumed by application code.
//!
//! [`Logger`] has a single required operation, [`Logger::log`], taking a
//! severity, a [`Payload`] and the caller's location. The seventeen public
//! calls are default methods that only pick the severity and payload shape.
//! Every default method is `#[track_caller]`, so the location handed to
//! `log` is the application's call site, never this module.

use serde_json::Value;
use std::fmt;
use std::panic::Location;

use crate::level::Level;

/// The arguments of one logging call.
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    /// Heterogeneous values, joined with single spaces
    Print(&'a [&'a dyn fmt::Display]),
    /// Pre-bound format string, from `format_args!`
    Format(fmt::Arguments<'a>),
    /// A message plus an alternating key/value sequence
    Keyed(&'a str, &'a [Value]),
}

impl Payload<'_> {
    /// Render the record message.
    pub fn message(&self) -> String {
        match self {
            Payload::Print(args) => {
                let mut out = String::new();
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&arg.to_string());
                }
                out
            }
            Payload::Format(args) => args.to_string(),
            Payload::Keyed(message, _) => (*message).to_string(),
        }
    }

    /// The raw key/value sequence; empty unless keyed.
    pub fn pairs(&self) -> &[Value] {
        match self {
            Payload::Keyed(_, kvs) => *kvs,
            Payload::Print(_) | Payload::Format(_) => &[],
        }
    }
}

impl fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Print(_) => f.debug_tuple("Print").field(&self.message()).finish(),
            Payload::Format(args) => f.debug_tuple("Format").field(args).finish(),
            Payload::Keyed(message, kvs) => {
                f.debug_tuple("Keyed").field(message).field(kvs).finish()
            }
        }
    }
}

/// Leveled, formatted and keyed logging calls.
///
/// Implementors provide [`log`](Logger::log) and
/// [`terminate`](Logger::terminate); everything else is derived.
pub trait Logger: Send + Sync {
    /// Emit one record if `level` passes the threshold.
    fn log(&self, level: Level, payload: Payload<'_>, caller: &'static Location<'static>);

    /// Stop the process after a fatal record. Never returns.
    fn terminate(&self) -> !;

    #[track_caller]
    fn debug(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Debug, Payload::Print(args), Location::caller());
    }

    #[track_caller]
    fn info(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Info, Payload::Print(args), Location::caller());
    }

    #[track_caller]
    fn warn(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Warn, Payload::Print(args), Location::caller());
    }

    #[track_caller]
    fn error(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Error, Payload::Print(args), Location::caller());
    }

    /// Log at fatal severity, then [`terminate`](Logger::terminate).
    #[track_caller]
    fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.log(Level::Fatal, Payload::Print(args), Location::caller());
        self.terminate()
    }

    #[track_caller]
    fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, Payload::Format(args), Location::caller());
    }

    #[track_caller]
    fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, Payload::Format(args), Location::caller());
    }

    #[track_caller]
    fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, Payload::Format(args), Location::caller());
    }

    #[track_caller]
    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, Payload::Format(args), Location::caller());
    }

    /// Formatted fatal record, then [`terminate`](Logger::terminate).
    #[track_caller]
    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.log(Level::Fatal, Payload::Format(args), Location::caller());
        self.terminate()
    }

    #[track_caller]
    fn debugw(&self, message: &str, kvs: &[Value]) {
        self.log(Level::Debug, Payload::Keyed(message, kvs), Location::caller());
    }

    #[track_caller]
    fn infow(&self, message: &str, kvs: &[Value]) {
        self.log(Level::Info, Payload::Keyed(message, kvs), Location::caller());
    }

    #[track_caller]
    fn warnw(&self, message: &str, kvs: &[Value]) {
        self.log(Level::Warn, Payload::Keyed(message, kvs), Location::caller());
    }

    #[track_caller]
    fn errorw(&self, message: &str, kvs: &[Value]) {
        self.log(Level::Error, Payload::Keyed(message, kvs), Location::caller());
    }

    /// Info-level alias for code written against unleveled loggers.
    #[track_caller]
    fn print(&self, args: &[&dyn fmt::Display]) {
        self.log(Level::Info, Payload::Print(args), Location::caller());
    }

    /// Info-level alias for code written against unleveled loggers.
    #[track_caller]
    fn printf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, Payload::Format(args), Location::caller());
    }

    /// There is no trace severity; trace records are logged at info.
    #[track_caller]
    fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, Payload::Format(args), Location::caller());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Remembers every call instead of writing anything.
    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(Level, String, usize, u32)>>,
    }

    impl Logger for Recorder {
        fn log(&self, level: Level, payload: Payload<'_>, caller: &'static Location<'static>) {
            self.calls.lock().unwrap().push((
                level,
                payload.message(),
                payload.pairs().len(),
                caller.line(),
            ));
        }

        fn terminate(&self) -> ! {
            panic!("terminated");
        }
    }

    impl Recorder {
        fn take(&self) -> Vec<(Level, String, usize, u32)> {
            std::mem::take(&mut *self.calls.lock().unwrap())
        }
    }

    #[test]
    fn test_print_payload_joins_with_spaces() {
        let args: [&dyn fmt::Display; 3] = [&"disk", &93, &'%'];
        let payload = Payload::Print(&args);
        assert_eq!(payload.message(), "disk 93 %");
        assert!(payload.pairs().is_empty());
    }

    #[test]
    fn test_format_payload() {
        assert_eq!(
            Payload::Format(format_args!("{} of {}", 3, 4)).message(),
            "3 of 4"
        );
    }

    #[test]
    fn test_leveled_methods_pick_their_severity() {
        let log = Recorder::default();
        log.debug(&[&"a"]);
        log.info(&[&"b"]);
        log.warn(&[&"c"]);
        log.error(&[&"d"]);
        let levels: Vec<Level> = log.take().into_iter().map(|c| c.0).collect();
        assert_eq!(
            levels,
            vec![Level::Debug, Level::Info, Level::Warn, Level::Error]
        );
    }

    #[test]
    fn test_formatted_and_keyed_methods() {
        let log = Recorder::default();
        log.debugf(format_args!("{}", 1));
        log.infof(format_args!("{}", 2));
        log.warnf(format_args!("{}", 3));
        log.errorf(format_args!("{}", 4));
        log.debugw("k", &["a".into(), 1.into()]);
        log.infow("k", &[]);
        log.warnw("k", &["a".into()]);
        log.errorw("k", &["a".into(), 1.into(), "b".into(), 2.into()]);

        let calls = log.take();
        let summary: Vec<(Level, &str, usize)> = calls
            .iter()
            .map(|(level, msg, pairs, _)| (*level, msg.as_str(), *pairs))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Level::Debug, "1", 0),
                (Level::Info, "2", 0),
                (Level::Warn, "3", 0),
                (Level::Error, "4", 0),
                (Level::Debug, "k", 2),
                (Level::Info, "k", 0),
                (Level::Warn, "k", 1),
                (Level::Error, "k", 4),
            ]
        );
    }

    #[test]
    fn test_aliases_log_at_info() {
        let log = Recorder::default();
        log.print(&[&"p"]);
        log.printf(format_args!("pf"));
        log.tracef(format_args!("tf"));
        assert!(log.take().iter().all(|call| call.0 == Level::Info));
    }

    #[test]
    fn test_caller_is_the_call_site() {
        let log = Recorder::default();
        let line = line!() + 1;
        log.info(&[&"here"]);
        assert_eq!(log.take()[0].3, line);
    }

    #[test]
    #[should_panic(expected = "terminated")]
    fn test_fatal_terminates() {
        let log = Recorder::default();
        log.fatal(&[&"bye"]);
    }

    #[test]
    #[should_panic(expected = "terminated")]
    fn test_fatalf_terminates() {
        let log = Recorder::default();
        log.fatalf(format_args!("bye {}", 1));
    }
}
