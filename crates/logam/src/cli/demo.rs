//! The `logam demo` command: one record per logging call.

use logam_core::{LogFacade, Logger};

/// Execute the demo command.
///
/// Records below the configured level are filtered as usual, so running this
/// with different `--log-level` values shows the threshold at work.
pub fn execute(log: &LogFacade) -> anyhow::Result<()> {
    let log = log.named("demo");

    log.debug(&[&"leveled record at", &"debug"]);
    log.info(&[&"leveled record at", &"info"]);
    log.warn(&[&"leveled record at", &"warn"]);
    log.error(&[&"leveled record at", &"error"]);

    log.debugf(format_args!("formatted record at {}", "debug"));
    log.infof(format_args!("formatted record at {}", "info"));
    log.warnf(format_args!("formatted record at {}", "warn"));
    log.errorf(format_args!("formatted record at {}", "error"));

    log.debugw("keyed record", &["style".into(), "keyed".into(), "n".into(), 1.into()]);
    log.infow("keyed record", &["style".into(), "keyed".into(), "n".into(), 2.into()]);
    log.warnw("keyed record", &["style".into(), "keyed".into(), "n".into(), 3.into()]);
    log.errorw("keyed record", &["style".into(), "keyed".into(), "n".into(), 4.into()]);

    log.print(&[&"print alias, logged at info"]);
    log.printf(format_args!("printf alias, logged at {}", "info"));
    log.tracef(format_args!("tracef alias, logged at {}", "info"));

    tracing::info!(source = "tracing", "event bridged through the facade");

    log.sync()?;
    Ok(())
}
