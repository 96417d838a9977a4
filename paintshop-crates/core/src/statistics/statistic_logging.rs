//! Writes statistics as `{PREFIX} {NAME}={VALUE}` lines, optionally followed by a closing line.
//! Nothing is written until [`configure_statistic_logging`] has been called.

use std::fmt::Display;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;
use log::debug;

/// Where and how statistics are written.
pub struct StatisticOptions {
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl std::fmt::Debug for StatisticOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Configures the logging of the statistics: the `prefix` of every line, an optional closing
/// line, the casing applied to statistic names, and the writer (stdout when `None`).
///
/// Only the first call has an effect.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::new(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Logs the statistic `name` with `value`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options_lock.write() else {
        return;
    };

    let name = match options.statistics_casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = options.statistic_prefix;

    if let Err(e) = writeln!(options.statistics_writer, "{prefix} {name}={value}") {
        debug!("Could not write statistic: {e}");
    }
}

/// Writes the closing line after a block of statistics, if one was configured.
pub fn log_statistic_postfix() {
    let Some(options_lock) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options_lock.write() else {
        return;
    };

    if let Some(postfix) = options.after_statistics {
        if let Err(e) = writeln!(options.statistics_writer, "{postfix}") {
            debug!("Could not write statistic: {e}");
        }
    }
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
