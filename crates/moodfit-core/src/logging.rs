//! Structured logging to stderr
//!
//! Only moodfit's own crates log by default; dependencies stay silent unless
//! `MOODFIT_LOG` or a full `--log-level` directive asks for them.

use std::io;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable whose directives replace the flag-derived filter
pub const LOG_ENV_VAR: &str = "MOODFIT_LOG";

const MOODFIT_TARGETS: [&str; 2] = ["moodfit", "moodfit_core"];

/// Emit a trace event carrying the milliseconds elapsed since `$start`.
///
/// ```rust,ignore
/// let start = Instant::now();
/// let outfits = read_log()?;
/// trace_time!(start, "favorites_read", count = outfits.len());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $event:literal $(, $field:ident = $value:expr)* $(,)?) => {{
        let elapsed_ms = $start.elapsed().as_secs_f64() * 1000.0;
        tracing::trace!(elapsed_ms, $($field = $value,)* $event);
    }};
}

/// Filter directives for the command-line flags.
///
/// `--log-level` wins over `--verbose`. A bare level applies to moodfit's
/// crates only; anything containing `=` is used as written.
pub fn directives(verbose: bool, log_level: Option<&str>) -> String {
    match log_level {
        Some(spec) if spec.contains('=') => spec.to_string(),
        Some(level) => for_moodfit(level),
        None if verbose => for_moodfit("debug"),
        None => for_moodfit("warn"),
    }
}

fn for_moodfit(level: &str) -> String {
    MOODFIT_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber: compact text, or JSON lines with span
/// open/close events when `log_json` is set
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(directives(verbose, log_level))?,
    };

    let output = if log_json {
        fmt::layer()
            .json()
            .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
            .with_writer(io::stderr)
            .with_ansi(false)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_target(false)
            .with_writer(io::stderr)
            .with_ansi(false)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()?;
    Ok(())
}
