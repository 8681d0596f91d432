//! Tracing helpers for command dispatch

/// Trace a phase of command execution when `--verbose` is set
///
/// ```ignore
/// trace_command!(ctx.cli, ctx.start, "load_catalog");
/// ```
macro_rules! trace_command {
    ($cli:expr, $start:expr, $label:expr) => {
        if $cli.verbose {
            ::tracing::debug!(elapsed = ?$start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
