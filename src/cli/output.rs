// `ValueEnum` for `OutputFormat` is implemented in moodfit-core alongside the
// type (orphan rule).
pub use moodfit_core::format::OutputFormat;
