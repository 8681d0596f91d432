//! Error macros for moodfit

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr, $expected:expr) => {
        return Err($crate::error::MoodfitError::invalid_value(
            $context, $value, $expected,
        ))
    };
}

/// Macro for creating catalog validation errors
#[macro_export]
macro_rules! bail_catalog {
    ($source:expr, $reason:expr) => {
        return Err($crate::error::MoodfitError::invalid_catalog(
            $source, $reason,
        ))
    };
}
