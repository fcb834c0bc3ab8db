//! Utility macros used internally by the crate.

/// Returns early with an error if a condition is not met.
///
/// Works like `assert!`, but returns `Err($error)` instead of panicking.
///
/// ```ignore
/// ensure!(headers.len() < max_header_num, Failure::invalid_request("Too many header lines."));
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error.into());
        }
    };
}

pub(crate) use ensure;
