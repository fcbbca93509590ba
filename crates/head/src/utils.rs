//! Utility macros and functions for the parser crate.

/// A macro for early returns with an error if a condition is not met.
///
/// This is similar to the `assert!` macro, but returns an error instead of panicking.
///
/// ```ignore
/// ensure!(method.len() < max_method_len, ParseError::MethodTooLong);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|window| window == needle)
}

/// Rewrites `\n` line endings to `\r\n`, for request fixtures written with `indoc!`.
#[cfg(test)]
pub(crate) fn crlf(str: &str) -> String {
    str.replace('\n', "\r\n")
}
