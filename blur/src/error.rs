//! Failure types for masking.
//!
//! Messages carry the directive's numeric parameters and the input length.
//! They never carry the input itself, so an error can be logged without
//! leaking the value it was raised for.

use thiserror::Error;

/// Why a single masking operation failed.
///
/// These are deterministic configuration or input errors. None of them is
/// transient, so retrying the same call yields the same error.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Offset masking was asked to keep more characters than the value has.
    #[error(
        "invalid range: start_offset {start_offset} + end_offset {end_offset} exceeds input length {length}"
    )]
    InvalidRange {
        /// Leading characters the directive keeps visible.
        start_offset: usize,
        /// Trailing characters the directive keeps visible.
        end_offset: usize,
        /// Length of the input in characters.
        length: usize,
    },
    /// The directive's regex could not be compiled.
    #[error("invalid pattern `{regex}`: {source}")]
    Pattern {
        /// The offending regex source.
        regex: String,
        /// Underlying regex engine failure.
        #[source]
        source: Box<fancy_regex::Error>,
    },
    /// The directive's regex compiled but the matcher gave up on the input,
    /// e.g. on the backtrack limit.
    #[error("pattern `{regex}` failed on input of length {length}: {source}")]
    PatternExecution {
        /// The regex that was running.
        regex: String,
        /// Length of the input in characters.
        length: usize,
        /// Underlying matcher failure.
        #[source]
        source: Box<fancy_regex::Error>,
    },
    /// A directive references something that cannot be resolved.
    #[error("configuration error: {message}")]
    Configuration {
        /// What could not be resolved.
        message: String,
    },
}

impl MaskError {
    pub(crate) fn pattern(regex: &str, source: fancy_regex::Error) -> Self {
        Self::Pattern {
            regex: regex.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn pattern_execution(
        regex: &str,
        length: usize,
        source: fancy_regex::Error,
    ) -> Self {
        Self::PatternExecution {
            regex: regex.to_string(),
            length,
            source: Box::new(source),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

/// A [`MaskError`] attributed to the category whose directive raised it.
///
/// This is what handlers and traversal return. The caller decides whether one
/// field's failure aborts the whole object or is skipped.
#[derive(Debug, Error)]
#[error("failed to blur {category}: {kind}")]
pub struct BlurError {
    category: &'static str,
    #[source]
    kind: MaskError,
}

impl BlurError {
    /// Attributes `kind` to `category`.
    #[must_use]
    pub fn new(category: &'static str, kind: MaskError) -> Self {
        Self { category, kind }
    }

    /// Name of the category whose directive failed.
    pub fn category(&self) -> &'static str {
        self.category
    }

    /// The underlying failure.
    pub fn kind(&self) -> &MaskError {
        &self.kind
    }

    /// Consumes the error, returning the underlying failure.
    pub fn into_kind(self) -> MaskError {
        self.kind
    }
}
