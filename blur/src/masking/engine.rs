//! The category handler: gate, then pattern or offset masking.

use std::sync::OnceLock;

use super::{
    algorithm::{mask_by_offset, mask_by_pattern},
    condition,
    directive::Directive,
    pattern::PatternCache,
    sensitive::SensitiveValue,
};
use crate::error::{BlurError, MaskError};

/// Applies directives to leaf values.
///
/// This is the only contract between traversal and the masking core: code
/// generated by `#[derive(Blur)]` hands every annotated leaf to a `Masker`
/// together with its resolved directive.
pub trait Masker {
    /// Returns `value` masked according to `directive`, or `value` itself when
    /// the directive's condition says no masking is required.
    fn mask<T: SensitiveValue>(&self, value: T, directive: &Directive) -> Result<T, BlurError>;
}

/// The masking engine.
///
/// Stateless apart from its [`PatternCache`], so one instance can serve any
/// number of threads. Clones share the cache.
#[derive(Clone, Debug, Default)]
pub struct Blurrer {
    patterns: PatternCache,
}

impl Blurrer {
    /// Creates an engine with its own empty pattern cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine backed by an existing cache.
    #[must_use]
    pub fn with_cache(patterns: PatternCache) -> Self {
        Self { patterns }
    }

    /// The process-wide engine used by [`crate::blur`] and [`crate::Blur::blur`].
    pub fn shared() -> &'static Blurrer {
        static SHARED: OnceLock<Blurrer> = OnceLock::new();
        SHARED.get_or_init(Blurrer::new)
    }

    /// The cache this engine compiles patterns into.
    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    /// Masks `value` per `directive`.
    ///
    /// Returns `Ok(None)` when the directive's condition rejects the value, so
    /// callers can hand back the original without copying it.
    pub fn mask_str(&self, value: &str, directive: &Directive) -> Result<Option<String>, BlurError> {
        if !condition::required(value, directive.condition()) {
            return Ok(None);
        }
        self.apply(value, directive)
            .map(Some)
            .map_err(|kind| BlurError::new(directive.category(), kind))
    }

    /// Masks a string-like value, preserving its concrete type.
    pub fn handle<T>(&self, value: T, directive: &Directive) -> Result<T, BlurError>
    where
        T: SensitiveValue,
    {
        match self.mask_str(value.as_str(), directive)? {
            Some(masked) => Ok(T::from_masked(masked)),
            None => Ok(value),
        }
    }

    /// Like [`Blurrer::handle`], passing `None` through without consulting the condition.
    pub fn handle_option<T>(&self, value: Option<T>, directive: &Directive) -> Result<Option<T>, BlurError>
    where
        T: SensitiveValue,
    {
        value.map(|value| self.handle(value, directive)).transpose()
    }

    fn apply(&self, value: &str, directive: &Directive) -> Result<String, MaskError> {
        if directive.uses_pattern() {
            let pattern = self.patterns.compile(directive.regex())?;
            mask_by_pattern(value, &pattern, directive.placeholder())
        } else {
            mask_by_offset(
                value,
                directive.start_offset(),
                directive.end_offset(),
                directive.placeholder(),
            )
        }
    }
}

impl Masker for Blurrer {
    fn mask<T: SensitiveValue>(&self, value: T, directive: &Directive) -> Result<T, BlurError> {
        self.handle(value, directive)
    }
}
