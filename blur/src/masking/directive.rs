//! Resolved masking configuration for one value.

use std::{borrow::Cow, fmt, sync::Arc};

use super::condition::{AlwaysTrue, Condition, SharedCondition};

/// Default placeholder substituted for each masked character.
pub const DEFAULT_PLACEHOLDER: char = '*';

/// How a value of one category gets masked.
///
/// A non-empty `regex` takes precedence over the offsets. Directives are
/// immutable once built and can be shared freely across threads.
///
/// ```rust
/// use blur::{DefaultDirective, Directive, Name};
///
/// let directive = Name::directive().with_placeholder('x').with_start_offset(1);
/// assert_eq!(directive.category(), "Name");
/// assert_eq!(directive.placeholder(), 'x');
/// assert_eq!(directive.start_offset(), 1);
/// ```
#[derive(Clone)]
pub struct Directive {
    category: &'static str,
    start_offset: usize,
    end_offset: usize,
    regex: Cow<'static, str>,
    placeholder: char,
    condition: SharedCondition,
}

impl Directive {
    /// Masks the whole value of `category` with `*`, unconditionally.
    #[must_use]
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            start_offset: 0,
            end_offset: 0,
            regex: Cow::Borrowed(""),
            placeholder: DEFAULT_PLACEHOLDER,
            condition: Arc::new(AlwaysTrue),
        }
    }

    /// Keeps the first `start_offset` characters visible.
    #[must_use]
    pub fn with_start_offset(mut self, start_offset: usize) -> Self {
        self.start_offset = start_offset;
        self
    }

    /// Keeps the last `end_offset` characters visible.
    #[must_use]
    pub fn with_end_offset(mut self, end_offset: usize) -> Self {
        self.end_offset = end_offset;
        self
    }

    /// Masks every match of `regex` instead of using offsets.
    ///
    /// An empty regex switches back to offset masking.
    #[must_use]
    pub fn with_regex<R>(mut self, regex: R) -> Self
    where
        R: Into<Cow<'static, str>>,
    {
        self.regex = regex.into();
        self
    }

    /// Uses `placeholder` for masked characters.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: char) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Masks only values for which `condition` holds.
    #[must_use]
    pub fn with_condition<C>(self, condition: C) -> Self
    where
        C: Condition + 'static,
    {
        self.with_shared_condition(Arc::new(condition))
    }

    /// Like [`Directive::with_condition`], for an already shared condition.
    #[must_use]
    pub fn with_shared_condition(mut self, condition: SharedCondition) -> Self {
        self.condition = condition;
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    pub fn regex(&self) -> &str {
        &self.regex
    }

    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    pub fn condition(&self) -> &dyn Condition {
        self.condition.as_ref()
    }

    /// Returns `true` when the regex overrides the offsets.
    pub fn uses_pattern(&self) -> bool {
        !self.regex.is_empty()
    }
}

impl fmt::Debug for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Directive")
            .field("category", &self.category)
            .field("start_offset", &self.start_offset)
            .field("end_offset", &self.end_offset)
            .field("regex", &self.regex)
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}
