//! The gate that decides whether a present value gets masked at all.
//!
//! Conditions are stateless predicates over the original value. Any
//! `Fn(&str) -> bool` is a condition, so a plain function works as well as a
//! named type.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::MaskError;

/// Predicate deciding whether a value needs masking.
///
/// Returning `false` lets the value pass through unchanged.
///
/// ```rust
/// use blur::Condition;
///
/// struct DigitsOnly;
///
/// impl Condition for DigitsOnly {
///     fn required(&self, value: &str) -> bool {
///         value.chars().all(|c| c.is_ascii_digit())
///     }
/// }
///
/// assert!(DigitsOnly.required("123"));
/// assert!(!DigitsOnly.required("12a"));
/// ```
pub trait Condition: Send + Sync {
    /// Returns `true` when `value` must be masked.
    fn required(&self, value: &str) -> bool;
}

impl<F> Condition for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn required(&self, value: &str) -> bool {
        self(value)
    }
}

/// Masks every value. This is the default condition of every directive.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysTrue;

impl Condition for AlwaysTrue {
    fn required(&self, _value: &str) -> bool {
        true
    }
}

/// Masks only non-empty values.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonEmpty;

impl Condition for NonEmpty {
    fn required(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Masks only values containing at least one non-whitespace character.
#[derive(Clone, Copy, Debug, Default)]
pub struct NonBlank;

impl Condition for NonBlank {
    fn required(&self, value: &str) -> bool {
        value.chars().any(|c| !c.is_whitespace())
    }
}

/// Shared handle to a condition, as stored in a directive.
pub type SharedCondition = Arc<dyn Condition>;

/// Evaluates `condition` against `value` and returns its verdict unmodified.
pub fn required(value: &str, condition: &dyn Condition) -> bool {
    condition.required(value)
}

/// Named conditions for directives described as data rather than code.
///
/// Pre-populated with `always`, `non_empty` and `non_blank`.
#[derive(Clone)]
pub struct ConditionRegistry {
    conditions: HashMap<String, SharedCondition>,
}

impl ConditionRegistry {
    /// Registry holding only the built-in conditions.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            conditions: HashMap::new(),
        };
        registry.register("always", AlwaysTrue);
        registry.register("non_empty", NonEmpty);
        registry.register("non_blank", NonBlank);
        registry
    }

    /// Registers `condition` under `name`, replacing any previous entry.
    pub fn register<C>(&mut self, name: impl Into<String>, condition: C) -> &mut Self
    where
        C: Condition + 'static,
    {
        self.conditions.insert(name.into(), Arc::new(condition));
        self
    }

    /// Looks up a condition by name.
    pub fn resolve(&self, name: &str) -> Result<SharedCondition, MaskError> {
        self.conditions
            .get(name)
            .cloned()
            .ok_or_else(|| MaskError::configuration(format!("unknown condition `{name}`")))
    }
}

impl Default for ConditionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConditionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.conditions.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("ConditionRegistry")
            .field("conditions", &names)
            .finish()
    }
}
