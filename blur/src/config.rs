//! Directives described as data.
//!
//! A [`DirectiveConfig`] names a built-in category and optionally overrides its
//! defaults. Conditions are referenced by name and resolved against a
//! [`ConditionRegistry`].
//!
//! ```rust
//! use blur::{Blurrer, ConditionRegistry, DirectiveConfig};
//!
//! let config: DirectiveConfig = serde_json::from_str(
//!     r##"{ "category": "phone_number", "placeholder": "#", "condition": "non_empty" }"##,
//! )
//! .unwrap();
//! let directive = config.resolve(&ConditionRegistry::new()).unwrap();
//! let masked = Blurrer::new().handle("19962000001".to_string(), &directive).unwrap();
//! assert_eq!(masked, "199####0001");
//! ```

use serde::Deserialize;

use crate::{
    category::builtin_directive,
    error::{BlurError, MaskError},
    masking::{ConditionRegistry, Directive},
};

/// Category used to attribute errors raised before a category is known.
const UNRESOLVED_CATEGORY: &str = "unresolved";

/// Serializable description of one directive.
///
/// Offsets are unsigned, so negative values are rejected while deserializing.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DirectiveConfig {
    /// Built-in category name, e.g. `Email` or `id_card_number`.
    pub category: String,
    /// Overrides the category's start offset.
    #[serde(default)]
    pub start_offset: Option<usize>,
    /// Overrides the category's end offset.
    #[serde(default)]
    pub end_offset: Option<usize>,
    /// Overrides the category's regex. An empty string selects offset masking.
    #[serde(default)]
    pub regex: Option<String>,
    /// Overrides the placeholder.
    #[serde(default)]
    pub placeholder: Option<char>,
    /// Name of a condition registered in the [`ConditionRegistry`].
    #[serde(default)]
    pub condition: Option<String>,
}

impl DirectiveConfig {
    /// Builds the directive: category defaults first, then the overrides.
    ///
    /// Unknown categories and conditions fail with [`MaskError::Configuration`].
    /// The regex is not compiled here; that happens on first use.
    pub fn resolve(&self, conditions: &ConditionRegistry) -> Result<Directive, BlurError> {
        let mut directive = builtin_directive(&self.category).ok_or_else(|| {
            BlurError::new(
                UNRESOLVED_CATEGORY,
                MaskError::configuration(format!("unknown category `{}`", self.category)),
            )
        })?;

        if let Some(start_offset) = self.start_offset {
            directive = directive.with_start_offset(start_offset);
        }
        if let Some(end_offset) = self.end_offset {
            directive = directive.with_end_offset(end_offset);
        }
        if let Some(regex) = &self.regex {
            directive = directive.with_regex(regex.clone());
        }
        if let Some(placeholder) = self.placeholder {
            directive = directive.with_placeholder(placeholder);
        }
        if let Some(name) = &self.condition {
            let condition = conditions
                .resolve(name)
                .map_err(|kind| BlurError::new(directive.category(), kind))?;
            directive = directive.with_shared_condition(condition);
        }
        Ok(directive)
    }
}
