//! The masking rule engine and its traversal seam.
//!
//! - **`condition`**: the gate deciding whether a value is masked at all
//! - **`pattern`**: the compiled-pattern cache
//! - **`algorithm`**: offset-based and pattern-based masking
//! - **`directive`**: resolved per-value configuration
//! - **`engine`**: the handler wiring gate and algorithms (`Blurrer`, `Masker`)
//! - **`sensitive`**: leaves, wrappers and cascading (`SensitiveValue`, `Maskable`, `Blurrable`)
//!
//! Category markers live in `crate::category`.

mod algorithm;
mod condition;
mod directive;
mod engine;
mod pattern;
mod sensitive;

pub use algorithm::{mask_by_offset, mask_by_pattern};
pub use condition::{
    required, AlwaysTrue, Condition, ConditionRegistry, NonBlank, NonEmpty, SharedCondition,
};
pub use directive::{Directive, DEFAULT_PLACEHOLDER};
pub use engine::{Blurrer, Masker};
pub use pattern::PatternCache;
pub use sensitive::{blur, Blur, Blurrable, Maskable, SensitiveValue};
