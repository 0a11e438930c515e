//! Masking of sensitive strings before they are logged, displayed or serialized.
//!
//! This crate separates:
//! - **Category**: what kind of sensitive data this is (name, phone number, email, ...).
//! - **Directive**: how that data is masked (offsets or regex, placeholder, condition).
//!
//! A directive either keeps a head and tail visible and masks the characters in
//! between, or masks every span matched by a regex. A condition decides whether
//! a value is masked at all. Masking never changes a value's length and never
//! mutates the input: every call consumes a value and returns a new one.
//!
//! ```rust
//! use blur::{Blur, Email, IdCardNumber, PhoneNumber};
//!
//! #[derive(Clone, Debug, blur::Blur)]
//! struct Customer {
//!     #[blur(PhoneNumber)]
//!     phone: String,
//!     #[blur(IdCardNumber)]
//!     id_card: Option<String>,
//!     #[blur(Email)]
//!     emails: Vec<String>,
//!     tier: u8,
//! }
//!
//! let customer = Customer {
//!     phone: "19962000001".into(),
//!     id_card: Some("321181199301096000".into()),
//!     emails: vec!["111111@qq.com".into()],
//!     tier: 3,
//! };
//! let masked = customer.clone().blur().unwrap();
//! assert_eq!(masked.phone, "199****0001");
//! assert_eq!(masked.id_card.as_deref(), Some("321181********6000"));
//! assert_eq!(masked.emails, ["1*****@qq.com"]);
//! assert_eq!(masked.tier, 3);
//! assert_eq!(customer.phone, "19962000001");
//! ```
//!
//! Field attributes:
//! - No annotation: the field passes through unchanged.
//! - `#[blur]`: cascade into a nested type that implements [`Blurrable`].
//! - `#[blur(Category)]`: mask string-like leaves with the category's default
//!   directive. Overrides follow the category:
//!   `#[blur(Name, start_offset = 1, placeholder = 'x', condition = blur::NonEmpty)]`.
//!
//! What this crate does not do:
//! - detect sensitive data on its own
//! - perform I/O or logging outside the optional `slog` adapter
//!
//! The `Blur` derive macro lives in `blur-derive` and is re-exported here.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

pub use blur_derive::Blur;

// Lets the derive refer to `::blur` from inside this crate's own tests.
#[allow(unused_extern_crates)]
extern crate self as blur;

// Module declarations
mod category;
#[cfg(feature = "serde")]
mod config;
mod error;
mod masking;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use category::{
    builtin_directive, BankCardNumber, Category, DefaultDirective, Email, IdCardNumber, Name,
    Password, PhoneNumber, Strings, EMAIL_REGEX,
};
#[cfg(feature = "serde")]
pub use config::DirectiveConfig;
pub use error::{BlurError, MaskError};
pub use masking::{
    blur, mask_by_offset, mask_by_pattern, required, AlwaysTrue, Blur, Blurrable, Blurrer,
    Condition, ConditionRegistry, Directive, Maskable, Masker, NonBlank, NonEmpty, PatternCache,
    SensitiveValue, SharedCondition, DEFAULT_PLACEHOLDER,
};
