//! Adapters for emitting masked values through `slog`.
//!
//! This module connects [`crate::Blurrable`] with `slog` by providing a
//! `slog::Value` that serializes the masked form of a value as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation comes from masking, never from the
//!   original value.
//! - Keeping logging infallible: masking and serialization failures are logged
//!   as placeholder strings. A masking failure message never contains the input.
//!
//! It does not configure `slog` or decide which fields are sensitive.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::masking::{Blurrable, Blurrer, Masker};

/// A `slog::Value` that emits an owned masked payload as structured JSON.
pub struct BlurredJson {
    value: JsonValue,
}

impl BlurredJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// The JSON that will be logged.
    pub fn as_json(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for BlurredJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their masked form as JSON.
///
/// ## Example
/// ```ignore
/// use blur::slog::IntoBlurredJson;
///
/// info!(logger, "signup"; "user" => user.clone().into_blurred_json());
/// ```
pub trait IntoBlurredJson: Blurrable + Serialize {
    /// Masks `self` with the process-wide [`Blurrer`].
    fn into_blurred_json(self) -> BlurredJson {
        self.into_blurred_json_with(Blurrer::shared())
    }

    /// Masks `self` with `masker`.
    ///
    /// If masking fails the payload is the string
    /// `"Failed to blur value: <error>"`; if serialization fails it is
    /// `"Failed to serialize blurred value"`.
    fn into_blurred_json_with<M: Masker>(self, masker: &M) -> BlurredJson {
        let json_value = match self.blur_with(masker) {
            Ok(blurred) => serde_json::to_value(blurred).unwrap_or_else(|_| {
                JsonValue::String("Failed to serialize blurred value".to_string())
            }),
            Err(err) => JsonValue::String(format!("Failed to blur value: {err}")),
        };
        BlurredJson::new(json_value)
    }
}

impl<T> IntoBlurredJson for T where T: Blurrable + Serialize {}
