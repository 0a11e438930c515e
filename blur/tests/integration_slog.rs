//! Integration tests for the slog adapter.
//!
//! These tests verify that:
//! - `into_blurred_json()` produces masked JSON values
//! - the `slog::Value` implementation works with slog's serialization API
//! - masking failures are logged without the original value

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use blur::{slog::IntoBlurredJson, Blur, Blurrer, Email, PhoneNumber, Strings};
use serde::Serialize;
use serde_json::Value as JsonValue;

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Other,
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }

    fn insert(&self, key: slog::Key, value: CapturedValue) -> slog::Result {
        self.captured.borrow_mut().insert(key.into(), value);
        Ok(())
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.to_string()))
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.insert(key, CapturedValue::Str(val.into()))
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.insert(key, CapturedValue::Other)
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.insert(key, CapturedValue::Serde(json))
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer
}

#[derive(Clone, Blur, Serialize)]
struct User {
    username: String,
    #[blur(PhoneNumber)]
    phone: String,
    #[blur(Email)]
    emails: Vec<String>,
}

fn user(phone: &str) -> User {
    User {
        username: "alice".into(),
        phone: phone.into(),
        emails: vec!["alice@example.com".into()],
    }
}

#[test]
fn test_blurred_json_through_slog() {
    let blurred = user("19962000001").into_blurred_json();
    let serializer = serialize_to_capture(&blurred, "user");

    let Some(CapturedValue::Serde(json)) = serializer.get("user") else {
        panic!("expected a serde value for 'user'");
    };
    assert_eq!(json["username"], "alice");
    assert_eq!(json["phone"], "199****0001");
    assert_eq!(json["emails"][0], "a****@example.com");
}

#[test]
fn test_as_json_matches_logged_value() {
    let blurred = user("19962000001").into_blurred_json_with(&Blurrer::new());
    assert_eq!(blurred.as_json()["phone"], "199****0001");
}

#[test]
fn test_masking_failure_is_logged_without_the_value() {
    let blurred = user("555").into_blurred_json();
    let json = blurred.as_json();
    let message = json.as_str().unwrap();
    assert!(message.starts_with("Failed to blur value: failed to blur PhoneNumber"));
    assert!(!message.contains("555"));
    assert!(!message.contains("alice"));
}

#[test]
fn test_collections_serialize_as_arrays() {
    #[derive(Clone, Blur, Serialize)]
    struct Tags {
        #[blur(Strings)]
        values: Vec<String>,
    }

    let blurred = vec![
        Tags {
            values: vec!["ab".into()],
        },
        Tags {
            values: vec!["cde".into()],
        },
    ]
    .into_blurred_json();

    assert_eq!(
        blurred.as_json(),
        &serde_json::json!([{ "values": ["**"] }, { "values": ["***"] }])
    );
}
