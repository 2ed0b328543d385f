//! Test builders — ergonomic constructors for form records and emails.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning
//! `Result`.

use fleetdesk_intake::RawEmail;
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// FormBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for form-data documents.
///
/// # Example
///
/// ```rust
/// let form = FormBuilder::new()
///     .field("first_name", "Jane")
///     .field("age", 34)
///     .build();
/// ```
#[derive(Default)]
pub struct FormBuilder {
    map: Map<String, Value>,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Map<String, Value> {
        self.map
    }
}

// ---------------------------------------------------------------------------
// Email helpers
// ---------------------------------------------------------------------------

/// Decoded email with the given parts; receive time is the builder's now.
pub fn email(from: &str, subject: &str, body: &str) -> RawEmail {
    RawEmail::new(from, subject, body)
}

/// The provider sender addresses the parsers dispatch on.
pub fn provider_from(source: &str) -> &'static str {
    match source {
        "zelle" => "Chase <no.reply.alerts@chase.com>",
        "cashapp" => "Cash App <cash@square.com>",
        "venmo" => "Venmo <venmo@venmo.com>",
        "chime" => "Chime <alerts@chime.com>",
        "stripe" => "Stripe <notifications@stripe.com>",
        other => panic!("unknown provider fixture: {other}"),
    }
}
