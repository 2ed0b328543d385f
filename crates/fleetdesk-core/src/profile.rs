//! Applicant profile extraction — lifts typed driver fields out of a raw
//! form-data document.
//!
//! Runs at approval time: the form is third-party and schema-less, so every
//! lookup is defensive. Name fields arrive either flat (`first_name` /
//! `last_name`) or as a nested object under some `*name*` key, with the
//! same alias variants the normalizer recognizes.

use crate::normalizer::{
    name_from_object, pick_component, FIRST_NAME_ALIASES, LAST_NAME_ALIASES,
};
use crate::types::BillingType;
use serde_json::{Map, Value};

/// Typed applicant fields extracted from a form-data document, ready for
/// driver creation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicantProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub billing_type: BillingType,
    pub billing_rate: f64,
    /// Opening ledger credit, when the form carries one.
    pub initial_balance: Option<f64>,
}

/// Header display name for an application: `first_name` falling back to the
/// `names` field, plus `last_name`. Object-valued parts resolve their own
/// name components and degrade to a compact dump when unrecognized; a fully
/// blank result becomes `"Unknown Applicant"`.
pub fn display_name(form: &Map<String, Value>) -> String {
    let first = form
        .get("first_name")
        .filter(|v| is_present(v))
        .or_else(|| form.get("names"));
    let last = form.get("last_name");

    let full = format!("{} {}", name_part(first), name_part(last));
    let full = full.trim();
    if full.is_empty() {
        "Unknown Applicant".to_string()
    } else {
        full.to_string()
    }
}

/// Extract the driver fields used on approval.
pub fn extract_profile(form: &Map<String, Value>) -> ApplicantProfile {
    let mut first_name = string_field(form, "first_name");
    let mut last_name = string_field(form, "last_name");

    // Fluent-Forms style submissions nest the name under some "*name*" key.
    if first_name.is_empty() && last_name.is_empty() {
        if let Some(obj) = nested_names_object(form) {
            first_name = pick_component(obj, &FIRST_NAME_ALIASES);
            last_name = pick_component(obj, &LAST_NAME_ALIASES);
        }
    }

    let phone = {
        let direct = string_field(form, "phone");
        if direct.is_empty() {
            string_field(form, "phone_number")
        } else {
            direct
        }
    };

    ApplicantProfile {
        first_name,
        last_name,
        email: string_field(form, "email"),
        phone,
        billing_type: string_field(form, "billing_type")
            .parse()
            .unwrap_or(BillingType::Daily),
        billing_rate: numeric_field(form, "billing_rate").unwrap_or(0.0),
        initial_balance: numeric_field(form, "initial_balance"),
    }
}

/// Best-effort E.164: strip everything but digits, assume US when the
/// country code is missing.
pub fn normalize_phone(phone: &str) -> String {
    let mut digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        digits.insert(0, '1');
    }
    format!("+{digits}")
}

/// First object value under a key containing "name" (case-insensitive).
fn nested_names_object(form: &Map<String, Value>) -> Option<&Map<String, Value>> {
    form.iter().find_map(|(key, value)| {
        if key.to_lowercase().contains("name") {
            value.as_object()
        } else {
            None
        }
    })
}

fn is_present(value: &Value) -> bool {
    !matches!(value, Value::Null) && value.as_str() != Some("")
}

/// One display-name part: objects resolve their name components (compact
/// dump when unrecognized), scalars their string form.
fn name_part(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Object(obj)) => name_from_object(obj)
            .unwrap_or_else(|| Value::Object(obj.clone()).to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn string_field(form: &Map<String, Value>, key: &str) -> String {
    form.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Number-or-numeric-string coercion; forms deliver both.
fn numeric_field(form: &Map<String, Value>, key: &str) -> Option<f64> {
    match form.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
