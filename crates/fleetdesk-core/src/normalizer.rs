//! Field normalizer — maps one raw form field onto a presentation value.
//!
//! Intake forms are third-party and schema-less: a field value may be a
//! scalar, an array, or a nested object such as a name or address block,
//! under inconsistent key casing. Classification is attempted in order:
//! blank → name object → address object → generic object → URL-bearing
//! string → plain scalar. Every JSON value maps to exactly one
//! [`NormalizedValue`]; unrecognized shapes degrade to a structural dump
//! rather than an error.

use crate::types::{Link, NormalizedValue};
use serde_json::{Map, Value};

/// Keys whose presence marks an object as name-shaped.
static NAME_SHAPE_KEYS: phf::Set<&'static str> = phf::phf_set! {
    "first_name", "First_Name", "first", "last_name", "Last_Name", "last",
};

/// Keys whose presence marks an object as address-shaped.
static ADDRESS_SHAPE_KEYS: phf::Set<&'static str> = phf::phf_set! {
    "address_line_1", "city", "state", "zip",
};

/// Alias chain for the first-name component, most specific form first.
pub(crate) const FIRST_NAME_ALIASES: [&str; 3] = ["first_name", "First_Name", "first"];

/// Alias chain for the last-name component, most specific form first.
pub(crate) const LAST_NAME_ALIASES: [&str; 3] = ["last_name", "Last_Name", "last"];

/// Fixed display order for address parts.
const ADDRESS_PART_ORDER: [&str; 5] =
    ["address_line_1", "address_line_2", "city", "state", "zip"];

/// Caption keys consulted for a generic object, in priority order.
const CAPTION_KEYS: [&str; 4] = ["label", "name", "id", "title"];

/// Largest scalar count the generic comma-join will render; bigger objects
/// fall back to the structural dump.
const SCALAR_JOIN_MAX: usize = 4;

/// Classify one raw form field into its presentation value.
///
/// Total and deterministic: never panics, never inspects objects more than
/// one level deep (beyond the name/address component lookups), and returns
/// structurally equal output for equal input. The `key` is not part of the
/// classification — labels are the caller's concern — but feeds the
/// diagnostics on the fallback path.
pub fn normalize(key: &str, value: &Value) -> NormalizedValue {
    match value {
        Value::Null => NormalizedValue::Empty,
        Value::String(s) if s.is_empty() => NormalizedValue::Empty,
        Value::Object(obj) => normalize_object(key, value, obj),
        other => {
            let form = scalar_form(other);
            if form.is_empty() {
                return NormalizedValue::Empty;
            }
            normalize_scalar(&form)
        }
    }
}

/// Object cascade: name shape, then address shape, then the generic rules.
fn normalize_object(key: &str, value: &Value, obj: &Map<String, Value>) -> NormalizedValue {
    if obj.keys().any(|k| NAME_SHAPE_KEYS.contains(k.as_str())) {
        if let Some(full) = name_from_object(obj) {
            return NormalizedValue::Text(full);
        }
        // Name keys present but no usable components: treat as generic,
        // never as an address.
    } else if obj.keys().any(|k| ADDRESS_SHAPE_KEYS.contains(k.as_str())) {
        let parts: Vec<String> = ADDRESS_PART_ORDER
            .iter()
            .filter_map(|k| obj.get(*k))
            .filter_map(scalar_component)
            .collect();
        if parts.is_empty() {
            return NormalizedValue::Empty;
        }
        return NormalizedValue::Text(parts.join(", "));
    }
    generic_object(key, value, obj)
}

/// Join the first/last components of a name-shaped object, or `None` when
/// both are blank.
pub(crate) fn name_from_object(obj: &Map<String, Value>) -> Option<String> {
    let first = pick_component(obj, &FIRST_NAME_ALIASES);
    let last = pick_component(obj, &LAST_NAME_ALIASES);
    let full = format!("{first} {last}");
    let full = full.trim();
    if full.is_empty() {
        None
    } else {
        Some(full.to_string())
    }
}

/// First non-blank scalar among the alias chain, or empty.
pub(crate) fn pick_component(obj: &Map<String, Value>, aliases: &[&str]) -> String {
    aliases
        .iter()
        .filter_map(|k| obj.get(*k))
        .filter_map(scalar_component)
        .next()
        .unwrap_or_default()
}

/// Generic object: caption key, then small-scalar join, then structural dump.
fn generic_object(key: &str, value: &Value, obj: &Map<String, Value>) -> NormalizedValue {
    for caption in CAPTION_KEYS {
        if let Some(Value::String(s)) = obj.get(caption) {
            return NormalizedValue::Text(s.clone());
        }
    }

    let scalars: Vec<String> = obj.values().filter_map(scalar_component).collect();
    if (1..=SCALAR_JOIN_MAX).contains(&scalars.len()) {
        return NormalizedValue::Text(scalars.join(", "));
    }

    tracing::debug!(key, "unrecognized object shape, using structural dump");
    NormalizedValue::Text(value.to_string())
}

/// URL-bearing strings become link lists; everything else is plain text.
fn normalize_scalar(form: &str) -> NormalizedValue {
    if form.contains("http") {
        let urls: Vec<&str> = form
            .split(['\n', ','])
            .map(str::trim)
            .filter(|piece| is_url(piece))
            .collect();
        if !urls.is_empty() {
            return NormalizedValue::LinkList(link_list(&urls));
        }
    }
    NormalizedValue::Text(form.to_string())
}

fn is_url(piece: &str) -> bool {
    piece.starts_with("http://") || piece.starts_with("https://")
}

fn link_list(urls: &[&str]) -> Vec<Link> {
    urls.iter()
        .enumerate()
        .map(|(idx, url)| Link {
            label: if urls.len() == 1 {
                "View Document".to_string()
            } else {
                format!("View Document {}", idx + 1)
            },
            url: (*url).to_string(),
        })
        .collect()
}

/// A non-blank string or number rendered as a display string.
fn scalar_component(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// String form of a non-object value: strings verbatim, arrays joined
/// element-wise, numbers and booleans via their display form.
fn scalar_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(element_form)
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}

/// String form of one array element; nested containers are dumped as
/// compact JSON.
fn element_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
