//! Record display assembly — turns a raw form-data document into the
//! key/value grid the dashboard shows.
//!
//! Layout and styling belong to the renderer; this module only decides
//! labels, row order (submission order), and each row's
//! [`NormalizedValue`]. [`render_plain`] is the headless fallback used by
//! the CLI and tests.

use crate::config::DisplayConfig;
use crate::normalizer::normalize;
use crate::types::{FieldRow, NormalizedValue};
use serde_json::{Map, Value};

/// Display label for a raw field key: underscores become spaces. Casing is
/// left to the renderer.
pub fn display_label(key: &str) -> String {
    key.replace('_', " ")
}

/// Build one display row per form field, in submission order.
pub fn render_record(form: &Map<String, Value>) -> Vec<FieldRow> {
    form.iter()
        .map(|(key, value)| FieldRow {
            label: display_label(key),
            value: normalize(key, value),
        })
        .collect()
}

/// Plain-text layout of a rendered record, one line per row. `Empty`
/// renders as the configured placeholder; links render as indented
/// `label: url` continuation lines.
pub fn render_plain(rows: &[FieldRow], cfg: &DisplayConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        match &row.value {
            NormalizedValue::Empty => {
                lines.push(format!("{}: {}", row.label, cfg.empty_placeholder));
            }
            NormalizedValue::Text(text) => {
                lines.push(format!("{}: {}", row.label, text));
            }
            NormalizedValue::LinkList(links) => {
                lines.push(format!("{}:", row.label));
                for link in links {
                    lines.push(format!("  {}: {}", link.label, link.url));
                }
            }
        }
    }
    lines
}
