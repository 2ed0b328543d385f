//! Domain-specific assertion helpers for fleetdesk harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages
//! that make it clear *which* normalization rule or parser produced the
//! unexpected value.

use fleetdesk_core::{NormalizedValue, PaymentSource};
use fleetdesk_intake::ParsedPayment;

/// Assert a value normalized to plain text.
pub fn assert_text(value: &NormalizedValue, expected: &str) {
    match value {
        NormalizedValue::Text(actual) => pretty_assertions::assert_eq!(actual, expected),
        other => panic!("expected Text({expected:?}), got {other:?}"),
    }
}

/// Assert a value normalized to `Empty`.
pub fn assert_empty(value: &NormalizedValue) {
    if !value.is_empty() {
        panic!("expected Empty, got {value:?}");
    }
}

/// Assert a value normalized to a link list with the given
/// `(label, url)` pairs, in order.
pub fn assert_links(value: &NormalizedValue, expected: &[(&str, &str)]) {
    let NormalizedValue::LinkList(links) = value else {
        panic!("expected LinkList of {} entries, got {value:?}", expected.len());
    };
    let actual: Vec<(&str, &str)> = links
        .iter()
        .map(|l| (l.label.as_str(), l.url.as_str()))
        .collect();
    pretty_assertions::assert_eq!(actual, expected);
}

/// Assert the identifying fields of a parsed payment.
pub fn assert_payment(
    payment: &ParsedPayment,
    source: PaymentSource,
    amount: f64,
    sender: &str,
) {
    assert!(
        payment.source == source && payment.amount == amount && payment.sender_name == sender,
        "payment mismatch:\n  expected: {source} ${amount:.2} from {sender}\n  \
         actual:   {} ${:.2} from {}",
        payment.source,
        payment.amount,
        payment.sender_name,
    );
}
