//! Venmo payment notifications.
//!
//! The subject carries sender and amount; the note lives in an HTML cell
//! tagged `transaction-note`, with a line-anchored `Note:` text fallback.
//! Outbound receipts ("You paid …") are ignored.

use crate::email::RawEmail;
use crate::{parse_amount, ParsedPayment, SourceParser};
use fleetdesk_core::PaymentSource;
use regex::Regex;
use std::sync::OnceLock;

pub struct Venmo;

fn subject_paid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(.+?)\s+paid you \$?([\d,]+\.?\d*)")
            .expect("valid venmo subject regex")
    })
}

fn tx_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Transaction ID[:\s<]+(\d+)")
            .expect("valid venmo transaction regex")
    })
}

fn note_html_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"class="[^"]*transaction-note[^"]*"[^>]*>\s*([^<]+)"#)
            .expect("valid venmo note regex")
    })
}

fn note_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        // Anchored so "transaction-note" class attributes don't match.
        Regex::new(r"(?i)(?:^|[\n>])Note:\s*([^<\n]+)")
            .expect("valid venmo note fallback regex")
    })
}

impl SourceParser for Venmo {
    fn source(&self) -> PaymentSource {
        PaymentSource::Venmo
    }

    fn matches(&self, from: &str, _subject: &str) -> bool {
        from.to_lowercase().contains("venmo.com")
    }

    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment> {
        if mail.subject.to_lowercase().starts_with("you paid") {
            return None;
        }

        let caps = subject_paid_re().captures(&mail.subject)?;
        let sender_name = caps[1].trim().to_string();
        let amount = parse_amount(&caps[2]);

        let transaction_id = tx_re().captures(&mail.body).map(|c| c[1].to_string());

        let memo = note_html_re()
            .captures(&mail.body)
            .or_else(|| note_text_re().captures(&mail.body))
            .map(|c| c[1].trim().to_string());

        if amount == 0.0 || sender_name.is_empty() {
            tracing::debug!(source = "venmo", "payment fields incomplete, skipping");
            return None;
        }

        Some(ParsedPayment {
            source: PaymentSource::Venmo,
            amount,
            sender_name,
            sender_identifier: None,
            transaction_id,
            memo,
            received_at: mail.date,
        })
    }
}
