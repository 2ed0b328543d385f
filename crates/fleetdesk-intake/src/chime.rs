//! Chime payment notifications.
//!
//! Chime's template is the least structured of the providers: the sender
//! only reliably appears in the subject, the amount mid-sentence in the
//! body, and no transaction number is printed at all — the `Message-ID`
//! header stands in for one.

use crate::email::RawEmail;
use crate::{parse_amount, ParsedPayment, SourceParser};
use fleetdesk_core::PaymentSource;
use regex::Regex;
use std::sync::OnceLock;

pub struct Chime;

/// Longest memo the unstructured text fallback will accept.
const MEMO_TEXT_LIMIT: usize = 50;

fn subject_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(.+?)\s+just sent you money")
            .expect("valid chime subject regex")
    })
}

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)received\s+\$?([\d,]+\.?\d*)")
            .expect("valid chime amount regex")
    })
}

fn body_sender_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)from\s+([A-Za-z\s]+)").expect("valid chime sender regex")
    })
}

fn memo_strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)for\s+<strong[^>]*>([^<]+)</strong>")
            .expect("valid chime memo regex")
    })
}

fn memo_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)for\s+([^<.\n]+)").expect("valid chime memo fallback regex")
    })
}

impl SourceParser for Chime {
    fn source(&self) -> PaymentSource {
        PaymentSource::Chime
    }

    fn matches(&self, from: &str, _subject: &str) -> bool {
        from.to_lowercase().contains("chime.com")
    }

    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment> {
        let mut sender_name = subject_re()
            .captures(&mail.subject)
            .map(|c| c[1].trim().to_string())
            .unwrap_or_default();

        let amount = amount_re()
            .captures(&mail.body)
            .map(|c| parse_amount(&c[1]))
            .unwrap_or(0.0);

        if sender_name.is_empty() {
            if let Some(c) = body_sender_re().captures(&mail.body) {
                sender_name = c[1].replace("through", "").trim().to_string();
            }
        }

        let memo = memo_strong_re()
            .captures(&mail.body)
            .map(|c| c[1].trim().to_string())
            .or_else(|| {
                memo_text_re().captures(&mail.body).and_then(|c| {
                    let candidate = c[1].trim().to_string();
                    let lower = candidate.to_lowercase();
                    let usable = candidate.len() < MEMO_TEXT_LIMIT
                        && !lower.contains("transaction")
                        && !candidate.contains("-->")
                        && !lower.contains("most cases");
                    usable.then_some(candidate)
                })
            });

        if amount == 0.0 || sender_name.is_empty() {
            tracing::debug!(source = "chime", "payment fields incomplete, skipping");
            return None;
        }

        Some(ParsedPayment {
            source: PaymentSource::Chime,
            amount,
            sender_name,
            sender_identifier: None,
            transaction_id: mail.message_id.clone(),
            memo,
            received_at: mail.date,
        })
    }
}
