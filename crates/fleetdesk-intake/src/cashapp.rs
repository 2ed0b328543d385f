//! Cash App (Square) payment notifications.
//!
//! Cash App puts the interesting fields in the subject line; the body is
//! only consulted when the subject is the generic "Payment received" form.
//! Outbound receipts ("You sent …") and privacy notices arrive from the
//! same sender and are explicitly ignored.

use crate::email::RawEmail;
use crate::{parse_amount, ParsedPayment, SourceParser};
use fleetdesk_core::PaymentSource;
use regex::Regex;
use std::sync::OnceLock;

pub struct CashApp;

fn subject_sent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(.+?)\s+sent you \$?([\d,]+\.?\d*)")
            .expect("valid cashapp subject regex")
    })
}

fn subject_memo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)sent you \$[\d,]+\.?\d*\s+for\s+(.+)$")
            .expect("valid cashapp subject memo regex")
    })
}

fn subject_received_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)received \$?([\d,]+\.?\d*)\s+from\s+(.+)")
            .expect("valid cashapp received regex")
    })
}

fn body_sent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)You were sent \$([\d,]+\.?\d*) by ([^.\n<]+)")
            .expect("valid cashapp body regex")
    })
}

fn body_paid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([^.\n<]+) paid you \$([\d,]+\.?\d*)")
            .expect("valid cashapp body fallback regex")
    })
}

fn profile_memo_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)profile-description"[^>]*>\s*For\s+([^<]+)"#)
            .expect("valid cashapp memo regex")
    })
}

fn tx_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"#([A-Z0-9-]{4,})").expect("valid cashapp transaction regex")
    })
}

impl SourceParser for CashApp {
    fn source(&self) -> PaymentSource {
        PaymentSource::Cashapp
    }

    fn matches(&self, from: &str, _subject: &str) -> bool {
        let from = from.to_lowercase();
        from.contains("square.com") || from.contains("cash app")
    }

    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment> {
        let subject = mail.subject.as_str();
        let lower = subject.to_lowercase();
        if lower.starts_with("you sent") || lower.contains("privacy notice") {
            return None;
        }

        let mut sender_name = String::new();
        let mut amount = 0.0;
        let mut memo: Option<String> = None;

        if let Some(c) = subject_sent_re().captures(subject) {
            sender_name = c[1].trim().to_string();
            amount = parse_amount(&c[2]);
            memo = subject_memo_re()
                .captures(subject)
                .map(|c| c[1].trim().to_string());
        } else if let Some(c) = subject_received_re().captures(subject) {
            amount = parse_amount(&c[1]);
            let name_part = c[2].trim();
            match name_part.split_once(" for ") {
                Some((name, note)) => {
                    sender_name = name.trim().to_string();
                    memo = Some(note.trim().to_string());
                }
                None => sender_name = name_part.to_string(),
            }
        }

        // Generic "Payment received" subjects carry nothing; scan the body.
        if amount == 0.0 || sender_name.is_empty() {
            if let Some(c) = body_sent_re().captures(&mail.body) {
                amount = parse_amount(&c[1]);
                sender_name = c[2].trim().to_string();
            } else if let Some(c) = body_paid_re().captures(&mail.body) {
                sender_name = c[1].trim().to_string();
                amount = parse_amount(&c[2]);
            }
        }

        if sender_name.to_lowercase().starts_with("cash app:") {
            sender_name = sender_name[9..].trim().to_string();
        }

        if memo.is_none() {
            memo = profile_memo_re()
                .captures(&mail.body)
                .map(|c| c[1].trim().to_string());
        }

        let transaction_id = tx_re().captures(&mail.body).map(|c| c[1].to_string());

        if amount == 0.0 || sender_name.is_empty() {
            tracing::debug!(source = "cashapp", "payment fields incomplete, skipping");
            return None;
        }

        Some(ParsedPayment {
            source: PaymentSource::Cashapp,
            amount,
            sender_name,
            sender_identifier: None,
            transaction_id,
            memo,
            received_at: mail.date,
        })
    }
}
