//! Stripe payment notifications.
//!
//! Stripe's subject is well-formed (`Payment of $X from NAME`); the body
//! only backs up the amount and carries the `pi_…` payment intent id.

use crate::email::RawEmail;
use crate::{parse_amount, ParsedPayment, SourceParser};
use fleetdesk_core::PaymentSource;
use regex::Regex;
use std::sync::OnceLock;

pub struct Stripe;

fn subject_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Payment of \$?([\d,]+\.?\d*)\s+from\s+(.+)")
            .expect("valid stripe subject regex")
    })
}

fn usd_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$?([\d,]+\.?\d*)\s*USD").expect("valid stripe amount regex")
    })
}

fn tx_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(pi_[A-Za-z0-9]+)").expect("valid stripe transaction regex")
    })
}

impl SourceParser for Stripe {
    fn source(&self) -> PaymentSource {
        PaymentSource::Stripe
    }

    fn matches(&self, from: &str, _subject: &str) -> bool {
        from.to_lowercase().contains("stripe.com")
    }

    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment> {
        let mut sender_name = String::new();
        let mut amount = 0.0;

        if let Some(c) = subject_re().captures(&mail.subject) {
            amount = parse_amount(&c[1]);
            let name_part = c[2].trim();
            // The subject sometimes continues "… for ACCOUNT".
            sender_name = name_part
                .split_once(" for ")
                .map(|(name, _)| name)
                .unwrap_or(name_part)
                .trim()
                .to_string();
        } else if let Some(c) = usd_re().captures(&mail.body) {
            amount = parse_amount(&c[1]);
        }

        let transaction_id = tx_re().captures(&mail.body).map(|c| c[1].to_string());

        if amount == 0.0 || sender_name.is_empty() {
            tracing::debug!(source = "stripe", "payment fields incomplete, skipping");
            return None;
        }

        Some(ParsedPayment {
            source: PaymentSource::Stripe,
            amount,
            sender_name,
            sender_identifier: None,
            transaction_id,
            memo: None,
            received_at: mail.date,
        })
    }
}
