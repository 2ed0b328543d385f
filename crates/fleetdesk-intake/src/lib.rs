//! fleetdesk-intake — payment notification parsing for FleetDesk.
//!
//! Drivers pay over consumer apps; each app emails a notification to the
//! operations inbox. One module per provider parses those notifications
//! into [`ParsedPayment`] values for the ledger. The registry tries
//! sources in fixed order and the first whose sender/subject heuristics
//! accept the message parses it.
//!
//! Parsing is best-effort by design: a message that cannot establish both
//! a non-zero amount and a sender name yields `None` rather than an error,
//! since provider templates change without notice.

pub mod cashapp;
pub mod chime;
pub mod email;
pub mod stripe;
pub mod venmo;
pub mod zelle;

use chrono::{DateTime, Utc};
use fleetdesk_core::PaymentSource;
use std::path::Path;

pub use email::RawEmail;

/// A payment extracted from a provider notification email.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPayment {
    pub source: PaymentSource,
    pub amount: f64,
    pub sender_name: String,
    /// Email, phone, or username when the provider exposes one.
    pub sender_identifier: Option<String>,
    pub transaction_id: Option<String>,
    pub memo: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// Trait implemented by each payment source parser.
pub trait SourceParser: Send + Sync {
    /// Which provider this parser covers.
    fn source(&self) -> PaymentSource;

    /// Cheap sender/subject test deciding whether [`parse`](Self::parse)
    /// should run.
    fn matches(&self, from: &str, subject: &str) -> bool;

    /// Extract a payment from the message. `None` when the message is not
    /// a usable payment notification (wrong direction, no amount, …).
    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment>;
}

/// Source parsers in dispatch order.
static PARSERS: [&'static dyn SourceParser; 5] = [
    &zelle::Zelle,
    &cashapp::CashApp,
    &venmo::Venmo,
    &chime::Chime,
    &stripe::Stripe,
];

/// All registered source parsers, in dispatch order.
pub fn parsers() -> &'static [&'static dyn SourceParser] {
    &PARSERS
}

/// Run the registry against one decoded email.
pub fn parse(mail: &RawEmail) -> Option<ParsedPayment> {
    for parser in parsers() {
        if parser.matches(&mail.from, &mail.subject) {
            return parser.parse(mail);
        }
    }
    tracing::debug!(from = %mail.from, subject = %mail.subject, "no payment parser matched");
    None
}

/// Read and parse one `.eml` file from disk.
pub fn parse_eml_file(path: &Path) -> anyhow::Result<Option<ParsedPayment>> {
    let raw = std::fs::read_to_string(path)?;
    Ok(parse(&RawEmail::from_eml(&raw)))
}

/// Dollar amount with thousands separators stripped; unparseable input
/// degrades to zero, which the per-source validation rejects.
pub(crate) fn parse_amount(s: &str) -> f64 {
    s.replace(',', "").parse().unwrap_or(0.0)
}
