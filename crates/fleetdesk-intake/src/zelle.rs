//! Zelle payment notifications, as forwarded by Chase.
//!
//! Chase sends both an HTML table layout and a plain-text digest; every
//! field is tried against the table cell pattern first, then the text
//! fallback.

use crate::email::RawEmail;
use crate::{parse_amount, ParsedPayment, SourceParser};
use fleetdesk_core::PaymentSource;
use regex::Regex;
use std::sync::OnceLock;

pub struct Zelle;

fn sender_h1_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)<h1[^>]*>\s*([A-Za-z\s]+)\s+sent you money")
            .expect("valid zelle sender regex")
    })
}

fn sender_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)You received \$[\d,]+\.?\d* from ([A-Za-z\s]+)")
            .expect("valid zelle sender fallback regex")
    })
}

fn amount_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r">\s*\$?([\d,]+\.?\d*)\s*</td>").expect("valid zelle amount regex")
    })
}

fn amount_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Amount:?\s*\$?([\d,]+\.?\d*)")
            .expect("valid zelle amount fallback regex")
    })
}

fn tx_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)Transaction number</td>.*?>\s*(\d+)\s*</td>")
            .expect("valid zelle transaction regex")
    })
}

fn tx_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Transaction number:?\s*(\d+)")
            .expect("valid zelle transaction fallback regex")
    })
}

fn memo_cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)Memo</td>.*?>\s*([^<]+)\s*</td>")
            .expect("valid zelle memo regex")
    })
}

fn memo_text_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)Memo:?\s*([^\n<]+)").expect("valid zelle memo fallback regex")
    })
}

impl SourceParser for Zelle {
    fn source(&self) -> PaymentSource {
        PaymentSource::Zelle
    }

    fn matches(&self, from: &str, subject: &str) -> bool {
        from.to_lowercase().contains("chase.com") && subject.to_lowercase().contains("zelle")
    }

    fn parse(&self, mail: &RawEmail) -> Option<ParsedPayment> {
        let body = &mail.body;

        let sender_name = sender_h1_re()
            .captures(body)
            .or_else(|| sender_text_re().captures(body))
            .map(|c| title_case(c[1].trim()))
            .unwrap_or_default();

        let amount = amount_cell_re()
            .captures(body)
            .or_else(|| amount_text_re().captures(body))
            .map(|c| parse_amount(&c[1]))
            .unwrap_or(0.0);

        let transaction_id = tx_cell_re()
            .captures(body)
            .or_else(|| tx_text_re().captures(body))
            .map(|c| c[1].to_string());

        let memo = memo_cell_re()
            .captures(body)
            .or_else(|| memo_text_re().captures(body))
            .map(|c| c[1].trim().to_string())
            .filter(|m| !m.eq_ignore_ascii_case("n/a"));

        if amount == 0.0 || sender_name.is_empty() {
            tracing::debug!(source = "zelle", "payment fields incomplete, skipping");
            return None;
        }

        Some(ParsedPayment {
            source: PaymentSource::Zelle,
            amount,
            sender_name,
            sender_identifier: None,
            transaction_id,
            memo,
            received_at: mail.date,
        })
    }
}

/// Chase shouts sender names in caps; bring them back to title case.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HTML_BODY: &str = r#"
        <h1 class="title">JANE DOE sent you money</h1>
        <table>
          <tr><td>Amount</td><td> $1,250.00 </td></tr>
          <tr><td>Transaction number</td><td> 987654321 </td></tr>
          <tr><td>Memo</td><td> week 3 car payment </td></tr>
        </table>
    "#;

    fn mail(body: &str) -> RawEmail {
        RawEmail::new(
            "Chase <no.reply.alerts@chase.com>",
            "You received money with Zelle(R)",
            body,
        )
    }

    #[test]
    fn matches_chase_zelle_mail_only() {
        assert!(Zelle.matches("no.reply.alerts@chase.com", "Zelle payment"));
        assert!(!Zelle.matches("no.reply.alerts@chase.com", "Statement ready"));
        assert!(!Zelle.matches("alerts@venmo.com", "Zelle payment"));
    }

    #[test]
    fn parses_html_table_layout() {
        let payment = Zelle.parse(&mail(HTML_BODY)).unwrap();
        assert_eq!(payment.sender_name, "Jane Doe");
        assert_eq!(payment.amount, 1250.0);
        assert_eq!(payment.transaction_id.as_deref(), Some("987654321"));
        assert_eq!(payment.memo.as_deref(), Some("week 3 car payment"));
        assert_eq!(payment.source, PaymentSource::Zelle);
    }

    #[test]
    fn parses_plain_text_layout() {
        let body = "You received $120.00 from JANE DOE.\nAmount: $120.00\nTransaction number: 12345\nMemo: fuel";
        let payment = Zelle.parse(&mail(body)).unwrap();
        assert_eq!(payment.sender_name, "Jane Doe");
        assert_eq!(payment.amount, 120.0);
        assert_eq!(payment.transaction_id.as_deref(), Some("12345"));
        assert_eq!(payment.memo.as_deref(), Some("fuel"));
    }

    #[test]
    fn na_memo_is_dropped() {
        let body = "You received $120.00 from JANE DOE.\nAmount: $120.00\nMemo: N/A";
        let payment = Zelle.parse(&mail(body)).unwrap();
        assert_eq!(payment.memo, None);
    }

    #[test]
    fn missing_amount_rejects_message() {
        let body = "<h1>JANE DOE sent you money</h1>";
        assert_eq!(Zelle.parse(&mail(body)), None);
    }
}
