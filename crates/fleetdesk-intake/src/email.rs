//! Decoded-email representation and a minimal `.eml` reader.
//!
//! The mail-fetch service hands intake already-decoded messages; the
//! reader here only covers local `.eml` files well enough for the CLI and
//! tests: header unfolding, the headers the parsers consume, and
//! quoted-printable artifact cleanup. MIME multipart and encoded-word
//! subjects stay upstream.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

/// One decoded notification email, ready for the source parsers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEmail {
    pub from: String,
    pub subject: String,
    /// Decoded body, HTML or plain text; the parsers regex over it as-is.
    pub body: String,
    pub date: DateTime<Utc>,
    /// `Message-ID` header with angle brackets stripped.
    pub message_id: Option<String>,
}

impl RawEmail {
    /// Build from already-decoded parts. The receive time defaults to now
    /// and the message id to none.
    pub fn new(
        from: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            subject: subject.into(),
            body: body.into(),
            date: Utc::now(),
            message_id: None,
        }
    }

    /// Read a raw `.eml` message: headers split at the first blank line,
    /// continuation lines unfolded, quoted-printable soft breaks and `=XX`
    /// escapes undone in the body. A missing or unparseable `Date` header
    /// falls back to the ingest time.
    pub fn from_eml(raw: &str) -> Self {
        let (head, body) = split_message(raw);
        let headers = unfold_headers(head);

        let date = header_value(&headers, "date")
            .and_then(|v| DateTime::parse_from_rfc2822(v.trim()).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Self {
            from: header_value(&headers, "from").unwrap_or_default().to_string(),
            subject: header_value(&headers, "subject").unwrap_or_default().to_string(),
            body: clean_quoted_printable(body),
            date,
            message_id: header_value(&headers, "message-id")
                .map(|v| v.trim_matches(['<', '>']).to_string()),
        }
    }
}

/// Split at the first blank line; a message without one is all headers.
fn split_message(raw: &str) -> (&str, &str) {
    if let Some(idx) = raw.find("\r\n\r\n") {
        (&raw[..idx], &raw[idx + 4..])
    } else if let Some(idx) = raw.find("\n\n") {
        (&raw[..idx], &raw[idx + 2..])
    } else {
        (raw, "")
    }
}

/// Header lines with RFC 5322 continuations folded back in. Names are
/// lowercased; values trimmed.
fn unfold_headers(head: &str) -> Vec<(String, String)> {
    let mut headers: Vec<(String, String)> = Vec::new();
    for line in head.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some((_, value)) = headers.last_mut() {
                value.push(' ');
                value.push_str(line.trim());
            }
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_ascii_lowercase(), value.trim().to_string()));
        }
    }
    headers
}

fn header_value<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v.as_str())
}

fn qp_escape_re() -> &'static Regex {
    static QP_ESCAPE_RE: OnceLock<Regex> = OnceLock::new();
    QP_ESCAPE_RE.get_or_init(|| {
        Regex::new(r"=([0-9A-Fa-f]{2})").expect("valid quoted-printable regex")
    })
}

/// Undo quoted-printable artifacts: soft line breaks, then `=XX` escapes.
/// Escapes that fail to decode are left untouched.
pub(crate) fn clean_quoted_printable(body: &str) -> String {
    let body = body.replace("=\r\n", "").replace("=\n", "");
    qp_escape_re()
        .replace_all(&body, |caps: &regex::Captures<'_>| {
            u8::from_str_radix(&caps[1], 16)
                .map(|byte| char::from(byte).to_string())
                .unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}
