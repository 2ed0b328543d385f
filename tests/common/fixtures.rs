//! Static form-data and email corpora used across harnesses.
//!
//! The form fixtures reproduce the shapes third-party intake forms actually
//! submit: flat fields, Fluent-Forms style nested name objects, address
//! blocks, document-upload URL strings, and unclassifiable junk. The email
//! fixtures are minimal but faithful skeletons of each provider's
//! notification template.

use serde_json::{json, Map, Value};

/// A typical flat submission.
pub fn form_flat() -> Map<String, Value> {
    as_object(json!({
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane.doe@example.com",
        "phone": "(312) 555-0188",
        "vehicle_preference": "Sedan",
        "drivers_license": "http://uploads.example.com/license-4412.pdf",
    }))
}

/// A Fluent-Forms style submission: nested name and address objects, a
/// multi-document upload string, and fields the dashboard cannot classify.
pub fn form_fluent() -> Map<String, Value> {
    as_object(json!({
        "names": {"First_Name": "Jane", "last_name": "Doe"},
        "home_address": {
            "address_line_1": "1 Main St",
            "address_line_2": "",
            "city": "Springfield",
            "state": "IL",
            "zip": "62704"
        },
        "documents": "http://uploads.example.com/a.pdf,http://uploads.example.com/b.pdf",
        "middle_name": null,
        "years_licensed": 6,
        "consent": true,
        "referral": {"source": "craigslist", "campaign": "spring"},
    }))
}

/// Shapes the classifier must degrade on rather than reject.
pub fn form_awkward() -> Map<String, Value> {
    as_object(json!({
        "blank": "",
        "upload_meta": {"label": "Proof of insurance", "size": 48213},
        "telemetry": {"a": 1, "b": 2, "c": 3, "d": 4, "e": 5, "f": 6},
        "tags": ["night-shift", "weekends"],
        "note": "ask about httpd experience",
    }))
}

fn as_object(value: Value) -> Map<String, Value> {
    value
        .as_object()
        .expect("fixture must be a JSON object")
        .clone()
}

// ---------------------------------------------------------------------------
// Email fixtures
// ---------------------------------------------------------------------------

/// A complete Zelle notification as stored on disk, quoted-printable soft
/// break included.
pub const ZELLE_EML: &str = "From: Chase <no.reply.alerts@chase.com>\r\n\
Subject: You received money with Zelle(R)\r\n\
Date: Mon, 15 Jan 2024 10:00:00 +0000\r\n\
Message-ID: <zelle-1@chase.com>\r\n\
Content-Type: text/html\r\n\
\r\n\
<h1 class=\"title\">JANE DOE sent you money</h1>\r\n\
<table><tr><td>Amount</td><td> $250.00 </td></tr>\r\n\
<tr><td>Transaction number</td><td> 987654321 </td></tr>\r\n\
<tr><td>Memo</td><td> week 3 car pay=\r\nment </td></tr></table>\r\n";

/// CashApp subject-driven notification.
pub const CASHAPP_SUBJECT: &str = "Jane Doe sent you $45 for gas";
pub const CASHAPP_BODY: &str = "Receipt #D-ABC123";

/// Venmo notification parts.
pub const VENMO_SUBJECT: &str = "Jane Doe paid you $210.00";
pub const VENMO_BODY: &str = "<td class=\"quiet transaction-note\">week 4</td>\n\
Transaction ID: 4210987654321";

/// Chime notification parts.
pub const CHIME_SUBJECT: &str = "Jane Doe just sent you money";
pub const CHIME_BODY: &str = "You received $85.00 for <strong>car payment</strong>";

/// Stripe notification parts.
pub const STRIPE_SUBJECT: &str = "Payment of $450.00 from Jane Doe for Fleet LLC";
pub const STRIPE_BODY: &str = "Payment intent pi_3OaXb2K9 succeeded. 450.00 USD";
