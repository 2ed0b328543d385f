//! Outbound SMS message templates.
//!
//! Delivery is handled by the messaging service; these only build the
//! bodies staff send on billing and application events.

/// Reminder for an overdue payment.
pub fn late_payment(driver_name: &str, amount: f64, days_late: i64) -> String {
    format!(
        "Hi {driver_name}, your payment of ${amount:.2} is {days_late} days overdue. \
         Please make a payment as soon as possible to avoid service interruption. \
         - FleetDesk"
    )
}

/// Sent when an application is approved.
pub fn application_approved(applicant_name: &str) -> String {
    format!(
        "Congratulations {applicant_name}! Your FleetDesk driver application has been \
         approved. We'll be in touch with next steps. - FleetDesk"
    )
}

/// Sent when an application is declined.
pub fn application_declined(applicant_name: &str) -> String {
    format!(
        "Hi {applicant_name}, unfortunately your FleetDesk driver application was not \
         approved at this time. Thank you for your interest. - FleetDesk"
    )
}
