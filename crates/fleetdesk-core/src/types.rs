//! Core types for fleetdesk-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`NormalizedValue`] presentation union produced by the normalizer, the
//! [`FieldRow`] display row, and the wire enums mirrored from the operations
//! backend.

use serde::{Deserialize, Serialize};

/// How a single form field should be presented.
///
/// Produced by [`normalize`](crate::normalizer::normalize) and consumed by
/// the display layer: `Empty` renders as a placeholder, `Text` as plain
/// text, `LinkList` as a vertical stack of document links.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NormalizedValue {
    Empty,
    Text(String),
    LinkList(Vec<Link>),
}

impl NormalizedValue {
    /// True when there is nothing meaningful to show.
    pub fn is_empty(&self) -> bool {
        matches!(self, NormalizedValue::Empty)
    }
}

/// One clickable document reference inside a [`NormalizedValue::LinkList`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One row of the record detail grid: a display label plus its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldRow {
    pub label: String,
    pub value: NormalizedValue,
}

/// Lifecycle state of a driver application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Declined,
    Hold,
    Onboarding,
}

impl ApplicationStatus {
    /// Whether staff may move an application from `self` to `to`.
    ///
    /// Pending applications can be approved, held, or declined; held ones
    /// approved or declined; approved ones onboarded. Declined and
    /// onboarding are terminal.
    pub fn can_transition(self, to: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, to),
            (Pending, Approved)
                | (Pending, Hold)
                | (Pending, Declined)
                | (Hold, Approved)
                | (Hold, Declined)
                | (Approved, Onboarding)
        )
    }

    /// Human title for the staff action that moves an application to `self`.
    pub fn action_title(self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "Approve Application",
            ApplicationStatus::Hold => "Put on Hold",
            ApplicationStatus::Declined => "Decline Application",
            ApplicationStatus::Onboarding => "Onboard Driver",
            ApplicationStatus::Pending => "Confirm Action",
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Declined => write!(f, "declined"),
            ApplicationStatus::Hold => write!(f, "hold"),
            ApplicationStatus::Onboarding => write!(f, "onboarding"),
        }
    }
}

/// Returned when a status string is not one of the five wire values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status: {0:?}")]
pub struct ParseStatusError(pub String);

impl std::str::FromStr for ApplicationStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "declined" => Ok(ApplicationStatus::Declined),
            "hold" => Ok(ApplicationStatus::Hold),
            "onboarding" => Ok(ApplicationStatus::Onboarding),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// How a driver is billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingType {
    Daily,
    Weekly,
}

impl std::fmt::Display for BillingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BillingType::Daily => write!(f, "daily"),
            BillingType::Weekly => write!(f, "weekly"),
        }
    }
}

/// Returned when a billing-type string is not `daily` or `weekly`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown billing type: {0:?}")]
pub struct ParseBillingTypeError(pub String);

impl std::str::FromStr for BillingType {
    type Err = ParseBillingTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(BillingType::Daily),
            "weekly" => Ok(BillingType::Weekly),
            other => Err(ParseBillingTypeError(other.to_string())),
        }
    }
}

/// Which provider a payment notification came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSource {
    Zelle,
    Cashapp,
    Venmo,
    Chime,
    Stripe,
}

impl std::fmt::Display for PaymentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentSource::Zelle => write!(f, "zelle"),
            PaymentSource::Cashapp => write!(f, "cashapp"),
            PaymentSource::Venmo => write!(f, "venmo"),
            PaymentSource::Chime => write!(f, "chime"),
            PaymentSource::Stripe => write!(f, "stripe"),
        }
    }
}

/// Returned when a payment-source string names no known provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment source: {0:?}")]
pub struct ParseSourceError(pub String);

impl std::str::FromStr for PaymentSource {
    type Err = ParseSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zelle" => Ok(PaymentSource::Zelle),
            "cashapp" => Ok(PaymentSource::Cashapp),
            "venmo" => Ok(PaymentSource::Venmo),
            "chime" => Ok(PaymentSource::Chime),
            "stripe" => Ok(PaymentSource::Stripe),
            other => Err(ParseSourceError(other.to_string())),
        }
    }
}
