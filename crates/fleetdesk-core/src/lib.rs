//! fleetdesk-core — normalization core for FleetDesk.
//!
//! This crate holds the pure decision logic of the fleet operations
//! backend: classifying schema-less form fields for display, extracting
//! typed applicant profiles, and the small domain taxonomy around them.
//!
//! # Architecture
//!
//! ```text
//! Record Source ──► Normalizer ──► Display rows ──► Renderer
//!                      │
//!                      └──► Profile extraction ──► Driver creation
//! ```
//!
//! Everything here is synchronous and side-effect free; the HTTP, storage,
//! and messaging collaborators live outside this workspace.

pub mod config;
pub mod display;
pub mod normalizer;
pub mod profile;
pub mod templates;
pub mod types;

pub use types::{
    ApplicationStatus, BillingType, FieldRow, Link, NormalizedValue, PaymentSource,
};
