//! Decision-support library for loan approvals.
//!
//! Applications pass two sequential gates: deterministic affordability rules,
//! then a frozen, externally trained classifier consulted only for
//! applications the rules let through. The [`screening`] module holds the
//! pipeline; [`model`] holds the classifier contract and artifact loading.

pub mod config;
pub mod error;
pub mod model;
pub mod screening;
pub mod telemetry;
