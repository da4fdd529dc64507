//! Loan application screening: intake validation, affordability rules,
//! feature encoding, and the controlled handoff to the frozen classifier.

pub mod batch;
pub mod domain;
pub mod encoding;
pub mod evaluation;
pub mod intake;
pub mod metrics;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use batch::{read_applications, read_applications_from_path, BatchScoreError};
pub use domain::{
    ApplicantProfile, CreditStanding, Education, FinancialProfile, Gender, InvalidLoanTerm,
    LoanApplication, LoanTerm, PropertyArea, GOOD_CREDIT_MINIMUM_SCORE,
};
pub use evaluation::{LoanDecision, RejectionReason, RuleEngine, RuleVerdict};
pub use intake::{IntakeGuard, IntakeViolation, LoanApplicationForm};
pub use metrics::{derive, DerivedMetrics};
pub use router::decision_router;
pub use service::{DecisionError, DecisionOutcome, DecisionView, LoanDecisionService};
