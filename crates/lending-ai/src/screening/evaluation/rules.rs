use serde::{Deserialize, Serialize};

use super::policy::RejectionReason;
use crate::screening::domain::{CreditStanding, FinancialProfile};
use crate::screening::metrics::DerivedMetrics;

/// Loan requests above this multiple of total income are treated as unrealistic.
pub const UNREALISTIC_LOAN_INCOME_MULTIPLE: f64 = 50.0;
/// Combined EMIs may not consume more than this share of income.
pub const MAX_EMI_INCOME_RATIO: f64 = 0.5;
/// With bad credit, loan-to-income above this is an outright denial.
pub const BAD_CREDIT_MAX_LOAN_TO_INCOME: f64 = 15.0;
/// With bad credit, the payment-burden cap tightens to this share.
pub const BAD_CREDIT_MAX_EMI_INCOME_RATIO: f64 = 0.3;

/// Outcome of the deterministic affordability checks. Reasons are reported
/// in rule order and the verdict approves iff no rule fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleVerdict {
    pub approved: bool,
    pub reasons: Vec<RejectionReason>,
}

/// Deterministic bank-style checks evaluated ahead of the classifier. All
/// thresholds are strict comparisons; equality always passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    /// Evaluation never short-circuits: every applicable rule is checked and
    /// every triggered reason is collected. The two bad-credit checks are the
    /// exception; they are mutually exclusive and the ratio check wins.
    pub fn evaluate(
        &self,
        financial: &FinancialProfile,
        metrics: &DerivedMetrics,
        credit: CreditStanding,
    ) -> RuleVerdict {
        let mut reasons = Vec::new();

        if financial.loan_amount > metrics.total_income * UNREALISTIC_LOAN_INCOME_MULTIPLE {
            reasons.push(RejectionReason::UnrealisticLoanAmount);
        }

        if metrics.emi_income_ratio > MAX_EMI_INCOME_RATIO {
            reasons.push(RejectionReason::EmiOverload);
        }

        if !credit.is_good() {
            if metrics.loan_to_income_ratio > BAD_CREDIT_MAX_LOAN_TO_INCOME {
                reasons.push(RejectionReason::BadCreditLoanTooLarge);
            } else if metrics.emi_income_ratio > BAD_CREDIT_MAX_EMI_INCOME_RATIO {
                reasons.push(RejectionReason::BadCreditEmiBurden);
            }
        }

        RuleVerdict {
            approved: reasons.is_empty(),
            reasons,
        }
    }
}
