use serde::{Deserialize, Serialize};

/// Reasons an application fails the deterministic checks. The summary texts
/// are part of the applicant-facing output contract and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    UnrealisticLoanAmount,
    EmiOverload,
    BadCreditLoanTooLarge,
    BadCreditEmiBurden,
}

impl RejectionReason {
    pub const fn summary(self) -> &'static str {
        match self {
            RejectionReason::UnrealisticLoanAmount => {
                "Requested loan is unrealistically high compared to your income"
            }
            RejectionReason::EmiOverload => "Total EMIs exceed 50% of your income",
            RejectionReason::BadCreditLoanTooLarge => {
                "Loan amount too high for your income with bad credit"
            }
            RejectionReason::BadCreditEmiBurden => {
                "Monthly payment burden too high with bad credit"
            }
        }
    }
}

/// Final adjudication. The rejecting gate is explicit in the variant rather
/// than inferred from whether the reason list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LoanDecision {
    Approved,
    RejectedByRules { reasons: Vec<RejectionReason> },
    RejectedByModel,
}

impl LoanDecision {
    pub fn is_approved(&self) -> bool {
        matches!(self, LoanDecision::Approved)
    }

    pub const fn label(&self) -> &'static str {
        match self {
            LoanDecision::Approved => "approved",
            LoanDecision::RejectedByRules { .. } => "rejected_by_rules",
            LoanDecision::RejectedByModel => "rejected_by_model",
        }
    }

    pub fn summary(&self) -> String {
        match self {
            LoanDecision::Approved => {
                "approved based on your financial profile and credit score".to_string()
            }
            LoanDecision::RejectedByRules { reasons } => {
                if reasons.is_empty() {
                    "rejected by affordability rules".to_string()
                } else {
                    let details = reasons
                        .iter()
                        .map(|reason| reason.summary())
                        .collect::<Vec<_>>()
                        .join("; ");
                    format!("rejected by affordability rules: {details}")
                }
            }
            LoanDecision::RejectedByModel => "rejected based on model prediction".to_string(),
        }
    }
}
