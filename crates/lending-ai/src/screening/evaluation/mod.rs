mod policy;
mod rules;

pub use policy::{LoanDecision, RejectionReason};
pub use rules::{
    RuleEngine, RuleVerdict, BAD_CREDIT_MAX_EMI_INCOME_RATIO, BAD_CREDIT_MAX_LOAN_TO_INCOME,
    MAX_EMI_INCOME_RATIO, UNREALISTIC_LOAN_INCOME_MULTIPLE,
};
