use serde::{Deserialize, Serialize};

use super::domain::FinancialProfile;

/// Affordability metrics computed fresh for every evaluation; never cached
/// across applicants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub total_income: f64,
    pub monthly_loan_payment: f64,
    pub emi_income_ratio: f64,
    pub loan_to_income_ratio: f64,
}

/// Pure derivation over the financial profile. Zero denominators produce
/// zero ratios rather than faults.
pub fn derive(financial: &FinancialProfile) -> DerivedMetrics {
    let total_income = financial.applicant_income + financial.coapplicant_income;
    let monthly_loan_payment = monthly_payment(financial.loan_amount, financial.loan_term.months());
    let emi_income_ratio = if total_income > 0.0 {
        (financial.existing_emis + monthly_loan_payment) / total_income
    } else {
        0.0
    };
    let loan_to_income_ratio = if total_income > 0.0 {
        financial.loan_amount / total_income
    } else {
        0.0
    };

    DerivedMetrics {
        total_income,
        monthly_loan_payment,
        emi_income_ratio,
        loan_to_income_ratio,
    }
}

pub(crate) fn monthly_payment(loan_amount: f64, term_months: u32) -> f64 {
    if term_months == 0 {
        return 0.0;
    }
    loan_amount / f64::from(term_months)
}
