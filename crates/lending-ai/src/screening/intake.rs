use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::domain::{
    ApplicantProfile, Education, FinancialProfile, Gender, InvalidLoanTerm, LoanApplication,
    LoanTerm, PropertyArea,
};

pub const MAX_DEPENDENTS: u8 = 3;
pub const CREDIT_SCORE_RANGE: RangeInclusive<u16> = 300..=900;

/// Raw wire form as submitted by the intake surface, prior to validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplicationForm {
    pub gender: Gender,
    pub married: bool,
    pub dependents: u8,
    pub education: Education,
    pub self_employed: bool,
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term_months: u32,
    pub existing_emis: f64,
    pub credit_score: u16,
    pub property_area: PropertyArea,
}

/// Validation errors raised while admitting a submission.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum IntakeViolation {
    #[error("{field} must be a non-negative finite amount, got {value}")]
    InvalidAmount { field: &'static str, value: f64 },
    #[error("dependents capped at {max}, got {found}")]
    TooManyDependents { max: u8, found: u8 },
    #[error("credit score must fall within {min}-{max}, got {found}")]
    CreditScoreOutOfRange { min: u16, max: u16, found: u16 },
    #[error(transparent)]
    LoanTerm(#[from] InvalidLoanTerm),
}

/// Guard turning raw submissions into validated [`LoanApplication`] records.
/// The decision pipeline only ever sees records that passed this gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn application_from_form(
        &self,
        form: LoanApplicationForm,
    ) -> Result<LoanApplication, IntakeViolation> {
        let amounts = [
            ("applicant_income", form.applicant_income),
            ("coapplicant_income", form.coapplicant_income),
            ("loan_amount", form.loan_amount),
            ("existing_emis", form.existing_emis),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(IntakeViolation::InvalidAmount { field, value });
            }
        }

        if form.dependents > MAX_DEPENDENTS {
            return Err(IntakeViolation::TooManyDependents {
                max: MAX_DEPENDENTS,
                found: form.dependents,
            });
        }

        if !CREDIT_SCORE_RANGE.contains(&form.credit_score) {
            return Err(IntakeViolation::CreditScoreOutOfRange {
                min: *CREDIT_SCORE_RANGE.start(),
                max: *CREDIT_SCORE_RANGE.end(),
                found: form.credit_score,
            });
        }

        let loan_term = LoanTerm::try_from(form.loan_term_months)?;

        Ok(LoanApplication {
            applicant: ApplicantProfile {
                gender: form.gender,
                married: form.married,
                dependents: form.dependents,
                education: form.education,
                self_employed: form.self_employed,
            },
            financial: FinancialProfile {
                applicant_income: form.applicant_income,
                coapplicant_income: form.coapplicant_income,
                loan_amount: form.loan_amount,
                loan_term,
                existing_emis: form.existing_emis,
                credit_score: form.credit_score,
            },
            property_area: form.property_area,
        })
    }
}
