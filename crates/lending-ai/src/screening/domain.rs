use serde::{Deserialize, Serialize};

/// Applicant demographics captured by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub gender: Gender,
    pub married: bool,
    pub dependents: u8,
    pub education: Education,
    pub self_employed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    Graduate,
    NotGraduate,
}

/// Financial attributes feeding the affordability rules and the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub applicant_income: f64,
    pub coapplicant_income: f64,
    pub loan_amount: f64,
    pub loan_term: LoanTerm,
    pub existing_emis: f64,
    pub credit_score: u16,
}

/// Repayment windows offered by the bank, in months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LoanTerm {
    Months60,
    Months120,
    Months180,
    Months240,
    Months360,
}

impl LoanTerm {
    pub const fn months(self) -> u32 {
        match self {
            LoanTerm::Months60 => 60,
            LoanTerm::Months120 => 120,
            LoanTerm::Months180 => 180,
            LoanTerm::Months240 => 240,
            LoanTerm::Months360 => 360,
        }
    }
}

impl TryFrom<u32> for LoanTerm {
    type Error = InvalidLoanTerm;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            60 => Ok(LoanTerm::Months60),
            120 => Ok(LoanTerm::Months120),
            180 => Ok(LoanTerm::Months180),
            240 => Ok(LoanTerm::Months240),
            360 => Ok(LoanTerm::Months360),
            other => Err(InvalidLoanTerm(other)),
        }
    }
}

impl From<LoanTerm> for u32 {
    fn from(term: LoanTerm) -> Self {
        term.months()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("loan term must be one of 60, 120, 180, 240, or 360 months, got {0}")]
pub struct InvalidLoanTerm(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyArea {
    Urban,
    Semiurban,
    Rural,
}

/// Bureau scores at or above this threshold count as good credit.
pub const GOOD_CREDIT_MINIMUM_SCORE: u16 = 700;

/// Binary credit standing derived from the bureau score. The raw score is
/// collapsed to this flag before any rule or encoding step consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreditStanding {
    Good,
    Bad,
}

impl CreditStanding {
    pub fn from_score(score: u16) -> Self {
        if score >= GOOD_CREDIT_MINIMUM_SCORE {
            CreditStanding::Good
        } else {
            CreditStanding::Bad
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self, CreditStanding::Good)
    }
}

/// Validated application record handed to the decision pipeline. Inputs are
/// immutable once admitted; every evaluation starts from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub applicant: ApplicantProfile,
    pub financial: FinancialProfile,
    pub property_area: PropertyArea,
}
