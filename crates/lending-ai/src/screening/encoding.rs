use crate::model::FeatureFrame;

use super::domain::{
    ApplicantProfile, CreditStanding, Education, FinancialProfile, Gender, PropertyArea,
};
use super::metrics::DerivedMetrics;

/// Column names the classifier was trained on. These must match the training
/// schema byte for byte; renaming any of them silently breaks alignment.
pub mod columns {
    pub const GENDER: &str = "Gender";
    pub const MARRIED: &str = "Married";
    pub const DEPENDENTS: &str = "Dependents";
    pub const EDUCATION: &str = "Education";
    pub const SELF_EMPLOYED: &str = "Self_Employed";
    pub const APPLICANT_INCOME: &str = "ApplicantIncome";
    pub const COAPPLICANT_INCOME: &str = "CoapplicantIncome";
    pub const LOAN_AMOUNT: &str = "LoanAmount";
    pub const LOAN_TERM: &str = "Loan_Amount_Term";
    pub const CREDIT_HISTORY: &str = "Credit_History";
    pub const AGE: &str = "Age";
    pub const EXISTING_EMIS: &str = "Existing EMIs";
    pub const AREA_SEMIURBAN: &str = "Property_Area_Semiurban";
    pub const AREA_URBAN: &str = "Property_Area_Urban";
    pub const AREA_NEW: &str = "Property_Area_New";
    pub const TOTAL_INCOME: &str = "Total_Income";
    pub const DTI: &str = "DTI";
    pub const EMI_INCOME_RATIO: &str = "EMI_Income_Ratio";
}

/// The training data carried no real age column; the schema still expects
/// one, so every row ships this constant.
const AGE_PLACEHOLDER: f64 = 30.0;

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Build the named feature mapping for one application. The frame carries
/// whatever the pipeline computes; callers project it onto the model schema
/// before inference.
pub fn encode(
    applicant: &ApplicantProfile,
    financial: &FinancialProfile,
    credit: CreditStanding,
    property_area: PropertyArea,
    metrics: &DerivedMetrics,
) -> FeatureFrame {
    let mut frame = FeatureFrame::new();

    frame.set(columns::GENDER, indicator(applicant.gender == Gender::Male));
    frame.set(columns::MARRIED, indicator(applicant.married));
    frame.set(columns::DEPENDENTS, f64::from(applicant.dependents));
    frame.set(
        columns::EDUCATION,
        indicator(applicant.education == Education::Graduate),
    );
    frame.set(columns::SELF_EMPLOYED, indicator(applicant.self_employed));
    frame.set(columns::APPLICANT_INCOME, financial.applicant_income);
    frame.set(columns::COAPPLICANT_INCOME, financial.coapplicant_income);
    frame.set(columns::LOAN_AMOUNT, financial.loan_amount);
    frame.set(columns::LOAN_TERM, f64::from(financial.loan_term.months()));
    frame.set(columns::CREDIT_HISTORY, indicator(credit.is_good()));
    frame.set(columns::AGE, AGE_PLACEHOLDER);
    frame.set(columns::EXISTING_EMIS, financial.existing_emis);
    frame.set(
        columns::AREA_SEMIURBAN,
        indicator(property_area == PropertyArea::Semiurban),
    );
    frame.set(
        columns::AREA_URBAN,
        indicator(property_area == PropertyArea::Urban),
    );
    // No input maps to the "New" area indicator; the training schema expects
    // the column, so it is always emitted as zero.
    frame.set(columns::AREA_NEW, 0.0);
    frame.set(columns::TOTAL_INCOME, metrics.total_income);
    frame.set(columns::DTI, metrics.loan_to_income_ratio);
    frame.set(columns::EMI_INCOME_RATIO, metrics.emi_income_ratio);

    frame
}
