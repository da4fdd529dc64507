use crate::screening::domain::{Education, Gender, LoanTerm, PropertyArea};
use crate::screening::intake::{IntakeGuard, IntakeViolation, LoanApplicationForm};

pub(super) fn form() -> LoanApplicationForm {
    LoanApplicationForm {
        gender: Gender::Male,
        married: true,
        dependents: 1,
        education: Education::Graduate,
        self_employed: false,
        applicant_income: 5000.0,
        coapplicant_income: 0.0,
        loan_amount: 100000.0,
        loan_term_months: 360,
        existing_emis: 0.0,
        credit_score: 750,
        property_area: PropertyArea::Urban,
    }
}

#[test]
fn admits_a_valid_form() {
    let application = IntakeGuard
        .application_from_form(form())
        .expect("valid form admitted");

    assert_eq!(application.financial.loan_term, LoanTerm::Months360);
    assert_eq!(application.financial.credit_score, 750);
    assert_eq!(application.property_area, PropertyArea::Urban);
}

#[test]
fn rejects_negative_amounts() {
    let mut form = form();
    form.coapplicant_income = -1.0;

    let violation = IntakeGuard
        .application_from_form(form)
        .expect_err("negative income rejected");

    assert!(matches!(
        violation,
        IntakeViolation::InvalidAmount {
            field: "coapplicant_income",
            ..
        }
    ));
}

#[test]
fn rejects_non_finite_amounts() {
    let mut form = form();
    form.loan_amount = f64::NAN;

    let violation = IntakeGuard
        .application_from_form(form)
        .expect_err("NaN amount rejected");

    assert!(matches!(violation, IntakeViolation::InvalidAmount { .. }));
}

#[test]
fn rejects_too_many_dependents() {
    let mut form = form();
    form.dependents = 4;

    let violation = IntakeGuard
        .application_from_form(form)
        .expect_err("dependents above cap rejected");

    assert_eq!(
        violation,
        IntakeViolation::TooManyDependents { max: 3, found: 4 }
    );
}

#[test]
fn rejects_credit_scores_outside_the_bureau_range() {
    for score in [299, 901] {
        let mut form = form();
        form.credit_score = score;

        let violation = IntakeGuard
            .application_from_form(form)
            .expect_err("out-of-range score rejected");

        assert!(matches!(
            violation,
            IntakeViolation::CreditScoreOutOfRange { found, .. } if found == score
        ));
    }
}

#[test]
fn rejects_unoffered_loan_terms() {
    let mut form = form();
    form.loan_term_months = 90;

    let violation = IntakeGuard
        .application_from_form(form)
        .expect_err("unknown term rejected");

    assert!(matches!(violation, IntakeViolation::LoanTerm(_)));
}
