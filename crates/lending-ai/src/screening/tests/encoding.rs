use super::common::{applicant, financial, training_schema};
use crate::screening::domain::{CreditStanding, Education, Gender, PropertyArea};
use crate::screening::encoding::{columns, encode};
use crate::screening::metrics::derive;

#[test]
fn encodes_the_reference_application() {
    let applicant = applicant();
    let financial = financial(5000.0, 0.0, 100000.0, 360, 0.0, 750);
    let metrics = derive(&financial);

    let frame = encode(
        &applicant,
        &financial,
        CreditStanding::Good,
        PropertyArea::Urban,
        &metrics,
    );

    assert_eq!(frame.get(columns::GENDER), Some(1.0));
    assert_eq!(frame.get(columns::MARRIED), Some(1.0));
    assert_eq!(frame.get(columns::DEPENDENTS), Some(1.0));
    assert_eq!(frame.get(columns::EDUCATION), Some(1.0));
    assert_eq!(frame.get(columns::SELF_EMPLOYED), Some(0.0));
    assert_eq!(frame.get(columns::APPLICANT_INCOME), Some(5000.0));
    assert_eq!(frame.get(columns::COAPPLICANT_INCOME), Some(0.0));
    assert_eq!(frame.get(columns::LOAN_AMOUNT), Some(100000.0));
    assert_eq!(frame.get(columns::LOAN_TERM), Some(360.0));
    assert_eq!(frame.get(columns::CREDIT_HISTORY), Some(1.0));
    assert_eq!(frame.get(columns::EXISTING_EMIS), Some(0.0));
    assert_eq!(frame.get(columns::AREA_SEMIURBAN), Some(0.0));
    assert_eq!(frame.get(columns::AREA_URBAN), Some(1.0));
    assert_eq!(frame.get(columns::TOTAL_INCOME), Some(5000.0));
    assert_eq!(frame.get(columns::DTI), Some(20.0));
    assert_eq!(frame.get(columns::EMI_INCOME_RATIO), Some(metrics.emi_income_ratio));
}

#[test]
fn placeholder_fields_are_constant_for_any_input() {
    let mut applicant = applicant();
    applicant.gender = Gender::Female;
    applicant.education = Education::NotGraduate;
    let financial = financial(2500.0, 800.0, 40000.0, 120, 75.0, 412);
    let metrics = derive(&financial);

    let frame = encode(
        &applicant,
        &financial,
        CreditStanding::Bad,
        PropertyArea::Semiurban,
        &metrics,
    );

    assert_eq!(frame.get(columns::AGE), Some(30.0));
    assert_eq!(frame.get(columns::AREA_NEW), Some(0.0));
}

#[test]
fn categorical_baselines_encode_to_zero() {
    let mut applicant = applicant();
    applicant.gender = Gender::Female;
    applicant.married = false;
    applicant.education = Education::NotGraduate;
    applicant.self_employed = true;
    let financial = financial(3000.0, 0.0, 60000.0, 180, 0.0, 640);
    let metrics = derive(&financial);

    let frame = encode(
        &applicant,
        &financial,
        CreditStanding::Bad,
        PropertyArea::Rural,
        &metrics,
    );

    assert_eq!(frame.get(columns::GENDER), Some(0.0));
    assert_eq!(frame.get(columns::MARRIED), Some(0.0));
    assert_eq!(frame.get(columns::EDUCATION), Some(0.0));
    assert_eq!(frame.get(columns::SELF_EMPLOYED), Some(1.0));
    assert_eq!(frame.get(columns::CREDIT_HISTORY), Some(0.0));
}

#[test]
fn rural_area_is_the_all_zero_baseline() {
    let applicant = applicant();
    let financial = financial(3000.0, 0.0, 60000.0, 180, 0.0, 750);
    let metrics = derive(&financial);

    let frame = encode(
        &applicant,
        &financial,
        CreditStanding::Good,
        PropertyArea::Rural,
        &metrics,
    );

    assert_eq!(frame.get(columns::AREA_SEMIURBAN), Some(0.0));
    assert_eq!(frame.get(columns::AREA_URBAN), Some(0.0));
}

#[test]
fn projection_onto_the_training_schema_is_idempotent() {
    let applicant = applicant();
    let financial = financial(4000.0, 500.0, 90000.0, 240, 120.0, 710);
    let metrics = derive(&financial);
    let frame = encode(
        &applicant,
        &financial,
        CreditStanding::Good,
        PropertyArea::Semiurban,
        &metrics,
    );

    let schema = training_schema();
    let once = schema.project(&frame);
    let twice = schema.project(&once);

    assert_eq!(once, twice);
    assert_eq!(once.len(), schema.len());
}
