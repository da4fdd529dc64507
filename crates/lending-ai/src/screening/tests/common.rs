use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::model::{ClassLabel, Classifier, FeatureFrame, ModelError, ModelSchema};
use crate::screening::domain::{
    ApplicantProfile, Education, FinancialProfile, Gender, LoanApplication, LoanTerm, PropertyArea,
};
use crate::screening::service::LoanDecisionService;

pub(super) fn applicant() -> ApplicantProfile {
    ApplicantProfile {
        gender: Gender::Male,
        married: true,
        dependents: 1,
        education: Education::Graduate,
        self_employed: false,
    }
}

pub(super) fn financial(
    applicant_income: f64,
    coapplicant_income: f64,
    loan_amount: f64,
    term_months: u32,
    existing_emis: f64,
    credit_score: u16,
) -> FinancialProfile {
    FinancialProfile {
        applicant_income,
        coapplicant_income,
        loan_amount,
        loan_term: LoanTerm::try_from(term_months).expect("valid loan term"),
        existing_emis,
        credit_score,
    }
}

pub(super) fn application(financial: FinancialProfile) -> LoanApplication {
    LoanApplication {
        applicant: applicant(),
        financial,
        property_area: PropertyArea::Urban,
    }
}

pub(super) fn training_schema() -> ModelSchema {
    ModelSchema::new(
        [
            "Gender",
            "Married",
            "Dependents",
            "Education",
            "Self_Employed",
            "ApplicantIncome",
            "CoapplicantIncome",
            "LoanAmount",
            "Loan_Amount_Term",
            "Credit_History",
            "Age",
            "Existing EMIs",
            "Property_Area_Semiurban",
            "Property_Area_Urban",
            "Property_Area_New",
            "Total_Income",
            "DTI",
            "EMI_Income_Ratio",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
    )
}

/// Classifier double returning a fixed label while counting invocations and
/// remembering the last frame it was handed.
pub(super) struct FixedClassifier {
    schema: ModelSchema,
    label: ClassLabel,
    calls: AtomicUsize,
    last_frame: Mutex<Option<FeatureFrame>>,
}

impl FixedClassifier {
    pub(super) fn approving() -> Self {
        Self::with_label(ClassLabel::Approve)
    }

    pub(super) fn declining() -> Self {
        Self::with_label(ClassLabel::Decline)
    }

    fn with_label(label: ClassLabel) -> Self {
        Self {
            schema: training_schema(),
            label,
            calls: AtomicUsize::new(0),
            last_frame: Mutex::new(None),
        }
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(super) fn last_frame(&self) -> Option<FeatureFrame> {
        self.last_frame.lock().expect("frame mutex poisoned").clone()
    }
}

impl Classifier for FixedClassifier {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn predict(&self, features: &FeatureFrame) -> Result<ClassLabel, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_frame.lock().expect("frame mutex poisoned") = Some(features.clone());
        Ok(self.label)
    }
}

/// Classifier double that always fails, for the fatal-error path.
pub(super) struct FaultyClassifier {
    schema: ModelSchema,
}

impl FaultyClassifier {
    pub(super) fn new() -> Self {
        Self {
            schema: training_schema(),
        }
    }
}

impl Classifier for FaultyClassifier {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn predict(&self, _features: &FeatureFrame) -> Result<ClassLabel, ModelError> {
        Err(ModelError::Malformed("corrupt artifact".to_string()))
    }
}

pub(super) fn service_with(
    classifier: FixedClassifier,
) -> (LoanDecisionService<FixedClassifier>, Arc<FixedClassifier>) {
    let classifier = Arc::new(classifier);
    (LoanDecisionService::new(classifier.clone()), classifier)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
