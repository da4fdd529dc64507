use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::model::{Classifier, ModelError};

use super::domain::{CreditStanding, LoanApplication};
use super::encoding;
use super::evaluation::{LoanDecision, RuleEngine};
use super::metrics::{derive, DerivedMetrics};

/// Two-gate decision pipeline: deterministic affordability rules first, then
/// the frozen classifier for applications the rules let through. The
/// classifier is injected at construction so the pipeline can be exercised
/// with doubles.
pub struct LoanDecisionService<C> {
    classifier: Arc<C>,
    rules: RuleEngine,
}

impl<C> LoanDecisionService<C>
where
    C: Classifier + 'static,
{
    pub fn new(classifier: Arc<C>) -> Self {
        Self {
            classifier,
            rules: RuleEngine,
        }
    }

    /// Decide one application. A rules rejection is terminal and the
    /// classifier is never consulted for it; a classifier failure propagates
    /// as an error rather than defaulting to any verdict.
    pub fn decide(&self, application: &LoanApplication) -> Result<DecisionOutcome, DecisionError> {
        let credit = CreditStanding::from_score(application.financial.credit_score);
        let metrics = derive(&application.financial);
        let verdict = self
            .rules
            .evaluate(&application.financial, &metrics, credit);

        if !verdict.approved {
            debug!(
                reasons = verdict.reasons.len(),
                "application stopped at the rule gate"
            );
            return Ok(DecisionOutcome::new(
                LoanDecision::RejectedByRules {
                    reasons: verdict.reasons,
                },
                metrics,
                credit,
            ));
        }

        let frame = encoding::encode(
            &application.applicant,
            &application.financial,
            credit,
            application.property_area,
            &metrics,
        );
        let projected = self.classifier.schema().project(&frame);
        let label = self.classifier.predict(&projected)?;

        let decision = if label.approves() {
            LoanDecision::Approved
        } else {
            LoanDecision::RejectedByModel
        };

        Ok(DecisionOutcome::new(decision, metrics, credit))
    }

    /// Score applications independently, in order. Each row is a fresh
    /// evaluation; the first classifier failure aborts the batch.
    pub fn decide_batch(
        &self,
        applications: &[LoanApplication],
    ) -> Result<Vec<DecisionOutcome>, DecisionError> {
        applications
            .iter()
            .map(|application| self.decide(application))
            .collect()
    }
}

/// What the pipeline hands back to callers. Owned by the return value alone;
/// nothing is persisted between invocations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionOutcome {
    pub decision: LoanDecision,
    pub credit_standing: CreditStanding,
    pub metrics: DerivedMetrics,
    pub decided_at: DateTime<Utc>,
}

impl DecisionOutcome {
    fn new(decision: LoanDecision, metrics: DerivedMetrics, credit_standing: CreditStanding) -> Self {
        Self {
            decision,
            credit_standing,
            metrics,
            decided_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> String {
        self.decision.summary()
    }

    /// Applicant-facing rendering for API responses. Itemized reasons only
    /// accompany rule rejections; a model rejection stays generic.
    pub fn view(&self) -> DecisionView {
        let reasons = match &self.decision {
            LoanDecision::RejectedByRules { reasons } => reasons
                .iter()
                .map(|reason| reason.summary().to_string())
                .collect(),
            _ => Vec::new(),
        };

        DecisionView {
            approved: self.decision.is_approved(),
            outcome: self.decision.label(),
            reasons,
            summary: self.summary(),
            metrics: self.metrics,
            decided_at: self.decided_at,
        }
    }
}

/// Serialized response body for the decision endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionView {
    pub approved: bool,
    pub outcome: &'static str,
    pub reasons: Vec<String>,
    pub summary: String,
    pub metrics: DerivedMetrics,
    pub decided_at: DateTime<Utc>,
}

/// Error raised by the decision pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error(transparent)]
    Model(#[from] ModelError),
}
