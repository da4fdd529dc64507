//! Contract for the frozen, externally trained classifier.
//!
//! The library never trains anything: it consumes a serialized artifact plus
//! the ordered column set the model was fitted on, and exposes both behind
//! the [`Classifier`] trait so the decision service can be exercised with
//! test doubles.

mod forest;
mod schema;

pub use forest::{ForestArtifact, RandomForestModel, TreeNodes};
pub use schema::{FeatureFrame, ModelSchema};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Binary verdict emitted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassLabel {
    Decline,
    Approve,
}

impl ClassLabel {
    pub const fn approves(self) -> bool {
        matches!(self, ClassLabel::Approve)
    }
}

/// Read-only inference over an encoded feature frame. Implementations must be
/// safe to share across concurrent evaluations.
pub trait Classifier: Send + Sync {
    /// Authoritative column set the model was trained on.
    fn schema(&self) -> &ModelSchema;

    /// Binary verdict over a feature frame already projected onto [`Self::schema`].
    fn predict(&self, features: &FeatureFrame) -> Result<ClassLabel, ModelError>;
}

/// Failures loading or evaluating the classifier. All of these are
/// deployment faults: callers surface them to the operator instead of
/// defaulting to a verdict.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid model JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed model artifact: {0}")]
    Malformed(String),
}
