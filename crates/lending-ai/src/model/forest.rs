use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use super::schema::{FeatureFrame, ModelSchema};
use super::{ClassLabel, Classifier, ModelError};

/// One decision tree in the exported forest, as parallel node arrays.
///
/// `feature[i] < 0` marks node `i` as a leaf; interior nodes route to
/// `left[i]` when the feature value is `<= threshold[i]` and to `right[i]`
/// otherwise. `class_counts[i]` holds the `[decline, approve]` training
/// sample counts observed at node `i`. Child indices always point forward in
/// the arrays, which load-time validation enforces.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeNodes {
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub left: Vec<i32>,
    pub right: Vec<i32>,
    pub class_counts: Vec<[f64; 2]>,
}

impl TreeNodes {
    fn vote(&self, row: &[f64]) -> ClassLabel {
        let mut node = 0usize;
        loop {
            let feature = self.feature[node];
            if feature < 0 {
                let [decline, approve] = self.class_counts[node];
                return if approve > decline {
                    ClassLabel::Approve
                } else {
                    ClassLabel::Decline
                };
            }
            node = if row[feature as usize] <= self.threshold[node] {
                self.left[node] as usize
            } else {
                self.right[node] as usize
            };
        }
    }
}

/// Serialized forest exported by the external training pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct ForestArtifact {
    pub trees: Vec<TreeNodes>,
}

/// Inference-only adapter over an exported random-forest artifact. The model
/// is immutable after load and safe to share across evaluations.
#[derive(Debug)]
pub struct RandomForestModel {
    schema: ModelSchema,
    trees: Vec<TreeNodes>,
}

impl RandomForestModel {
    pub fn new(schema: ModelSchema, artifact: ForestArtifact) -> Result<Self, ModelError> {
        validate(&schema, &artifact)?;
        Ok(Self {
            schema,
            trees: artifact.trees,
        })
    }

    /// Load the column list and forest artifact from their exported JSON
    /// files. Any failure is fatal to the caller: a service must not start
    /// with a classifier it cannot trust.
    pub fn from_paths<P: AsRef<Path>, Q: AsRef<Path>>(
        columns: P,
        artifact: Q,
    ) -> Result<Self, ModelError> {
        let schema = ModelSchema::from_path(columns)?;
        let path = artifact.as_ref();
        let file = File::open(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ForestArtifact = serde_json::from_reader(file)?;
        Self::new(schema, artifact)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }
}

fn validate(schema: &ModelSchema, artifact: &ForestArtifact) -> Result<(), ModelError> {
    if artifact.trees.is_empty() {
        return Err(ModelError::Malformed("forest has no trees".to_string()));
    }

    for (index, tree) in artifact.trees.iter().enumerate() {
        let nodes = tree.feature.len();
        if nodes == 0 {
            return Err(ModelError::Malformed(format!("tree {index} has no nodes")));
        }
        if tree.threshold.len() != nodes
            || tree.left.len() != nodes
            || tree.right.len() != nodes
            || tree.class_counts.len() != nodes
        {
            return Err(ModelError::Malformed(format!(
                "tree {index} has inconsistent node arrays"
            )));
        }

        for node in 0..nodes {
            let feature = tree.feature[node];
            if feature < 0 {
                continue;
            }
            if feature as usize >= schema.len() {
                return Err(ModelError::Malformed(format!(
                    "tree {index} node {node} references feature {feature} outside the schema"
                )));
            }
            for child in [tree.left[node], tree.right[node]] {
                // Forward-only children also guarantee traversal terminates.
                if child <= node as i32 || child as usize >= nodes {
                    return Err(ModelError::Malformed(format!(
                        "tree {index} node {node} has out-of-range child {child}"
                    )));
                }
            }
        }
    }

    Ok(())
}

impl Classifier for RandomForestModel {
    fn schema(&self) -> &ModelSchema {
        &self.schema
    }

    fn predict(&self, features: &FeatureFrame) -> Result<ClassLabel, ModelError> {
        let row = self.schema.aligned_row(features);
        let approvals = self
            .trees
            .iter()
            .filter(|tree| tree.vote(&row).approves())
            .count();

        // Majority vote; ties resolve to the conservative verdict.
        Ok(if approvals * 2 > self.trees.len() {
            ClassLabel::Approve
        } else {
            ClassLabel::Decline
        })
    }
}
