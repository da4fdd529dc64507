use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ModelError;

/// Named feature row produced by the encoder and consumed by the classifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFrame(BTreeMap<String, f64>);

impl FeatureFrame {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Ordered column set the frozen classifier was trained on. Loaded from the
/// JSON column list exported alongside the model artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelSchema {
    columns: Vec<String>,
}

impl ModelSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let schema: Self = serde_json::from_reader(reader)?;
        if schema.columns.is_empty() {
            return Err(ModelError::Malformed("schema has no columns".to_string()));
        }
        Ok(schema)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Restrict a frame to exactly the schema columns: absent columns are
    /// filled with 0, names outside the schema are discarded. The classifier
    /// aligns by name, never by position, so this runs before every predict.
    pub fn project(&self, frame: &FeatureFrame) -> FeatureFrame {
        let mut projected = FeatureFrame::new();
        for column in &self.columns {
            projected.set(column, frame.get(column).unwrap_or(0.0));
        }
        projected
    }

    /// Values in schema order, for models that address features by index.
    pub fn aligned_row(&self, frame: &FeatureFrame) -> Vec<f64> {
        self.columns
            .iter()
            .map(|column| frame.get(column).unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> ModelSchema {
        ModelSchema::new(vec![
            "alpha".to_string(),
            "beta".to_string(),
            "gamma".to_string(),
        ])
    }

    #[test]
    fn project_fills_missing_columns_with_zero() {
        let mut frame = FeatureFrame::new();
        frame.set("alpha", 1.5);

        let projected = schema().project(&frame);

        assert_eq!(projected.get("alpha"), Some(1.5));
        assert_eq!(projected.get("beta"), Some(0.0));
        assert_eq!(projected.get("gamma"), Some(0.0));
    }

    #[test]
    fn project_discards_columns_outside_the_schema() {
        let mut frame = FeatureFrame::new();
        frame.set("alpha", 1.0);
        frame.set("rogue", 99.0);

        let projected = schema().project(&frame);

        assert_eq!(projected.len(), 3);
        assert_eq!(projected.get("rogue"), None);
    }

    #[test]
    fn project_is_idempotent() {
        let mut frame = FeatureFrame::new();
        frame.set("beta", 2.0);
        frame.set("rogue", 7.0);

        let schema = schema();
        let once = schema.project(&frame);
        let twice = schema.project(&once);

        assert_eq!(once, twice);
    }

    #[test]
    fn aligned_row_follows_schema_order() {
        let mut frame = FeatureFrame::new();
        frame.set("gamma", 3.0);
        frame.set("alpha", 1.0);

        assert_eq!(schema().aligned_row(&frame), vec![1.0, 0.0, 3.0]);
    }

    #[test]
    fn from_reader_rejects_empty_column_lists() {
        let error = ModelSchema::from_reader("[]".as_bytes()).expect_err("empty schema rejected");
        assert!(matches!(error, ModelError::Malformed(_)));
    }
}
