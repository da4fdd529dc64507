use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use lending_ai::config::{AppConfig, ModelConfig};
use lending_ai::error::AppError;
use lending_ai::model::RandomForestModel;
use lending_ai::screening::{read_applications_from_path, LoanDecisionService};

use crate::cli::ScoreArgs;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the frozen classifier named by the configuration. Any failure here
/// is a deployment fault and aborts startup.
pub(crate) fn load_classifier(config: &ModelConfig) -> Result<RandomForestModel, AppError> {
    let model = RandomForestModel::from_paths(&config.columns_path, &config.artifact_path)?;
    tracing::info!(trees = model.tree_count(), "classifier artifact loaded");
    Ok(model)
}

/// Score a CSV export offline with the configured classifier.
pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let mut model_config = config.model;
    if let Some(columns) = args.columns {
        model_config.columns_path = columns;
    }
    if let Some(artifact) = args.artifact {
        model_config.artifact_path = artifact;
    }

    let classifier = Arc::new(load_classifier(&model_config)?);
    let service = LoanDecisionService::new(classifier);

    let applications = read_applications_from_path(&args.input)?;
    let outcomes = service.decide_batch(&applications)?;

    for (index, outcome) in outcomes.iter().enumerate() {
        println!("application {:>4}: {}", index + 1, outcome.summary());
    }

    Ok(())
}
