use std::io::Read;
use std::path::Path;

use super::domain::LoanApplication;
use super::intake::{IntakeGuard, IntakeViolation, LoanApplicationForm};

/// Errors raised while reading a CSV export of application forms.
#[derive(Debug, thiserror::Error)]
pub enum BatchScoreError {
    #[error("failed to read application export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {violation}")]
    Intake {
        row: usize,
        #[source]
        violation: IntakeViolation,
    },
}

/// Read a header-addressed CSV export through the intake guard. Rows are
/// numbered from 1 so a rejected export points at the offending line.
pub fn read_applications<R: Read>(reader: R) -> Result<Vec<LoanApplication>, BatchScoreError> {
    let guard = IntakeGuard;
    let mut applications = Vec::new();

    let mut csv_reader = csv::Reader::from_reader(reader);
    for (index, record) in csv_reader.deserialize::<LoanApplicationForm>().enumerate() {
        let form = record?;
        let application = guard
            .application_from_form(form)
            .map_err(|violation| BatchScoreError::Intake {
                row: index + 1,
                violation,
            })?;
        applications.push(application);
    }

    Ok(applications)
}

pub fn read_applications_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<LoanApplication>, BatchScoreError> {
    let file = std::fs::File::open(path)?;
    read_applications(file)
}
