use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("empty report identifier")]
    EmptyReportId,

    #[error("payload has no assessments")]
    NoAssessments,
}
