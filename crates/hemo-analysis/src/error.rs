use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("batch of {size} reports exceeds the limit of {limit}")]
    BatchTooLarge { size: usize, limit: usize },

    #[error("report {0} was already analysed in this session")]
    DuplicateReport(Uuid),
}
