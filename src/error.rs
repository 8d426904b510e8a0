use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResumeLensError {
    #[error("Invalid file type: expected a PDF, got {0}")]
    InvalidFileType(String),

    #[error("File too large: {0:.2} MB exceeds the 10 MB limit")]
    FileTooLarge(f64),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Invalid analysis record: {0}")]
    InvalidRecord(String),
}

impl From<ResumeLensError> for String {
    fn from(err: ResumeLensError) -> Self {
        err.to_string()
    }
}
