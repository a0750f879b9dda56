use fa_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input parse error: {0}")]
    Parse(String),

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON read error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scenario error: {0}")]
    Scenario(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
