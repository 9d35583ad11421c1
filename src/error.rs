use thiserror::Error;

#[derive(Error, Debug)]
pub enum LottoError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Draw service answered HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Cell {index} only accepts a single digit 0-9, got '{input}'")]
    InvalidDigit { index: usize, input: String },

    #[error("Digit {digit} is already placed in another visible cell")]
    DuplicateDigit { digit: u8 },

    #[error("Cell {0} is hidden by the visibility mask")]
    HiddenCell(usize),

    #[error("Cell index {0} is outside the 4x4 grid")]
    CellOutOfRange(usize),
}

impl LottoError {
    /// True for errors caused by user input (safe to show inline and retry).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LottoError::Validation(_)
                | LottoError::InvalidDigit { .. }
                | LottoError::DuplicateDigit { .. }
                | LottoError::HiddenCell(_)
                | LottoError::CellOutOfRange(_)
        )
    }
}

pub type LtResult<T> = Result<T, LottoError>;
