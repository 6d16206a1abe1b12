use thiserror::Error;

/// 使用者輸入錯誤，訊息即為直接顯示給使用者的文字
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid time period.")]
    EmptyInput,

    #[error("Please enter a valid year.")]
    InvalidYear,
}

#[derive(Error, Debug)]
pub enum TravelerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl TravelerError {
    /// 是否為使用者輸入錯誤 (可重新輸入)
    pub fn is_input_error(&self) -> bool {
        matches!(self, TravelerError::Input(_))
    }
}

pub type Result<T> = std::result::Result<T, TravelerError>;
