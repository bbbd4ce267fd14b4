use thiserror::Error;

use crate::configurationerror::ConfigurationError;
use crate::math::integrate::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    Quadrature(#[from] QuadratureError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("invalid input: {0}")]
    InvalidInput(String)
}

impl StudyError {
    /// study 參數檢查失敗時使用；設定檔載入失敗則維持 `Configuration`。
    pub fn invalid_input(error: ConfigurationError) -> StudyError {
        StudyError::InvalidInput(error.to_string())
    }
}
