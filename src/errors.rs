use comparison_core::ComparisonError;
use thiserror::Error;

/// Errores del binario `comparison`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Uso: {0}")]
    Usage(String),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error de comparación: {0}")]
    Comparison(#[from] ComparisonError),
}

impl AppError {
    /// Código de salida del proceso.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => 2,
            AppError::Json(_) => 3,
            AppError::Comparison(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_variant_format() {
        let err = AppError::Usage("comparison hash <json>".into());
        assert_eq!(err.to_string(), "Uso: comparison hash <json>");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_comparison_variant_from() {
        let err: AppError = ComparisonError::DepthExceeded { limit: 3 }.into();
        assert_eq!(err.exit_code(), 4);
        assert_eq!(err.to_string(), "Error de comparación: nesting depth limit of 3 exceeded");
    }
}
