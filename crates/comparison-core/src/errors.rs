//! Errores del motor de comparación.
//!
//! Todas las operaciones son puras y deterministas: un error se reporta de
//! forma atómica (no hay resultados parciales) y reintentar no cambia nada.

use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ComparisonError {
    /// El valor recibido no es del tipo que la relación requiere.
    #[error("Expected value of type \"{expected}\", given \"{given}\".")]
    UnexpectedType { expected: String, given: String },
    /// Un objeto se compara a sí mismo (`Equatable`) pero no produce su
    /// propio hash (`Hashable`): no se puede garantizar que el hash sea
    /// consistente con la equivalencia.
    #[error("any object implementing Equatable must also implement Hashable, otherwise the hash code of \"{type_name}\" cannot be kept consistent with its equivalence")]
    NotHashable { type_name: String },
    /// Secuencias anidadas más allá del límite configurado.
    #[error("nesting depth limit of {limit} exceeded")]
    DepthExceeded { limit: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ComparisonError {
    /// Construye un `UnexpectedType` describiendo `given` por su tipo
    /// nominal (objetos) o por su categoría (resto).
    pub fn unexpected_type(expected: impl Into<String>, given: &Value) -> Self {
        Self::UnexpectedType { expected: expected.into(),
                               given: given.type_name().to_string() }
    }
}

pub type Result<T> = std::result::Result<T, ComparisonError>;
