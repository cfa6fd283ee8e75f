//! Profundidad de anidamiento durante el recorrido de secuencias.
use crate::errors::{ComparisonError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth(usize);

impl Depth {
    /// Nivel de la llamada pública (`equivalent` / `hash`).
    pub const ROOT: Depth = Depth(0);

    pub fn level(self) -> usize {
        self.0
    }

    /// Baja un nivel; falla si se supera `limit`.
    pub fn descend(self, limit: usize) -> Result<Depth> {
        let next = self.0 + 1;
        if next > limit {
            return Err(ComparisonError::DepthExceeded { limit });
        }
        Ok(Depth(next))
    }
}
