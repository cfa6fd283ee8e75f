//! Contratos públicos: relaciones de equivalencia, hashers y las dos
//! capacidades auto-descriptivas que un valor puede declarar.
use std::any::Any;
use std::fmt;

use crate::constants::HashCode;
use crate::errors::Result;
use crate::value::Value;

/// Capacidad "se compara con otra instancia de su misma clase".
///
/// `equals` debe ser reflexiva, simétrica y transitiva. La implementación
/// típica hace `other.downcast_ref::<Self>()` y compara campos.
pub trait Equatable {
    fn as_any(&self) -> &dyn Any;

    fn equals(&self, other: &dyn Any) -> bool;
}

/// Capacidad "produce su propio hash". Quien la implementa debe garantizar
/// que `equals(a, b)` implica `a.hash_code() == b.hash_code()`.
pub trait Hashable: Equatable {
    fn hash_code(&self) -> HashCode;
}

/// Relación de equivalencia sobre `Value`, genérica o específica de un tipo.
///
/// Las relaciones son a su vez `Equatable`: dos relaciones iguales deciden
/// lo mismo para cualquier par de valores.
pub trait Equivalence: Equatable + Send + Sync + fmt::Debug {
    fn equivalent(&self, left: &Value, right: &Value) -> Result<bool>;

    /// `Some` si la relación también sabe producir hashes consistentes.
    fn as_hasher(&self) -> Option<&dyn Hasher> {
        None
    }
}

/// Relación de equivalencia + función de hash.
///
/// Invariante: `equivalent(x, y) == Ok(true)` implica `hash(x) == hash(y)`.
pub trait Hasher: Equivalence {
    fn hash(&self, value: &Value) -> Result<HashCode>;
}
