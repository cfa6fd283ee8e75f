//! comparison-core: equivalencia y hashing de valores dinámicos.
//!
//! - `value`: modelo de valores (8 categorías) y objetos con tipo nominal.
//! - `category`: clasificador.
//! - `generic`: motores que delegan por categoría.
//! - `hasher`: estrategias de identidad, de valor y de fechas.
//! - `config`: configuración (entorno / serde) de `ValueHasher`.
pub mod category;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod errors;
pub mod generic;
pub mod hasher;
pub mod value;

pub use category::{classify, Category};
pub use config::{HasherConfig, RelationKind};
pub use constants::HashCode;
pub use contracts::{Equatable, Equivalence, Hashable, Hasher};
pub use errors::{ComparisonError, Result};
pub use generic::{GenericEquivalence, GenericHasher};
pub use hasher::{DateTimeHasher, DateTimeValue, IdentityHasher, ValueHasher};
pub use value::{Handle, Key, NominalType, Object, ObjectRef, Sequence, Value};
