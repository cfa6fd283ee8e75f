//! Motores genéricos: clasifican el valor y delegan en el método de la
//! categoría correspondiente. Las estrategias concretas (`hasher::*`)
//! implementan esos métodos.

pub mod depth;
pub mod equivalence;
pub mod hasher;

pub use depth::Depth;
pub use equivalence::{dispatch_equivalent, GenericEquivalence};
pub use hasher::{dispatch_hash, GenericHasher};
