//! Estrategias concretas.
//!
//! - `identity`: semántica nativa (valor para primitivos, identidad para
//!   objetos y handles) y los algoritmos de hash canónicos.
//! - `value`: identidad + relaciones registradas por tipo nominal y
//!   delegación en objetos auto-descriptivos.
//! - `date_time`: relación específica para fechas.

pub mod date_time;
pub mod identity;
pub mod value;

pub use date_time::{DateTimeHasher, DateTimeValue};
pub use identity::IdentityHasher;
pub use value::ValueHasher;
