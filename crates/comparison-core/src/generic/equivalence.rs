//! Motor genérico de equivalencia.
//!
//! `dispatch_equivalent` clasifica el valor izquierdo y delega en el método
//! de su categoría pasando el derecho sin clasificar: cada método decide si
//! el derecho es compatible (y devuelve `false` si no lo es).
use crate::constants::DEFAULT_MAX_DEPTH;
use crate::errors::Result;
use crate::value::{Handle, ObjectRef, Sequence, Value};

use super::Depth;

/// Puntos de extensión por categoría. Cada método debe preservar
/// reflexividad, simetría y transitividad; el motor no lo verifica.
pub trait GenericEquivalence {
    /// Límite de anidamiento para secuencias.
    fn max_depth(&self) -> usize {
        DEFAULT_MAX_DEPTH
    }

    fn equivalent_sequence(&self, left: &Sequence, right: &Value, depth: Depth) -> Result<bool>;

    fn equivalent_boolean(&self, left: bool, right: &Value) -> Result<bool>;

    fn equivalent_float(&self, left: f64, right: &Value) -> Result<bool>;

    fn equivalent_integer(&self, left: i64, right: &Value) -> Result<bool>;

    /// El izquierdo es nulo; sólo importa si el derecho también lo es.
    fn equivalent_null(&self, right: &Value) -> Result<bool>;

    fn equivalent_object(&self, left: &ObjectRef, right: &Value) -> Result<bool>;

    fn equivalent_handle(&self, left: &Handle, right: &Value) -> Result<bool>;

    fn equivalent_text(&self, left: &str, right: &Value) -> Result<bool>;
}

/// Delega `equivalent(left, right)` en el método de la categoría de `left`.
pub fn dispatch_equivalent<E>(engine: &E, left: &Value, right: &Value, depth: Depth) -> Result<bool>
    where E: GenericEquivalence + ?Sized
{
    match left {
        Value::Sequence(sequence) => engine.equivalent_sequence(sequence, right, depth),
        Value::Boolean(b) => engine.equivalent_boolean(*b, right),
        Value::Float(f) => engine.equivalent_float(*f, right),
        Value::Integer(i) => engine.equivalent_integer(*i, right),
        Value::Null => engine.equivalent_null(right),
        Value::Object(object) => engine.equivalent_object(object, right),
        Value::Handle(handle) => engine.equivalent_handle(handle, right),
        Value::Text(text) => engine.equivalent_text(text, right),
    }
}
