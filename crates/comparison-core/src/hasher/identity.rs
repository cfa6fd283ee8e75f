//! Estrategia de identidad.
//!
//! Las funciones libres de este módulo son los algoritmos canónicos; otras
//! estrategias las reutilizan para las categorías que no redefinen
//! (`ValueHasher` hereda todo salvo objetos). Las funciones recursivas
//! reciben la estrategia que las invoca, de modo que los elementos anidados
//! se comparan con esa misma estrategia.
//!
//! Todo el plegado usa aritmética envolvente de 32 bits.
use std::any::Any;

use crate::constants::{HashCode, HASH_FALSE, HASH_HANDLE, HASH_MULTIPLIER, HASH_NULL, HASH_OBJECT, HASH_SEQUENCE,
                       HASH_TEXT, HASH_TRUE};
use crate::contracts::{Equatable, Equivalence, Hasher};
use crate::errors::Result;
use crate::generic::{dispatch_equivalent, dispatch_hash, Depth, GenericEquivalence, GenericHasher};
use crate::value::{Handle, ObjectRef, Sequence, Value};

/// Hash polinomial: `h = h * 31 + byte` sobre los bytes UTF-8, con semilla
/// `HASH_TEXT`. El texto vacío devuelve la semilla.
pub fn hash_text(text: &str) -> HashCode {
    text.bytes().fold(HASH_TEXT, |hash, byte| {
        hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(HashCode::from(byte))
    })
}

/// Patrón de bits IEEE-754 de precisión simple reinterpretado como entero
/// con signo. `-0.0` se normaliza a `+0.0` porque ambos son equivalentes.
pub fn hash_float(value: f64) -> HashCode {
    let single = if value == 0.0 { 0.0_f32 } else { value as f32 };
    single.to_bits() as HashCode
}

/// El propio entero, truncado a 32 bits.
pub fn hash_integer(value: i64) -> HashCode {
    value as HashCode
}

pub fn hash_boolean(value: bool) -> HashCode {
    if value { HASH_TRUE } else { HASH_FALSE }
}

pub fn hash_handle(handle: &Handle) -> HashCode {
    HASH_HANDLE.wrapping_mul((handle.id() as HashCode).wrapping_add(1))
}

/// Hash de identidad de una instancia: depende sólo de su identificador.
pub fn hash_object(object: &ObjectRef) -> HashCode {
    HASH_OBJECT.wrapping_mul(hash_text(&object.instance_key()))
}

pub fn equivalent_object(left: &ObjectRef, right: &Value) -> bool {
    matches!(right, Value::Object(r) if left.same_instance(r))
}

/// Misma longitud y, en orden de iteración, misma clave en la misma
/// posición con valores equivalentes según `engine`.
pub fn equivalent_sequence<E>(engine: &E, left: &Sequence, right: &Value, depth: Depth) -> Result<bool>
    where E: GenericEquivalence + ?Sized
{
    let Value::Sequence(right) = right else {
        return Ok(false);
    };
    if left.len() != right.len() {
        return Ok(false);
    }
    if left.is_empty() {
        return Ok(true);
    }
    let nested = depth.descend(engine.max_depth())?;
    for ((left_key, left_value), (right_key, right_value)) in left.iter().zip(right.iter()) {
        if left_key != right_key || !dispatch_equivalent(engine, left_value, right_value, nested)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// `h = h * 31 + (hash_text(clave) ^ hash(valor))` con semilla
/// `HASH_SEQUENCE`; la secuencia vacía devuelve la semilla.
pub fn hash_sequence<H>(hasher: &H, value: &Sequence, depth: Depth) -> Result<HashCode>
    where H: GenericHasher + ?Sized
{
    if value.is_empty() {
        return Ok(HASH_SEQUENCE);
    }
    let nested = depth.descend(hasher.max_depth())?;
    value.iter().try_fold(HASH_SEQUENCE, |hash, (key, item)| {
        let key_hash = hash_text(&key.as_text());
        let item_hash = dispatch_hash(hasher, item, nested)?;
        Ok(hash.wrapping_mul(HASH_MULTIPLIER).wrapping_add(key_hash ^ item_hash))
    })
}

/// Equivalencia por identidad: igualdad nativa para primitivos, misma
/// instancia para objetos y handles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentityHasher;

impl IdentityHasher {
    pub fn new() -> Self {
        Self
    }
}

impl GenericEquivalence for IdentityHasher {
    fn equivalent_sequence(&self, left: &Sequence, right: &Value, depth: Depth) -> Result<bool> {
        equivalent_sequence(self, left, right, depth)
    }

    fn equivalent_boolean(&self, left: bool, right: &Value) -> Result<bool> {
        Ok(matches!(right, Value::Boolean(r) if *r == left))
    }

    fn equivalent_float(&self, left: f64, right: &Value) -> Result<bool> {
        Ok(matches!(right, Value::Float(r) if *r == left))
    }

    fn equivalent_integer(&self, left: i64, right: &Value) -> Result<bool> {
        Ok(matches!(right, Value::Integer(r) if *r == left))
    }

    fn equivalent_null(&self, right: &Value) -> Result<bool> {
        Ok(right.is_null())
    }

    fn equivalent_object(&self, left: &ObjectRef, right: &Value) -> Result<bool> {
        Ok(equivalent_object(left, right))
    }

    fn equivalent_handle(&self, left: &Handle, right: &Value) -> Result<bool> {
        Ok(matches!(right, Value::Handle(r) if r == left))
    }

    fn equivalent_text(&self, left: &str, right: &Value) -> Result<bool> {
        Ok(matches!(right, Value::Text(r) if r == left))
    }
}

impl GenericHasher for IdentityHasher {
    fn hash_sequence(&self, value: &Sequence, depth: Depth) -> Result<HashCode> {
        hash_sequence(self, value, depth)
    }

    fn hash_boolean(&self, value: bool) -> Result<HashCode> {
        Ok(hash_boolean(value))
    }

    fn hash_float(&self, value: f64) -> Result<HashCode> {
        Ok(hash_float(value))
    }

    fn hash_integer(&self, value: i64) -> Result<HashCode> {
        Ok(hash_integer(value))
    }

    fn hash_null(&self) -> Result<HashCode> {
        Ok(HASH_NULL)
    }

    fn hash_object(&self, value: &ObjectRef) -> Result<HashCode> {
        Ok(hash_object(value))
    }

    fn hash_handle(&self, value: &Handle) -> Result<HashCode> {
        Ok(hash_handle(value))
    }

    fn hash_text(&self, value: &str) -> Result<HashCode> {
        Ok(hash_text(value))
    }
}

impl Equatable for IdentityHasher {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn Any) -> bool {
        other.is::<IdentityHasher>()
    }
}

impl Equivalence for IdentityHasher {
    fn equivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        dispatch_equivalent(self, left, right, Depth::ROOT)
    }

    fn as_hasher(&self) -> Option<&dyn Hasher> {
        Some(self)
    }
}

impl Hasher for IdentityHasher {
    fn hash(&self, value: &Value) -> Result<HashCode> {
        dispatch_hash(self, value, Depth::ROOT)
    }
}
