//! Motor genérico de hashing: una relación de equivalencia más una función
//! de hash, ambas consistentes (`equivalent(x, y)` implica
//! `hash(x) == hash(y)`).
use crate::constants::HashCode;
use crate::errors::Result;
use crate::value::{Handle, ObjectRef, Sequence, Value};

use super::{Depth, GenericEquivalence};

pub trait GenericHasher: GenericEquivalence {
    fn hash_sequence(&self, value: &Sequence, depth: Depth) -> Result<HashCode>;

    fn hash_boolean(&self, value: bool) -> Result<HashCode>;

    fn hash_float(&self, value: f64) -> Result<HashCode>;

    fn hash_integer(&self, value: i64) -> Result<HashCode>;

    fn hash_null(&self) -> Result<HashCode>;

    fn hash_object(&self, value: &ObjectRef) -> Result<HashCode>;

    fn hash_handle(&self, value: &Handle) -> Result<HashCode>;

    fn hash_text(&self, value: &str) -> Result<HashCode>;
}

/// Delega `hash(value)` en el método de la categoría de `value`.
pub fn dispatch_hash<H>(hasher: &H, value: &Value, depth: Depth) -> Result<HashCode>
    where H: GenericHasher + ?Sized
{
    match value {
        Value::Sequence(sequence) => hasher.hash_sequence(sequence, depth),
        Value::Boolean(b) => hasher.hash_boolean(*b),
        Value::Float(f) => hasher.hash_float(*f),
        Value::Integer(i) => hasher.hash_integer(*i),
        Value::Null => hasher.hash_null(),
        Value::Object(object) => hasher.hash_object(object),
        Value::Handle(handle) => hasher.hash_handle(handle),
        Value::Text(text) => hasher.hash_text(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    /// Devuelve el índice de la categoría como hash; ignora la equivalencia.
    struct ByCategory;

    impl GenericEquivalence for ByCategory {
        fn equivalent_sequence(&self, _: &Sequence, _: &Value, _: Depth) -> Result<bool> { Ok(false) }
        fn equivalent_boolean(&self, _: bool, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_float(&self, _: f64, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_integer(&self, _: i64, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_null(&self, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_object(&self, _: &ObjectRef, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_handle(&self, _: &Handle, _: &Value) -> Result<bool> { Ok(false) }
        fn equivalent_text(&self, _: &str, _: &Value) -> Result<bool> { Ok(false) }
    }

    impl GenericHasher for ByCategory {
        fn hash_sequence(&self, _: &Sequence, _: Depth) -> Result<HashCode> { Ok(0) }
        fn hash_boolean(&self, _: bool) -> Result<HashCode> { Ok(1) }
        fn hash_float(&self, _: f64) -> Result<HashCode> { Ok(2) }
        fn hash_integer(&self, _: i64) -> Result<HashCode> { Ok(3) }
        fn hash_null(&self) -> Result<HashCode> { Ok(4) }
        fn hash_object(&self, _: &ObjectRef) -> Result<HashCode> { Ok(5) }
        fn hash_handle(&self, _: &Handle) -> Result<HashCode> { Ok(6) }
        fn hash_text(&self, _: &str) -> Result<HashCode> { Ok(7) }
    }

    #[test]
    fn routes_every_category_to_its_method() {
        let values = vec![Value::sequence_of([Value::from(1), Value::from(2), Value::from(3)]),
                          Value::from(true),
                          Value::from(1.5),
                          Value::from(10),
                          Value::Null,
                          Value::Handle(Handle::allocate("stream")),
                          Value::from("foo")];
        for value in &values {
            let code = dispatch_hash(&ByCategory, value, Depth::ROOT).expect("infallible");
            let expected = Category::ALL.iter().position(|c| *c == value.category()).expect("known");
            assert_eq!(code as usize, expected);
        }
    }
}
