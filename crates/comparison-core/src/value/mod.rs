//! Modelo de valores dinámicos.
//!
//! Un `Value` pertenece exactamente a una de las 8 categorías de
//! `crate::category::Category`. Los valores pertenecen al llamador: el motor
//! sólo los lee durante una comparación y nunca retiene referencias.
mod handle;
mod json;
mod key;
mod object;

pub use handle::Handle;
pub use key::Key;
pub use object::{NominalType, Object, ObjectRef};

use indexmap::IndexMap;

use crate::category::{classify, Category};

/// Mapa ordenado clave -> valor. El orden de iteración es significativo para
/// la equivalencia y el hash.
pub type Sequence = IndexMap<Key, Value>;

#[derive(Debug, Clone)]
pub enum Value {
    Sequence(Sequence),
    Boolean(bool),
    Float(f64),
    Integer(i64),
    Null,
    Object(ObjectRef),
    Handle(Handle),
    Text(String),
}

impl Value {
    pub fn category(&self) -> Category {
        classify(self)
    }

    /// Nombre usado en diagnósticos: el tipo nominal para objetos, la
    /// categoría para el resto.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Object(object) => object.nominal_type().name(),
            other => other.category().name(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    /// Envuelve `object` como una instancia nueva.
    pub fn object<O: Object>(object: O) -> Self {
        Value::Object(ObjectRef::new(object))
    }

    /// Lista: claves índice `0..n` en el orden dado.
    pub fn sequence_of<I>(items: I) -> Self
        where I: IntoIterator<Item = Value>
    {
        Value::Sequence(items.into_iter()
                             .enumerate()
                             .map(|(i, v)| (Key::from(i), v))
                             .collect())
    }

    /// Secuencia con claves explícitas. Una clave repetida conserva su
    /// posición original y toma el último valor.
    pub fn sequence_from<K, I>(entries: I) -> Self
        where K: Into<Key>,
              I: IntoIterator<Item = (K, Value)>
    {
        Value::Sequence(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Sequence> for Value {
    fn from(value: Sequence) -> Self {
        Value::Sequence(value)
    }
}

impl From<ObjectRef> for Value {
    fn from(value: ObjectRef) -> Self {
        Value::Object(value)
    }
}

impl From<Handle> for Value {
    fn from(value: Handle) -> Self {
        Value::Handle(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_of_assigns_positional_keys() {
        let value = Value::sequence_of([Value::from(1), Value::Null, Value::from(true)]);
        let keys: Vec<Key> = value.as_sequence().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::index(0), Key::index(1), Key::index(2)]);
    }

    #[test]
    fn type_name_falls_back_to_category() {
        assert_eq!(Value::from("x").type_name(), "text");
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(None::<i64>).type_name(), "null");
    }
}
