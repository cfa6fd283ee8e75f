//! Conversión desde `serde_json::Value`.
//!
//! Arrays -> secuencias con claves posicionales; objetos JSON -> secuencias
//! con claves nombradas en orden de documento (`serde_json` se compila con
//! `preserve_order`).
use super::{Key, Value};

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(*b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            serde_json::Value::Array(items) => Value::sequence_of(items.iter().map(Value::from)),
            serde_json::Value::Object(map) => {
                Value::Sequence(map.iter().map(|(k, v)| (Key::name(k.as_str()), Value::from(v))).collect())
            }
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from(&json)
    }
}
