//! Clasificador de categorías.
//!
//! Todo `Value` pertenece exactamente a una de las 8 categorías; la
//! clasificación es total y no falla.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Sequence,
    Boolean,
    Float,
    Integer,
    Null,
    Object,
    Handle,
    Text,
}

impl Category {
    pub const ALL: [Category; 8] = [Category::Sequence,
                                    Category::Boolean,
                                    Category::Float,
                                    Category::Integer,
                                    Category::Null,
                                    Category::Object,
                                    Category::Handle,
                                    Category::Text];

    pub fn name(self) -> &'static str {
        match self {
            Category::Sequence => "sequence",
            Category::Boolean => "boolean",
            Category::Float => "float",
            Category::Integer => "integer",
            Category::Null => "null",
            Category::Object => "object",
            Category::Handle => "handle",
            Category::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Devuelve la categoría de `value`.
pub fn classify(value: &Value) -> Category {
    match value {
        Value::Sequence(_) => Category::Sequence,
        Value::Boolean(_) => Category::Boolean,
        Value::Float(_) => Category::Float,
        Value::Integer(_) => Category::Integer,
        Value::Null => Category::Null,
        Value::Object(_) => Category::Object,
        Value::Handle(_) => Category::Handle,
        Value::Text(_) => Category::Text,
    }
}
