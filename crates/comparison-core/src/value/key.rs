use std::borrow::Cow;
use std::fmt;

/// Clave de una secuencia.
///
/// Un nombre que es la forma decimal canónica de un entero se normaliza a
/// índice al construirse, así `"7"` y `7` denotan la misma clave. La
/// representación es privada: toda clave pasa por `Key::index` o `Key::name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(Repr);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Repr {
    Index(i64),
    Name(String),
}

impl Key {
    pub fn index(index: i64) -> Self {
        Key(Repr::Index(index))
    }

    pub fn name(name: impl Into<String>) -> Self {
        let name = name.into();
        match canonical_index(&name) {
            Some(index) => Key::index(index),
            None => Key(Repr::Name(name)),
        }
    }

    pub fn as_index(&self) -> Option<i64> {
        match &self.0 {
            Repr::Index(index) => Some(*index),
            Repr::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match &self.0 {
            Repr::Index(_) => None,
            Repr::Name(name) => Some(name),
        }
    }

    /// Forma textual de la clave; es lo que entra en el hash de secuencias.
    pub fn as_text(&self) -> Cow<'_, str> {
        match &self.0 {
            Repr::Index(index) => Cow::Owned(index.to_string()),
            Repr::Name(name) => Cow::Borrowed(name),
        }
    }
}

fn canonical_index(text: &str) -> Option<i64> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == text.len(), // "-0" no es canónico
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical { text.parse().ok() } else { None }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::index(value)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(index) => Key::index(index),
            Err(_) => Key(Repr::Name(value.to_string())),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::name(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::name(value)
    }
}
