//! Comparison
//!
//! Este crate actúa como fachada del workspace:
//! - Re-exporta `comparison_core` (valores, estrategias, configuración).
//! - Expone `errors` y los comandos del binario `comparison`.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod errors;

pub use comparison_core::*;

use log::debug;

use errors::AppError;

const USAGE: &str = "comparison hash <json> | comparison equivalent <json> <json>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hash(String),
    Equivalent(String, String),
}

impl Command {
    /// Interpreta los argumentos (sin el nombre del programa).
    pub fn parse(args: &[String]) -> std::result::Result<Self, AppError> {
        match args {
            [cmd, doc] if cmd == "hash" => Ok(Command::Hash(doc.clone())),
            [cmd, left, right] if cmd == "equivalent" => Ok(Command::Equivalent(left.clone(), right.clone())),
            _ => Err(AppError::Usage(USAGE.to_string())),
        }
    }
}

/// `ValueHasher` configurado desde el entorno (`.env` incluido).
pub fn hasher_from_env() -> std::result::Result<ValueHasher, AppError> {
    let config = HasherConfig::from_env()?;
    Ok(ValueHasher::from_config(&config))
}

pub fn parse_value(json: &str) -> std::result::Result<Value, AppError> {
    let document: serde_json::Value = serde_json::from_str(json)?;
    Ok(Value::from(document))
}

/// Ejecuta `command` y devuelve la salida a imprimir.
pub fn run(command: &Command, hasher: &ValueHasher) -> std::result::Result<String, AppError> {
    debug!("run:start command={command:?}");
    let output = match command {
        Command::Hash(doc) => hasher.hash(&parse_value(doc)?)?.to_string(),
        Command::Equivalent(left, right) => {
            hasher.equivalent(&parse_value(left)?, &parse_value(right)?)?.to_string()
        }
    };
    debug!("run:done output={output}");
    Ok(output)
}
