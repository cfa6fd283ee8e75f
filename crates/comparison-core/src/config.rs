//! Configuración de las estrategias.
//!
//! Se puede construir en código o cargar del entorno (`.env` incluido):
//! - `COMPARISON_MAX_DEPTH`: límite de anidamiento de secuencias (entero > 0).
//! - `COMPARISON_OVERRIDES`: relaciones por tipo nominal, `Tipo=relacion`
//!   separadas por comas (p.ej. `DateTime=date_time`).
use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;

use crate::constants::DEFAULT_MAX_DEPTH;
use crate::contracts::Equivalence;
use crate::errors::{ComparisonError, Result};
use crate::hasher::DateTimeHasher;

pub const ENV_MAX_DEPTH: &str = "COMPARISON_MAX_DEPTH";
pub const ENV_OVERRIDES: &str = "COMPARISON_OVERRIDES";

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv(); // ignora error si no existe .env
});

/// Relaciones incluidas que se pueden nombrar desde la configuración.
///
/// Un subtipo no puede registrar una relación distinta de la de su ancestro:
/// la comparación entre ambos resolvería relaciones diferentes según el lado.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    DateTime,
}

impl RelationKind {
    pub fn instantiate(self) -> Arc<dyn Equivalence> {
        match self {
            RelationKind::DateTime => Arc::new(DateTimeHasher),
        }
    }
}

impl FromStr for RelationKind {
    type Err = ComparisonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "date_time" => Ok(RelationKind::DateTime),
            other => Err(ComparisonError::InvalidConfig(format!("unknown relation \"{other}\""))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HasherConfig {
    pub max_depth: usize,
    pub overrides: BTreeMap<String, RelationKind>,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               overrides: BTreeMap::new() }
    }
}

impl HasherConfig {
    pub fn from_env() -> Result<Self> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de `lookup`; variables ausentes
    /// toman el valor por defecto.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
        where F: Fn(&str) -> Option<String>
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(ENV_MAX_DEPTH) {
            config.max_depth = match raw.trim().parse::<usize>() {
                Ok(depth) if depth > 0 => depth,
                _ => return Err(ComparisonError::InvalidConfig(format!("{ENV_MAX_DEPTH} must be a positive integer, got \"{raw}\""))),
            };
        }
        if let Some(raw) = lookup(ENV_OVERRIDES) {
            config.overrides = Self::parse_overrides(&raw)?;
        }
        debug!("config:loaded max_depth={} overrides={}", config.max_depth, config.overrides.len());
        Ok(config)
    }

    /// Parsea `Tipo=relacion[,Tipo=relacion...]`. Entradas vacías se ignoran;
    /// un tipo repetido es un error.
    pub fn parse_overrides(raw: &str) -> Result<BTreeMap<String, RelationKind>> {
        let mut overrides: BTreeMap<String, RelationKind> = BTreeMap::new();
        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((type_name, kind)) = entry.split_once('=') else {
                return Err(ComparisonError::InvalidConfig(format!("expected Type=relation, got \"{entry}\"")));
            };
            let type_name = type_name.trim();
            if type_name.is_empty() {
                return Err(ComparisonError::InvalidConfig(format!("missing type name in \"{entry}\"")));
            }
            if overrides.insert(type_name.to_string(), kind.parse::<RelationKind>()?).is_some() {
                return Err(ComparisonError::InvalidConfig(format!("type \"{type_name}\" configured twice")));
            }
        }
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = HasherConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, HasherConfig::default());
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn overrides_and_depth_are_read() {
        let config = HasherConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "32"),
                                                        (ENV_OVERRIDES, " DateTime = date_time , LegacyDate=date_time,")]))
                     .unwrap();
        assert_eq!(config.max_depth, 32);
        assert_eq!(config.overrides.get("DateTime"), Some(&RelationKind::DateTime));
        assert_eq!(config.overrides.get("LegacyDate"), Some(&RelationKind::DateTime));
    }

    #[test]
    fn malformed_entries_are_rejected() {
        for raw in ["DateTime", "=date_time", "DateTime=fuzzy", "DateTime=identity", "A=date_time,A=date_time"] {
            assert!(matches!(HasherConfig::parse_overrides(raw), Err(ComparisonError::InvalidConfig(_))), "{raw}");
        }
        assert!(HasherConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "0")])).is_err());
        assert!(HasherConfig::from_lookup(lookup(&[(ENV_MAX_DEPTH, "deep")])).is_err());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: HasherConfig = serde_json::from_str(r#"{"overrides": {"DateTime": "date_time"}}"#).unwrap();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.overrides.len(), 1);
    }
}
