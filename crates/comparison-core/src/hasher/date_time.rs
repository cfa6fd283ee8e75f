//! Relación específica para fechas.
//!
//! Dos fechas son equivalentes si representan el mismo instante (segundos
//! unix) en la misma zona horaria (por nombre). Pensada para registrarse en
//! un `ValueHasher` bajo `"DateTime"`; los subtipos (cadena de ancestros que
//! contiene `"DateTime"`) la heredan por resolución.
use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use std::any::Any;

use crate::constants::HashCode;
use crate::contracts::{Equatable, Equivalence, Hasher};
use crate::errors::{ComparisonError, Result};
use crate::value::{NominalType, Object, Value};

/// Nombre nominal de las fechas.
pub const DATE_TIME: &str = "DateTime";

static DATE_TIME_TYPE: Lazy<NominalType> = Lazy::new(|| NominalType::new(DATE_TIME));

/// Fecha con zona horaria con nombre (p.ej. `"America/Sao_Paulo"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeValue {
    nominal_type: NominalType,
    moment: DateTime<FixedOffset>,
    zone: String,
}

impl DateTimeValue {
    pub fn new(moment: DateTime<FixedOffset>, zone: impl Into<String>) -> Self {
        Self::with_type(NominalType::clone(&DATE_TIME_TYPE), moment, zone)
    }

    pub fn utc(moment: DateTime<Utc>) -> Self {
        Self::new(moment.fixed_offset(), "UTC")
    }

    /// Instancia de un subtipo de `DateTime`.
    pub fn with_type(nominal_type: NominalType, moment: DateTime<FixedOffset>, zone: impl Into<String>) -> Self {
        Self { nominal_type,
               moment,
               zone: zone.into() }
    }

    pub fn moment(&self) -> DateTime<FixedOffset> {
        self.moment
    }

    pub fn timestamp(&self) -> i64 {
        self.moment.timestamp()
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl Object for DateTimeValue {
    fn nominal_type(&self) -> &NominalType {
        &self.nominal_type
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn as_date_time(value: &Value) -> Option<&DateTimeValue> {
    value.as_object().and_then(|o| o.downcast_ref::<DateTimeValue>())
}

fn assert_date_time(value: &Value) -> Result<&DateTimeValue> {
    as_date_time(value).ok_or_else(|| ComparisonError::unexpected_type(DATE_TIME, value))
}

/// Primeros 4 bytes (LE) del digest BLAKE3 del nombre de zona.
fn zone_checksum(zone: &str) -> HashCode {
    let digest = blake3::hash(zone.as_bytes());
    let bytes = digest.as_bytes();
    HashCode::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTimeHasher;

impl DateTimeHasher {
    pub fn new() -> Self {
        Self
    }
}

impl Equatable for DateTimeHasher {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn equals(&self, other: &dyn Any) -> bool {
        other.is::<DateTimeHasher>()
    }
}

impl Equivalence for DateTimeHasher {
    /// `left` debe ser una fecha; un `right` de otro tipo no es equivalente.
    fn equivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        let left = assert_date_time(left)?;
        let Some(right) = as_date_time(right) else {
            return Ok(false);
        };
        Ok(left.timestamp() == right.timestamp() && left.zone == right.zone)
    }

    fn as_hasher(&self) -> Option<&dyn Hasher> {
        Some(self)
    }
}

impl Hasher for DateTimeHasher {
    fn hash(&self, value: &Value) -> Result<HashCode> {
        let value = assert_date_time(value)?;
        Ok((value.timestamp() as HashCode).wrapping_add(zone_checksum(&value.zone)))
    }
}
