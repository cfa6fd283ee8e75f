//! Estrategia de valor.
//!
//! Idéntica a la de identidad salvo para objetos (el resto de categorías se
//! delega tal cual en `IdentityHasher`, y las secuencias recorren sus
//! elementos con esta misma estrategia):
//! 1. un objeto auto-descriptivo (`Equatable`) decide su propia igualdad;
//! 2. si no, se busca una relación registrada para su tipo nominal,
//!    subiendo por la cadena de ancestros;
//! 3. si no hay ninguna, se usa identidad de instancia.
//!
//! El registro es inmutable tras la construcción, así que una instancia se
//! puede compartir entre hilos para uso de sólo lectura.
use log::{debug, trace, warn};
use std::any::Any;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::HasherConfig;
use crate::constants::{HashCode, DEFAULT_MAX_DEPTH, HASH_OBJECT};
use crate::contracts::{Equatable, Equivalence, Hasher};
use crate::errors::{ComparisonError, Result};
use crate::generic::{dispatch_equivalent, dispatch_hash, Depth, GenericEquivalence, GenericHasher};
use crate::value::{Handle, NominalType, Object, ObjectRef, Sequence, Value};

use super::identity::{self, IdentityHasher};

#[derive(Debug, Clone)]
pub struct ValueHasher {
    equivalences: BTreeMap<String, Arc<dyn Equivalence>>,
    max_depth: usize,
}

impl ValueHasher {
    /// Crea la estrategia con un registro tipo nominal -> relación.
    pub fn new<I, S>(equivalences: I) -> Self
        where I: IntoIterator<Item = (S, Arc<dyn Equivalence>)>,
              S: Into<String>
    {
        Self { equivalences: equivalences.into_iter().map(|(t, r)| (t.into(), r)).collect(),
               max_depth: DEFAULT_MAX_DEPTH }
    }

    pub fn from_config(config: &HasherConfig) -> Self {
        let equivalences = config.overrides
                                 .iter()
                                 .map(|(type_name, kind)| (type_name.clone(), kind.instantiate()));
        debug!("value_hasher:from_config overrides={} max_depth={}",
               config.overrides.len(),
               config.max_depth);
        Self::new(equivalences).with_max_depth(config.max_depth)
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = limit;
        self
    }

    pub fn equivalences(&self) -> &BTreeMap<String, Arc<dyn Equivalence>> {
        &self.equivalences
    }

    /// Relación registrada para `nominal_type`: coincidencia exacta o, si no,
    /// la del ancestro más cercano que tenga una.
    pub fn resolve(&self, nominal_type: &NominalType) -> Option<&dyn Equivalence> {
        if self.equivalences.is_empty() {
            return None;
        }
        for type_name in nominal_type.lineage() {
            if let Some(relation) = self.equivalences.get(type_name) {
                debug!("resolve:hit type={} via={type_name}", nominal_type.name());
                return Some(relation.as_ref());
            }
        }
        trace!("resolve:miss type={}", nominal_type.name());
        None
    }
}

impl Default for ValueHasher {
    fn default() -> Self {
        Self::new(std::iter::empty::<(String, Arc<dyn Equivalence>)>())
    }
}

/// Un `Hashable` también se compara a sí mismo aunque no exponga
/// `as_equatable`.
fn compares_itself(object: &dyn Object) -> bool {
    object.as_equatable().is_some() || object.as_hashable().is_some()
}

fn self_equals(left: &dyn Object, right: &dyn Object) -> bool {
    match (left.as_equatable(), left.as_hashable()) {
        (Some(equatable), _) => equatable.equals(right.as_any()),
        (None, Some(hashable)) => hashable.equals(right.as_any()),
        (None, None) => false,
    }
}

impl GenericEquivalence for ValueHasher {
    fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn equivalent_sequence(&self, left: &Sequence, right: &Value, depth: Depth) -> Result<bool> {
        identity::equivalent_sequence(self, left, right, depth)
    }

    fn equivalent_boolean(&self, left: bool, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_boolean(left, right)
    }

    fn equivalent_float(&self, left: f64, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_float(left, right)
    }

    fn equivalent_integer(&self, left: i64, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_integer(left, right)
    }

    fn equivalent_null(&self, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_null(right)
    }

    fn equivalent_object(&self, left: &ObjectRef, right: &Value) -> Result<bool> {
        let right_object = right.as_object();
        let left_compares = compares_itself(&**left);
        let right_compares = right_object.is_some_and(|r| compares_itself(&**r));

        if left_compares != right_compares {
            return Ok(false);
        }
        if let (true, Some(right_object)) = (left_compares, right_object) {
            return Ok(self_equals(&**left, &**right_object));
        }

        if let Some(relation) = self.resolve(left.nominal_type()) {
            return relation.equivalent(&Value::Object(left.clone()), right);
        }
        if let Some(right_object) = right_object {
            if let Some(relation) = self.resolve(right_object.nominal_type()) {
                return relation.equivalent(right, &Value::Object(left.clone()));
            }
        }

        Ok(identity::equivalent_object(left, right))
    }

    fn equivalent_handle(&self, left: &Handle, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_handle(left, right)
    }

    fn equivalent_text(&self, left: &str, right: &Value) -> Result<bool> {
        IdentityHasher.equivalent_text(left, right)
    }
}

impl GenericHasher for ValueHasher {
    fn hash_sequence(&self, value: &Sequence, depth: Depth) -> Result<HashCode> {
        identity::hash_sequence(self, value, depth)
    }

    fn hash_boolean(&self, value: bool) -> Result<HashCode> {
        IdentityHasher.hash_boolean(value)
    }

    fn hash_float(&self, value: f64) -> Result<HashCode> {
        IdentityHasher.hash_float(value)
    }

    fn hash_integer(&self, value: i64) -> Result<HashCode> {
        IdentityHasher.hash_integer(value)
    }

    fn hash_null(&self) -> Result<HashCode> {
        IdentityHasher.hash_null()
    }

    fn hash_object(&self, value: &ObjectRef) -> Result<HashCode> {
        if let Some(hashable) = value.as_hashable() {
            return Ok(HASH_OBJECT.wrapping_add(hashable.hash_code()));
        }
        if value.as_equatable().is_some() {
            warn!("hash_object: type={} is Equatable but not Hashable", value.nominal_type().name());
            return Err(ComparisonError::NotHashable { type_name: value.nominal_type().name().to_string() });
        }
        if let Some(hasher) = self.resolve(value.nominal_type()).and_then(|r| r.as_hasher()) {
            let code = hasher.hash(&Value::Object(value.clone()))?;
            return Ok(HASH_OBJECT.wrapping_add(code));
        }
        Ok(identity::hash_object(value))
    }

    fn hash_handle(&self, value: &Handle) -> Result<HashCode> {
        IdentityHasher.hash_handle(value)
    }

    fn hash_text(&self, value: &str) -> Result<HashCode> {
        IdentityHasher.hash_text(value)
    }
}

impl Equatable for ValueHasher {
    fn as_any(&self) -> &dyn Any {
        self
    }

    /// Iguales si el otro también es un `ValueHasher` con los mismos tipos
    /// registrados y relaciones que se declaran iguales entre sí.
    fn equals(&self, other: &dyn Any) -> bool {
        let Some(other) = other.downcast_ref::<ValueHasher>() else {
            return false;
        };
        if std::ptr::eq(self, other) {
            return true;
        }
        self.equivalences.len() == other.equivalences.len()
        && self.equivalences.iter().all(|(type_name, relation)| {
                                       other.equivalences
                                            .get(type_name)
                                            .is_some_and(|theirs| relation.equals(theirs.as_any()))
                                   })
    }
}

impl PartialEq for ValueHasher {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ValueHasher {}

/// Consistente con `equals`: sólo entran los nombres registrados.
impl std::hash::Hash for ValueHasher {
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        state.write_usize(self.equivalences.len());
        for type_name in self.equivalences.keys() {
            state.write(type_name.as_bytes());
            state.write_u8(0xff);
        }
    }
}

impl Equivalence for ValueHasher {
    fn equivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        dispatch_equivalent(self, left, right, Depth::ROOT)
    }

    fn as_hasher(&self) -> Option<&dyn Hasher> {
        Some(self)
    }
}

impl Hasher for ValueHasher {
    fn hash(&self, value: &Value) -> Result<HashCode> {
        dispatch_hash(self, value, Depth::ROOT)
    }
}
