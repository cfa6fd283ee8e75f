//! Objetos: valores con tipo nominal e identidad de instancia.
//!
//! La jerarquía de tipos no se infiere de Rust: cada objeto declara su
//! `NominalType`, con la cadena de ancestros explícita (del más específico al
//! menos específico). Las capacidades auto-descriptivas (`Equatable`,
//! `Hashable`) se exponen mediante accesores opcionales.
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::contracts::{Equatable, Hashable};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NominalType {
    name: String,
    ancestors: Vec<String>,
}

impl NominalType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               ancestors: vec![] }
    }

    pub fn with_ancestors<I, S>(name: impl Into<String>, ancestors: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { name: name.into(),
               ancestors: ancestors.into_iter().map(Into::into).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }

    /// El propio nombre seguido de los ancestros, en orden de resolución.
    pub fn lineage(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.name.as_str()).chain(self.ancestors.iter().map(String::as_str))
    }

    pub fn is_a(&self, type_name: &str) -> bool {
        self.lineage().any(|t| t == type_name)
    }
}

impl fmt::Display for NominalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Contrato de un objeto comparable por el motor.
pub trait Object: Any + Send + Sync + fmt::Debug {
    fn nominal_type(&self) -> &NominalType;

    fn as_any(&self) -> &dyn Any;

    /// `Some` si el objeto sabe compararse con otro de su misma clase.
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        None
    }

    /// `Some` si el objeto produce su propio hash.
    fn as_hashable(&self) -> Option<&dyn Hashable> {
        None
    }
}

/// Referencia compartida a una instancia de objeto.
///
/// La instancia es la asignación del `Arc`: clonar un `ObjectRef` o envolver
/// dos veces el mismo `Arc` conserva la instancia; construir otro a partir de
/// un payload igual produce una instancia distinta.
#[derive(Clone)]
pub struct ObjectRef {
    inner: Arc<dyn Object>,
}

impl ObjectRef {
    pub fn new<O: Object>(object: O) -> Self {
        Self::from_arc(Arc::new(object))
    }

    pub fn from_arc(inner: Arc<dyn Object>) -> Self {
        Self { inner }
    }

    /// Dirección de la asignación compartida. Es estable mientras viva
    /// alguna referencia a la instancia.
    pub fn instance_id(&self) -> usize {
        Arc::as_ptr(&self.inner) as *const () as usize
    }

    /// Identificador textual de la instancia (32 dígitos hex).
    pub fn instance_key(&self) -> String {
        format!("{:032x}", self.instance_id())
    }

    pub fn same_instance(&self, other: &ObjectRef) -> bool {
        self.instance_id() == other.instance_id()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }
}

impl Deref for ObjectRef {
    type Target = dyn Object;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
         .field("instance", &self.instance_key())
         .field("value", &self.inner)
         .finish()
    }
}
