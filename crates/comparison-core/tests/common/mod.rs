//! Fixtures compartidos por las pruebas de integración.
#![allow(dead_code)]

use comparison_core::{Equatable, Equivalence, HashCode, Hashable, Hasher, NominalType, Object, Result, Value};
use once_cell::sync::Lazy;
use std::any::Any;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

static USER_TYPE: Lazy<NominalType> = Lazy::new(|| NominalType::new("User"));
static PLAIN_TYPE: Lazy<NominalType> = Lazy::new(|| NominalType::new("stdClass"));

/// Objeto auto-descriptivo: se compara y se hashea por `id`.
#[derive(Debug)]
pub struct User {
    pub id: i64,
}

impl Object for User {
    fn nominal_type(&self) -> &NominalType {
        &USER_TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }
    fn as_hashable(&self) -> Option<&dyn Hashable> {
        Some(self)
    }
}

impl Equatable for User {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<User>().is_some_and(|o| o.id == self.id)
    }
}

impl Hashable for User {
    fn hash_code(&self) -> HashCode {
        self.id as HashCode
    }
}

pub fn user(id: i64) -> Value {
    Value::object(User { id })
}

/// Objeto sin capacidades: sólo identidad o relaciones registradas.
#[derive(Debug)]
pub struct Plain {
    nominal_type: NominalType,
}

impl Plain {
    pub fn of_type(nominal_type: NominalType) -> Self {
        Self { nominal_type }
    }
}

impl Object for Plain {
    fn nominal_type(&self) -> &NominalType {
        &self.nominal_type
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn plain() -> Value {
    Value::object(Plain::of_type(NominalType::clone(&PLAIN_TYPE)))
}

pub fn typed(name: &str, ancestors: &[&str]) -> Value {
    Value::object(Plain::of_type(NominalType::with_ancestors(name, ancestors.iter().copied())))
}

/// `Equatable` sin `Hashable`; cuenta las llamadas a `equals`.
#[derive(Debug, Default)]
pub struct EquatableOnly {
    pub answer: bool,
    pub calls: AtomicUsize,
}

static EQUATABLE_ONLY_TYPE: Lazy<NominalType> = Lazy::new(|| NominalType::new("EquatableOnly"));

impl Object for EquatableOnly {
    fn nominal_type(&self) -> &NominalType {
        &EQUATABLE_ONLY_TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }
}

impl Equatable for EquatableOnly {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn equals(&self, _other: &dyn Any) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// Relación guionizada: devuelve las respuestas en orden y registra los
/// tipos de cada llamada `(izquierdo, derecho)`.
#[derive(Debug, Default)]
pub struct ScriptedEquivalence {
    answers: Mutex<VecDeque<bool>>,
    pub calls: Mutex<Vec<(String, String)>>,
    /// Lo que responde `equals` ante cualquier otra relación.
    pub equal_to_any: bool,
}

impl ScriptedEquivalence {
    pub fn answering(answers: &[bool]) -> Self {
        Self { answers: Mutex::new(answers.iter().copied().collect()),
               ..Self::default() }
    }

    pub fn equal_to_any(equal: bool) -> Self {
        Self { equal_to_any: equal,
               ..Self::default() }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Equatable for ScriptedEquivalence {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn equals(&self, _other: &dyn Any) -> bool {
        self.equal_to_any
    }
}

impl Equivalence for ScriptedEquivalence {
    fn equivalent(&self, left: &Value, right: &Value) -> Result<bool> {
        self.calls.lock().unwrap().push((left.type_name().to_string(), right.type_name().to_string()));
        Ok(self.answers.lock().unwrap().pop_front().unwrap_or(false))
    }
}

/// Hasher que devuelve siempre `code` y cuenta las llamadas.
#[derive(Debug)]
pub struct ConstantHasher {
    pub code: HashCode,
    pub hashes: AtomicUsize,
}

impl ConstantHasher {
    pub fn new(code: HashCode) -> Self {
        Self { code,
               hashes: AtomicUsize::new(0) }
    }
}

impl Equatable for ConstantHasher {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn equals(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<ConstantHasher>().is_some_and(|o| o.code == self.code)
    }
}

impl Equivalence for ConstantHasher {
    fn equivalent(&self, _left: &Value, right: &Value) -> Result<bool> {
        Ok(right.as_object().is_some())
    }
    fn as_hasher(&self) -> Option<&dyn Hasher> {
        Some(self)
    }
}

impl Hasher for ConstantHasher {
    fn hash(&self, _value: &Value) -> Result<HashCode> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        Ok(self.code)
    }
}

pub fn list(items: Vec<Value>) -> Value {
    Value::sequence_of(items)
}

/// Sólo expone `as_hashable` (no `as_equatable`); se compara por `code` y
/// cuenta las llamadas a `equals`.
#[derive(Debug, Default)]
pub struct HashableOnly {
    pub code: HashCode,
    pub calls: AtomicUsize,
}

static HASHABLE_ONLY_TYPE: Lazy<NominalType> = Lazy::new(|| NominalType::new("HashableOnly"));

impl Object for HashableOnly {
    fn nominal_type(&self) -> &NominalType {
        &HASHABLE_ONLY_TYPE
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_hashable(&self) -> Option<&dyn Hashable> {
        Some(self)
    }
}

impl Equatable for HashableOnly {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn equals(&self, other: &dyn Any) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        other.downcast_ref::<HashableOnly>().is_some_and(|o| o.code == self.code)
    }
}

impl Hashable for HashableOnly {
    fn hash_code(&self) -> HashCode {
        self.code
    }
}

pub fn hashable_only(code: HashCode) -> Value {
    Value::object(HashableOnly { code,
                                 ..Default::default() })
}
