use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_HANDLE_ID: AtomicU64 = AtomicU64::new(1);

/// Handle opaco (recurso externo). Dos handles son el mismo recurso sólo si
/// comparten id numérico; `kind` es descriptivo y no participa.
#[derive(Clone)]
pub struct Handle {
    id: u64,
    kind: Arc<str>,
}

impl Handle {
    /// Reserva un id nuevo del contador global del proceso.
    pub fn allocate(kind: impl Into<String>) -> Self {
        let id = NEXT_HANDLE_ID.fetch_add(1, Ordering::Relaxed);
        Self::from_raw(id, kind)
    }

    /// Envuelve un id externo ya existente (p.ej. un descriptor del SO).
    pub fn from_raw(id: u64, kind: impl Into<String>) -> Self {
        let kind: String = kind.into();
        Self { id, kind: Arc::from(kind) }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }
}

impl PartialEq for Handle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Handle {}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({} #{})", self.kind, self.id)
    }
}
