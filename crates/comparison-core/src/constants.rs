//! Constantes de hashing de la estrategia de identidad.
//!
//! Forman parte del valor observable de `hash`; cambiarlas altera todos los
//! códigos producidos (no hay garantía de estabilidad entre versiones, pero
//! sí dentro de una misma).

/// Código de hash de ancho fijo (32 bits con signo, aritmética envolvente).
pub type HashCode = i32;

pub const HASH_NULL: HashCode = 0;

/// Semilla del hash de secuencias.
pub const HASH_SEQUENCE: HashCode = 991;

pub const HASH_FALSE: HashCode = 1237;

pub const HASH_TRUE: HashCode = 1231;

/// Multiplicador (identidad) o desplazamiento (valor) para objetos.
pub const HASH_OBJECT: HashCode = 1093;

pub const HASH_HANDLE: HashCode = 1471;

/// Semilla del hash polinomial de texto.
pub const HASH_TEXT: HashCode = 1321;

/// Multiplicador del plegado polinomial (texto y secuencias).
pub const HASH_MULTIPLIER: HashCode = 31;

/// Profundidad máxima por defecto al recorrer secuencias anidadas.
pub const DEFAULT_MAX_DEPTH: usize = 512;
