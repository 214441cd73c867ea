//! Conjugador - Biblioteca de conjugación de verbos regulares españoles
//!
//! Modela patrones de conjugación reutilizables (persona → terminación)
//! y los aplica a infinitivos regulares -ar/-er/-ir.

pub mod config;
pub mod conjugation;
pub mod error;

pub use config::Config;
pub use conjugation::{ConjugationPattern, EndingTable, PronounCategory, RegularVerb, Tense, VerbClass};
pub use error::ConjugationError;
