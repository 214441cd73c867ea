//! Errores del conjugador

use thiserror::Error;

use crate::conjugation::PronounCategory;

/// Errores producidos por la construcción de patrones y la conjugación.
///
/// Ninguno se recupera internamente: son errores de entrada o de
/// programación y se devuelven tal cual al llamador.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConjugationError {
    /// La tabla de terminaciones no cubre todas las personas gramaticales
    #[error("Tabla de terminaciones incompleta: falta la categoría '{0}'")]
    MissingCategory(PronounCategory),

    /// El pronombre no es ninguna variante ni etiqueta canónica conocida
    #[error("Pronombre no reconocido: '{0}'")]
    UnknownPronoun(String),

    /// Infinitivo demasiado corto para separar raíz y terminación
    #[error("Infinitivo inválido: '{0}' (se requieren al menos 3 caracteres)")]
    InvalidInfinitive(String),
}
