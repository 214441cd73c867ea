//! Módulo de conjugación de verbos regulares
//!
//! Modela la conjugación como patrones reutilizables: un patrón asocia
//! cada persona gramatical con una terminación, y un verbo regular aplica
//! el patrón activo a su infinitivo.

pub mod pattern;
pub mod tenses;
pub mod verb;

use std::fmt;

/// Persona gramatical canónica
///
/// Cada variante agrupa los pronombres que comparten forma verbal
/// (p. ej. "el", "ella" y "usted" conjugan igual).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PronounCategory {
    /// yo
    FirstSingular,
    /// tu
    SecondSingular,
    /// el/ella/usted
    ThirdSingular,
    /// nosotros
    FirstPlural,
    /// vosotros
    SecondPlural,
    /// ellos/ellas/ustedes
    ThirdPlural,
}

impl PronounCategory {
    /// Orden canónico de enumeración, usado para recorrer y mostrar tablas
    pub const ALL: [PronounCategory; 6] = [
        PronounCategory::FirstSingular,
        PronounCategory::SecondSingular,
        PronounCategory::ThirdSingular,
        PronounCategory::FirstPlural,
        PronounCategory::SecondPlural,
        PronounCategory::ThirdPlural,
    ];

    /// Etiqueta canónica de la categoría, también válida como clave de
    /// búsqueda en los patrones
    pub fn label(&self) -> &'static str {
        match self {
            PronounCategory::FirstSingular => "yo",
            PronounCategory::SecondSingular => "tu",
            PronounCategory::ThirdSingular => "el/ella/usted",
            PronounCategory::FirstPlural => "nosotros",
            PronounCategory::SecondPlural => "vosotros",
            PronounCategory::ThirdPlural => "ellos/ellas/ustedes",
        }
    }

    /// Pronombres individuales que pertenecen a la categoría
    pub fn variants(&self) -> &'static [&'static str] {
        match self {
            PronounCategory::FirstSingular => &["yo"],
            PronounCategory::SecondSingular => &["tu"],
            PronounCategory::ThirdSingular => &["el", "ella", "usted"],
            PronounCategory::FirstPlural => &["nosotros"],
            PronounCategory::SecondPlural => &["vosotros"],
            PronounCategory::ThirdPlural => &["ellos", "ellas", "ustedes"],
        }
    }
}

impl fmt::Display for PronounCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tiempo verbal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Presente,
    Preterito,
    Futuro,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Presente, Tense::Preterito, Tense::Futuro];
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tense::Presente => "Presente",
            Tense::Preterito => "Preterito",
            Tense::Futuro => "Futuro",
        };
        f.write_str(name)
    }
}

/// Clase de verbo según su terminación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    Ar,
    Er,
    Ir,
}

impl VerbClass {
    /// Determina la clase de verbo a partir del infinitivo
    pub fn from_infinitive(infinitive: &str) -> Option<Self> {
        let lower = infinitive.to_lowercase();
        if lower.ends_with("ar") {
            Some(VerbClass::Ar)
        } else if lower.ends_with("er") {
            Some(VerbClass::Er)
        } else if lower.ends_with("ir") {
            Some(VerbClass::Ir)
        } else {
            None
        }
    }

    /// Obtiene la terminación del infinitivo
    pub fn infinitive_ending(&self) -> &'static str {
        match self {
            VerbClass::Ar => "ar",
            VerbClass::Er => "er",
            VerbClass::Ir => "ir",
        }
    }
}

impl fmt::Display for VerbClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerbClass::Ar => "AR",
            VerbClass::Er => "ER",
            VerbClass::Ir => "IR",
        };
        f.write_str(name)
    }
}

pub use pattern::{ConjugationPattern, EndingTable};
pub use verb::RegularVerb;
