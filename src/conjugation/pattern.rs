//! Patrones de conjugación: de tabla de terminaciones a forma conjugada
//!
//! Un patrón se construye una sola vez a partir de una tabla
//! persona → terminación y queda inmutable; la expansión a pronombres
//! individuales ("el", "ella", "usted", ...) se calcula en la construcción,
//! nunca en la búsqueda.

use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::ConjugationError;

use super::PronounCategory;

/// Tabla de terminaciones suministrada por el llamador, una entrada por
/// persona gramatical
pub type EndingTable = HashMap<PronounCategory, String>;

/// Conjunto de reglas persona → terminación para un tiempo y una clase
/// de verbo
///
/// Acepta búsquedas tanto por etiqueta canónica ("el/ella/usted") como por
/// pronombre individual ("usted"); todas las variantes de una categoría
/// producen la misma terminación.
pub struct ConjugationPattern {
    name: String,
    /// Terminaciones en orden canónico de categoría
    suffixes: Vec<String>,
    /// Expansión pronombre/etiqueta → terminación
    lookup: HashMap<String, String>,
}

impl ConjugationPattern {
    /// Crea un patrón validando que la tabla cubra las seis categorías.
    ///
    /// Las categorías se recorren en orden canónico; la primera ausente
    /// se devuelve como error.
    pub fn new(name: impl Into<String>, table: &EndingTable) -> Result<Self, ConjugationError> {
        let name = name.into();
        let mut suffixes = Vec::with_capacity(PronounCategory::ALL.len());
        let mut lookup = HashMap::new();

        for category in PronounCategory::ALL {
            let suffix = table
                .get(&category)
                .ok_or(ConjugationError::MissingCategory(category))?;
            Self::expand(&mut lookup, &name, category, suffix);
            suffixes.push(suffix.clone());
        }

        Ok(Self {
            name,
            suffixes,
            lookup,
        })
    }

    /// Crea un patrón a partir de seis terminaciones en orden canónico.
    ///
    /// No puede fallar: el arreglo cubre las seis categorías por
    /// construcción. Es la vía que usan las tablas estándar de
    /// [`tenses`](super::tenses).
    pub fn from_suffixes(name: impl Into<String>, suffixes: &[&str; 6]) -> Self {
        let name = name.into();
        let mut lookup = HashMap::new();

        for (category, suffix) in PronounCategory::ALL.iter().zip(suffixes) {
            Self::expand(&mut lookup, &name, *category, suffix);
        }

        Self {
            name,
            suffixes: suffixes.iter().map(|s| (*s).to_string()).collect(),
            lookup,
        }
    }

    /// Registra la etiqueta canónica y cada pronombre de la categoría
    fn expand(
        lookup: &mut HashMap<String, String>,
        name: &str,
        category: PronounCategory,
        suffix: &str,
    ) {
        lookup.insert(category.label().to_string(), suffix.to_string());
        for variant in category.variants() {
            debug!("patrón '{}': {} → -{}", name, variant, suffix);
            lookup.insert((*variant).to_string(), suffix.to_string());
        }
    }

    /// Nombre del patrón (p. ej. "Presente AR")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Terminación para un pronombre individual o una etiqueta canónica
    pub fn suffix_for(&self, pronoun: &str) -> Result<&str, ConjugationError> {
        self.lookup
            .get(pronoun)
            .map(String::as_str)
            .ok_or_else(|| ConjugationError::UnknownPronoun(pronoun.to_string()))
    }

    /// Conjuga un infinitivo para un pronombre.
    ///
    /// La raíz se obtiene quitando siempre los dos últimos caracteres del
    /// infinitivo, sean cuales sean; por eso las tablas de futuro llevan la
    /// vocal temática en la terminación. El infinitivo debe tener al menos
    /// tres caracteres.
    pub fn apply(&self, infinitive: &str, pronoun: &str) -> Result<String, ConjugationError> {
        let len = infinitive.chars().count();
        if len < 3 {
            return Err(ConjugationError::InvalidInfinitive(infinitive.to_string()));
        }
        let suffix = self.suffix_for(pronoun)?;

        let stem: String = infinitive.chars().take(len - 2).collect();
        Ok(format!("{}{}", stem, suffix))
    }

    /// Pares (etiqueta canónica, terminación) en orden canónico
    pub fn endings(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        PronounCategory::ALL
            .iter()
            .zip(&self.suffixes)
            .map(|(category, suffix)| (category.label(), suffix.as_str()))
    }
}

impl fmt::Display for ConjugationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for (label, suffix) in self.endings() {
            writeln!(f, "{:<20} : {}", label, suffix)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tenses;
    use super::*;

    fn presente_ar() -> ConjugationPattern {
        ConjugationPattern::from_suffixes("Presente AR", &tenses::PRESENTE_AR)
    }

    #[test]
    fn test_new_requires_complete_table() {
        let mut table = tenses::ending_table(&tenses::PRESENTE_AR);
        table.remove(&PronounCategory::SecondPlural);

        let result = ConjugationPattern::new("Presente AR", &table);
        assert_eq!(
            result.err(),
            Some(ConjugationError::MissingCategory(
                PronounCategory::SecondPlural
            ))
        );
    }

    #[test]
    fn test_new_reports_first_missing_category_in_canonical_order() {
        let mut table = tenses::ending_table(&tenses::PRESENTE_AR);
        table.remove(&PronounCategory::SecondSingular);
        table.remove(&PronounCategory::ThirdPlural);

        let result = ConjugationPattern::new("Presente AR", &table);
        assert_eq!(
            result.err(),
            Some(ConjugationError::MissingCategory(
                PronounCategory::SecondSingular
            ))
        );
    }

    #[test]
    fn test_lookup_by_label_and_variant_agree() {
        let pattern = presente_ar();
        let by_label = pattern.suffix_for("el/ella/usted").unwrap();
        for variant in PronounCategory::ThirdSingular.variants() {
            assert_eq!(
                pattern.suffix_for(variant).unwrap(),
                by_label,
                "la variante '{}' debería conjugar como su categoría",
                variant
            );
        }
    }

    #[test]
    fn test_apply_strips_two_characters() {
        let pattern = presente_ar();
        assert_eq!(pattern.apply("hablar", "yo").unwrap(), "hablo");
        assert_eq!(pattern.apply("hablar", "nosotros").unwrap(), "hablamos");
    }

    #[test]
    fn test_apply_minimum_length() {
        let pattern = presente_ar();
        // Tres caracteres: raíz de un carácter
        assert_eq!(pattern.apply("dar", "yo").unwrap(), "do");
        assert_eq!(
            pattern.apply("ir", "yo"),
            Err(ConjugationError::InvalidInfinitive("ir".to_string()))
        );
    }

    #[test]
    fn test_apply_unknown_pronoun() {
        let pattern = presente_ar();
        assert_eq!(
            pattern.apply("hablar", "vosotras"),
            Err(ConjugationError::UnknownPronoun("vosotras".to_string()))
        );
    }

    #[test]
    fn test_endings_iterator_is_restartable() {
        let pattern = presente_ar();
        let first: Vec<_> = pattern.endings().collect();
        let second: Vec<_> = pattern.endings().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], ("yo", "o"));
        assert_eq!(first[5], ("ellos/ellas/ustedes", "an"));
    }

    #[test]
    fn test_display_aligns_labels() {
        let rendered = presente_ar().to_string();
        assert!(rendered.starts_with("Presente AR\n"));
        assert!(rendered.contains(&format!("{:<20} : {}\n", "yo", "o")));
        assert!(rendered.contains(&format!("{:<20} : {}\n", "el/ella/usted", "a")));
    }
}
