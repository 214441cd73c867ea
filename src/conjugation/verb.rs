//! Verbos regulares: infinitivo + patrón de conjugación activo

use std::fmt;

use crate::error::ConjugationError;

use super::{ConjugationPattern, PronounCategory};

/// Verbo regular ligado a un patrón de conjugación.
///
/// El verbo no posee el patrón: los patrones se comparten entre todos los
/// verbos de la misma clase y tiempo. Las formas conjugadas se calculan en
/// cada consulta con el patrón activo, sin caché, de modo que un cambio de
/// patrón es visible de inmediato.
pub struct RegularVerb<'a> {
    infinitive: String,
    pattern: &'a ConjugationPattern,
}

impl<'a> RegularVerb<'a> {
    /// Crea un verbo con su patrón inicial.
    ///
    /// El infinitivo no se valida aquí; [`conjugate`](Self::conjugate) lo
    /// valida en cada aplicación.
    pub fn new(infinitive: impl Into<String>, pattern: &'a ConjugationPattern) -> Self {
        Self {
            infinitive: infinitive.into(),
            pattern,
        }
    }

    pub fn infinitive(&self) -> &str {
        &self.infinitive
    }

    /// Patrón de conjugación activo
    pub fn pattern(&self) -> &ConjugationPattern {
        self.pattern
    }

    /// Sustituye el patrón activo; las consultas siguientes lo usan
    pub fn set_pattern(&mut self, pattern: &'a ConjugationPattern) {
        self.pattern = pattern;
    }

    /// Forma conjugada para un pronombre individual o etiqueta canónica
    pub fn conjugate(&self, pronoun: &str) -> Result<String, ConjugationError> {
        self.pattern.apply(&self.infinitive, pronoun)
    }

    /// Pares (etiqueta canónica, forma conjugada) en orden canónico: la
    /// tabla de conjugación completa del verbo bajo su patrón actual
    pub fn forms(
        &self,
    ) -> impl Iterator<Item = (&'static str, Result<String, ConjugationError>)> + '_ {
        PronounCategory::ALL
            .iter()
            .map(move |category| (category.label(), self.conjugate(category.label())))
    }
}

impl fmt::Display for RegularVerb<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Verbo regular : {}", self.infinitive)?;
        writeln!(f, "Conjugación   : {}", self.pattern.name())?;
        writeln!(f)?;
        for (label, form) in self.forms() {
            // Un infinitivo inválido no tiene tabla que mostrar
            let form = form.map_err(|_| fmt::Error)?;
            writeln!(f, "\t{:<20} : {}", label, form)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tenses;
    use super::super::{Tense, VerbClass};
    use super::*;

    #[test]
    fn test_conjugate_delegates_to_pattern() {
        let presente = tenses::standard_pattern(Tense::Presente, VerbClass::Ar);
        let hablar = RegularVerb::new("hablar", &presente);

        assert_eq!(hablar.conjugate("yo").unwrap(), "hablo");
        assert_eq!(hablar.conjugate("usted").unwrap(), "habla");
        assert_eq!(hablar.conjugate("el/ella/usted").unwrap(), "habla");
    }

    #[test]
    fn test_set_pattern_takes_effect_immediately() {
        let presente = tenses::standard_pattern(Tense::Presente, VerbClass::Ar);
        let preterito = tenses::standard_pattern(Tense::Preterito, VerbClass::Ar);

        let mut hablar = RegularVerb::new("hablar", &presente);
        let before = hablar.conjugate("yo").unwrap();
        assert_eq!(before, "hablo");

        hablar.set_pattern(&preterito);
        assert_eq!(hablar.conjugate("yo").unwrap(), "hable");
        // La forma calculada antes del cambio no se ve alterada
        assert_eq!(before, "hablo");
    }

    #[test]
    fn test_forms_cover_all_categories_in_order() {
        let presente = tenses::standard_pattern(Tense::Presente, VerbClass::Ir);
        let vivir = RegularVerb::new("vivir", &presente);

        let forms: Vec<(&str, String)> = vivir
            .forms()
            .map(|(label, form)| (label, form.unwrap()))
            .collect();
        assert_eq!(
            forms,
            vec![
                ("yo", "vivo".to_string()),
                ("tu", "vives".to_string()),
                ("el/ella/usted", "vive".to_string()),
                ("nosotros", "vivimos".to_string()),
                ("vosotros", "vivis".to_string()),
                ("ellos/ellas/ustedes", "viven".to_string()),
            ]
        );
    }

    #[test]
    fn test_unknown_pronoun_propagates_unchanged() {
        let presente = tenses::standard_pattern(Tense::Presente, VerbClass::Ar);
        let hablar = RegularVerb::new("hablar", &presente);

        assert_eq!(
            hablar.conjugate("nonexistent_pronoun"),
            Err(crate::error::ConjugationError::UnknownPronoun(
                "nonexistent_pronoun".to_string()
            ))
        );
    }

    #[test]
    fn test_display_includes_header_and_rows() {
        let presente = tenses::standard_pattern(Tense::Presente, VerbClass::Er);
        let comer = RegularVerb::new("comer", &presente);

        let rendered = comer.to_string();
        assert!(rendered.contains("Verbo regular : comer"));
        assert!(rendered.contains("Conjugación   : Presente ER"));
        assert!(rendered.contains("comemos"));
    }
}
