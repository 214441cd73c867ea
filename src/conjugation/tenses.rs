//! Tablas de terminaciones estándar para verbos regulares
//!
//! Seis terminaciones por tabla, en el orden canónico de
//! [`PronounCategory::ALL`]. Sin tildes: la entrada acentuada queda fuera
//! del alcance del conjugador.

use super::pattern::{ConjugationPattern, EndingTable};
use super::{PronounCategory, Tense, VerbClass};

/// Terminaciones del presente de indicativo
pub const PRESENTE_AR: [&str; 6] = ["o", "as", "a", "amos", "ais", "an"];
pub const PRESENTE_ER: [&str; 6] = ["o", "es", "e", "emos", "eis", "en"];
pub const PRESENTE_IR: [&str; 6] = ["o", "es", "e", "imos", "is", "en"];

/// Terminaciones del pretérito indefinido
pub const PRETERITO_AR: [&str; 6] = ["e", "aste", "o", "amos", "asteis", "aron"];
pub const PRETERITO_ER: [&str; 6] = ["i", "iste", "io", "imos", "isteis", "ieron"];
/// En pretérito las clases ER e IR comparten terminaciones
pub const PRETERITO_IR: [&str; 6] = PRETERITO_ER;

/// Terminaciones del futuro simple
///
/// Llevan la vocal temática porque la raíz pierde siempre los dos últimos
/// caracteres del infinitivo; respecto al infinitivo completo las tres
/// clases coinciden.
pub const FUTURO_AR: [&str; 6] = ["are", "aras", "ara", "aremos", "areis", "aran"];
pub const FUTURO_ER: [&str; 6] = ["ere", "eras", "era", "eremos", "ereis", "eran"];
pub const FUTURO_IR: [&str; 6] = ["ire", "iras", "ira", "iremos", "ireis", "iran"];

/// Obtiene la tabla estándar para un tiempo y una clase de verbo
pub fn suffixes(tense: Tense, class: VerbClass) -> &'static [&'static str; 6] {
    match (tense, class) {
        (Tense::Presente, VerbClass::Ar) => &PRESENTE_AR,
        (Tense::Presente, VerbClass::Er) => &PRESENTE_ER,
        (Tense::Presente, VerbClass::Ir) => &PRESENTE_IR,
        (Tense::Preterito, VerbClass::Ar) => &PRETERITO_AR,
        (Tense::Preterito, VerbClass::Er) => &PRETERITO_ER,
        (Tense::Preterito, VerbClass::Ir) => &PRETERITO_IR,
        (Tense::Futuro, VerbClass::Ar) => &FUTURO_AR,
        (Tense::Futuro, VerbClass::Er) => &FUTURO_ER,
        (Tense::Futuro, VerbClass::Ir) => &FUTURO_IR,
    }
}

/// Construye el patrón estándar de un tiempo y una clase, p. ej.
/// "Presente AR"
pub fn standard_pattern(tense: Tense, class: VerbClass) -> ConjugationPattern {
    ConjugationPattern::from_suffixes(format!("{} {}", tense, class), suffixes(tense, class))
}

/// Construye una tabla de terminaciones a partir de seis sufijos en orden
/// canónico, para llamadores que pasan por [`ConjugationPattern::new`]
pub fn ending_table(suffixes: &[&str; 6]) -> EndingTable {
    PronounCategory::ALL
        .iter()
        .zip(suffixes)
        .map(|(category, suffix)| (*category, (*suffix).to_string()))
        .collect()
}
