//! Configuración y argumentos CLI

use crate::conjugation::Tense;

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tiempo verbal a mostrar (default: los tres)
    pub tense: Option<Tense>,
    /// Pronombre concreto en lugar de la tabla completa
    pub pronoun: Option<String>,
    /// Infinitivos a conjugar (argumentos posicionales)
    pub verbs: Vec<String>,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-t" | "--tiempo" => {
                    let value = args_iter.next().ok_or("--tiempo requiere un valor")?;
                    config.tense = Some(Self::parse_tense(&value)?);
                }
                "-p" | "--pronombre" => {
                    config.pronoun = Some(args_iter.next().ok_or("--pronombre requiere un valor")?);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Opción desconocida: {}", arg));
                    }
                    // Argumento posicional = infinitivo a conjugar
                    config.verbs.push(arg);
                }
            }
        }

        Ok(config)
    }

    fn parse_tense(value: &str) -> Result<Tense, String> {
        let normalized = value.trim().to_lowercase();
        match normalized.as_str() {
            "presente" | "present" => Ok(Tense::Presente),
            "preterito" | "pretérito" | "preterite" => Ok(Tense::Preterito),
            "futuro" | "future" => Ok(Tense::Futuro),
            _ => Err(format!("Tiempo verbal desconocido: {}", value)),
        }
    }

    pub fn print_help() {
        println!(
            r#"Conjugador - Conjugador de verbos regulares españoles

USO:
    conjugador [OPCIONES] [INFINITIVOS...]

ARGUMENTOS:
    [INFINITIVOS...]    Verbos en infinitivo (-ar/-er/-ir) a conjugar.
                        Sin argumentos se ejecuta la demostración.

OPCIONES:
    -h, --help                Muestra esta ayuda
    -t, --tiempo <TIEMPO>     presente | preterito | futuro (default: los tres)
    -p, --pronombre <PRON>    Muestra solo la forma de ese pronombre

EJEMPLOS:
    conjugador hablar
    conjugador --tiempo preterito hablar comer
    conjugador -t presente -p usted vivir"#
        );
    }
}
