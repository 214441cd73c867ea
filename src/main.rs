use std::process;

use conjugador::conjugation::{tenses, RegularVerb, Tense, VerbClass};
use conjugador::Config;

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    if config.verbs.is_empty() {
        demo();
        return;
    }

    let tense_list: Vec<Tense> = match config.tense {
        Some(tense) => vec![tense],
        None => Tense::ALL.to_vec(),
    };

    let mut failed = false;
    for infinitive in &config.verbs {
        let class = match VerbClass::from_infinitive(infinitive) {
            Some(class) => class,
            None => {
                eprintln!(
                    "Advertencia: '{}' no es un infinitivo regular (-ar/-er/-ir), se omite.",
                    infinitive
                );
                failed = true;
                continue;
            }
        };
        if infinitive.chars().count() < 3 {
            eprintln!(
                "Advertencia: '{}' es demasiado corto para separar la raíz, se omite.",
                infinitive
            );
            failed = true;
            continue;
        }

        for &tense in &tense_list {
            let pattern = tenses::standard_pattern(tense, class);
            let verb = RegularVerb::new(infinitive.clone(), &pattern);

            if let Some(ref pronoun) = config.pronoun {
                match verb.conjugate(pronoun) {
                    Ok(form) => println!("{} ({}) : {}", infinitive, pattern.name(), form),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        process::exit(1);
                    }
                }
            } else {
                print!("{}", verb);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}

/// Demostración con los verbos clásicos: hablar en los tres tiempos,
/// comer y vivir en presente
fn demo() {
    let presente_ar = tenses::standard_pattern(Tense::Presente, VerbClass::Ar);
    let preterito_ar = tenses::standard_pattern(Tense::Preterito, VerbClass::Ar);
    let futuro_ar = tenses::standard_pattern(Tense::Futuro, VerbClass::Ar);

    let mut hablar = RegularVerb::new("hablar", &presente_ar);
    print!("{}", hablar);
    hablar.set_pattern(&preterito_ar);
    print!("{}", hablar);
    hablar.set_pattern(&futuro_ar);
    print!("{}", hablar);

    let presente_er = tenses::standard_pattern(Tense::Presente, VerbClass::Er);
    let comer = RegularVerb::new("comer", &presente_er);
    print!("{}", comer);

    let presente_ir = tenses::standard_pattern(Tense::Presente, VerbClass::Ir);
    let vivir = RegularVerb::new("vivir", &presente_ir);
    print!("{}", vivir);
}
