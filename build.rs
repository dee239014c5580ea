use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // Las variables del entorno real tienen prioridad
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using built-in defaults (see .env.example).");
    }

    // Las tablas de traducción se incrustan con include_str!
    for locale in ["en", "ar", "fr", "es", "pt"] {
        println!("cargo:rerun-if-changed=locales/{}.json", locale);
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}
