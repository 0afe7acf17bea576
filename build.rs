use std::env;
use std::fs;
use std::path::Path;

// Pasa las variables de .env al compilador como cargo:rustc-env para
// que utils::constants pueda leerlas con option_env!.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=Sin archivo .env: BACKEND_URL usa su valor por defecto. Copia .env.example a .env para configurarlo."
        );
        return;
    }

    let contents = match fs::read_to_string(env_file) {
        Ok(contents) => contents,
        Err(e) => {
            println!("cargo:warning=No se pudo leer .env: {}", e);
            return;
        }
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            // Comillas opcionales alrededor del valor
            let value = value.trim().trim_matches('"').trim_matches('\'');

            // El entorno del shell tiene prioridad sobre .env
            if env::var(key).is_err() {
                println!("cargo:rustc-env={}={}", key, value);
            }
        }
    }
}
