use std::env;
use std::fs;
use std::path::Path;

// Loads .env into rustc-env vars so AppConfig::from_env() can read them
// through option_env! at compile time.
fn main() {
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim();

                    // Real environment variables win over .env entries
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found, building with defaults (analytics disabled).");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
