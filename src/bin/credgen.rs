//! Generate a `[[auth.users]]` entry for the site config.
//!
//! ```bash
//! cargo run --bin termfolio-credgen --features credgen -- dev@example.com 's3cret' >> termfolio.toml
//! ```
//!
//! Arguments: `<email> <password> [id]`. A random salt is drawn for every run;
//! when no id is given a random one is generated too. Output goes to stdout,
//! diagnostics to stderr.

use std::process::ExitCode;

use termfolio::config::{UserRecord, encode_hex};

fn random_bytes<const N: usize>() -> Result<[u8; N], String> {
    let mut out = [0u8; N];
    getrandom::fill(&mut out).map_err(|e| format!("random source failed: {}", e))?;
    Ok(out)
}

fn generate(email: &str, password: &str, id: Option<&str>) -> Result<String, String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("email and password must not be empty".to_string());
    }

    let salt = random_bytes::<16>()?;
    let id = match id {
        Some(id) => id.to_string(),
        None => encode_hex(&random_bytes::<8>()?),
    };

    UserRecord::hashed(&id, email, password, &salt)
        .to_toml_entry()
        .map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !(2..=3).contains(&args.len()) {
        eprintln!("usage: termfolio-credgen <email> <password> [id]");
        return ExitCode::from(2);
    }

    match generate(&args[0], &args[1], args.get(2).map(String::as_str)) {
        Ok(entry) => {
            print!("{}", entry);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("termfolio-credgen: {}", e);
            ExitCode::FAILURE
        }
    }
}
