//! Build script for songpop.
//!
//! Copies the `.env.example` template into the user's local data directory so
//! the configuration example sits next to the `.env` file the server loads at
//! startup.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` from the crate root into the local data directory.
///
/// # File Operations
///
/// ## Source Location
/// `.env.example` in the crate root (where Cargo.toml resides).
///
/// ## Destination Location
/// - Linux: `~/.local/share/songpop/.env.example`
/// - macOS: `~/Library/Application Support/songpop/.env.example`
/// - Windows: `%LOCALAPPDATA%/songpop/.env.example`
///
/// A missing template only produces a cargo warning. Failing to create the
/// directory or write the file fails the build.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("songpop");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
