//! File-based secrets example

use envconfig::EnvConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    // APP_API_KEY_FILE wins over APP_API_KEY when the file is readable
    #[envconfig(file_content, required)]
    pub api_key: String,

    // Custom suffix: APP_DATABASE_PASSWORD_PATH
    #[envconfig(file_content = "_PATH")]
    pub database_password: String,

    // Regular environment variable
    pub database_host: String,
}

fn main() -> anyhow::Result<()> {
    let mut api_key_file = NamedTempFile::new()?;
    writeln!(api_key_file, "super_secret_api_key_12345")?;

    let mut db_password_file = NamedTempFile::new()?;
    writeln!(db_password_file, "db_password_67890")?;

    std::env::set_var("APP_API_KEY", "local-development-key");
    std::env::set_var("APP_API_KEY_FILE", api_key_file.path());
    std::env::set_var("APP_DATABASE_PASSWORD_PATH", db_password_file.path());
    std::env::set_var("APP_DATABASE_HOST", "localhost");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Configuration loaded from files:");
    println!("  API Key: {}", config.api_key);
    println!("  Database Password: {}", config.database_password);
    println!("  Database Host: {}", config.database_host);

    // an unreadable file falls back to the plain variable
    std::env::set_var("APP_API_KEY_FILE", "/run/secrets/not-mounted");
    envconfig::process("app", &mut config)?;
    println!("  API Key without mounted secret: {}", config.api_key);

    Ok(())
}
