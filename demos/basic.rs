//! Basic usage example

use envconfig::EnvConfig;

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    // MYAPP_DATABASE_URL
    #[envconfig(required)]
    pub database_url: String,

    // MYAPP_PORT, 8080 when unset
    #[envconfig(default = 8080)]
    pub port: u16,

    // MYAPP_DEBUG, left false when unset
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("MYAPP_DEBUG", "true");

    let mut config = Config::default();
    envconfig::process("myapp", &mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
