//! Comprehensive example showing multiple features combined

use envconfig::{EnvConfig, EnvError};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Database {
    #[envconfig(required)]
    pub host: String, // APP_DB_HOST

    #[envconfig(default = 5432)]
    pub port: u16, // APP_DB_PORT

    #[envconfig(file_content)]
    pub password: String, // APP_DB_PASSWORD or APP_DB_PASSWORD_FILE
}

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Telemetry {
    #[envconfig(default = "info")]
    pub log_level: String, // APP_LOG_LEVEL
}

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    #[envconfig(required, desc = "service name")]
    pub name: String, // APP_NAME

    pub version: Option<String>, // APP_VERSION

    #[envconfig(default = "8080")]
    pub port: u16, // APP_PORT

    #[envconfig(default = "5s")]
    pub shutdown_grace: Duration, // APP_SHUTDOWN_GRACE

    #[envconfig(name = "SERVICE_HOST")]
    pub host: String, // APP_SERVICE_HOST or SERVICE_HOST

    pub tags: Vec<String>, // APP_TAGS

    pub weights: HashMap<String, f64>, // APP_WEIGHTS

    #[envconfig(nested)]
    pub db: Database, // APP_DB_*

    #[envconfig(flatten)]
    pub telemetry: Telemetry, // APP_*

    #[envconfig(ignored)]
    pub started_at: Option<std::time::Instant>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_NAME", "my-application");
    std::env::set_var("APP_VERSION", "1.0.0");
    std::env::set_var("SERVICE_HOST", "10.0.0.7");
    std::env::set_var("APP_TAGS", "production,api");
    std::env::set_var("APP_WEIGHTS", "primary:0.8,replica:0.2");
    std::env::set_var("APP_DB_HOST", "db.internal");
    std::env::set_var("APP_DB_PASSWORD", "local-only");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Comprehensive Configuration:");
    println!("  Name: {}", config.name);
    println!("  Version: {:?}", config.version);
    println!("  Port: {}", config.port);
    println!("  Shutdown grace: {:?}", config.shutdown_grace);
    println!("  Host: {}", config.host);
    println!("  Tags: {:?}", config.tags);
    println!("  Weights: {:?}", config.weights);
    println!("  Database: {}:{}", config.db.host, config.db.port);
    println!("  Log level: {}", config.telemetry.log_level);

    // every failing field is reported at once
    std::env::remove_var("APP_NAME");
    std::env::set_var("APP_PORT", "eighty");
    if let Err(EnvError::Multiple(errors)) = envconfig::process("app", &mut Config::default()) {
        println!("Rejected configuration:");
        for error in errors {
            println!("  - {error}");
        }
    }

    Ok(())
}
