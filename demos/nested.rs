//! Nested and embedded configuration structs

use envconfig::EnvConfig;

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Endpoint {
    #[envconfig(default = "localhost")]
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Shared {
    #[envconfig(default = "eu-west-1")]
    pub region: String,
}

#[derive(Debug, Default, EnvConfig)]
struct Config {
    // APP_PRIMARY_HOST, APP_PRIMARY_PORT
    #[envconfig(nested)]
    pub primary: Endpoint,

    // APP_FALLBACK_HOST, APP_FALLBACK_PORT; always allocated
    #[envconfig(nested)]
    pub fallback: Option<Endpoint>,

    // APP_READER_HOST via the explicit key
    #[envconfig(nested, name = "reader")]
    pub read_replica: Endpoint,

    // APP_REGION, promoted to the parent prefix
    #[envconfig(flatten)]
    pub shared: Shared,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_PRIMARY_HOST", "primary.db");
    std::env::set_var("APP_PRIMARY_PORT", "5432");
    std::env::set_var("APP_FALLBACK_PORT", "6432");
    std::env::set_var("APP_READER_HOST", "reader.db");
    std::env::set_var("APP_REGION", "us-east-2");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Nested configuration:");
    println!("  Primary: {:?}", config.primary);
    println!("  Fallback: {:?}", config.fallback);
    println!("  Reader: {:?}", config.read_replica);
    println!("  Region: {}", config.shared.region);

    Ok(())
}
