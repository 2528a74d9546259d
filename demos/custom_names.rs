//! Custom key names example

use envconfig::EnvConfig;

#[derive(Debug, Default, EnvConfig)]
#[allow(non_snake_case)]
struct Config {
    // APP_REDIS_URL first, then the bare REDIS_URL
    #[envconfig(name = "REDIS_URL")]
    pub redis_connection_string: String,

    // APP_SERVICE_HOST first, then SERVICE_HOST (as injected by Kubernetes)
    #[envconfig(name = "SERVICE_HOST", required)]
    pub host: String,

    // MultiWordACR style names split on case changes: APP_AUTO_SPLIT_VAR
    #[envconfig(split_words)]
    pub AutoSplitVar: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REDIS_URL", "redis://localhost:6379");
    std::env::set_var("SERVICE_HOST", "10.0.0.12");
    std::env::set_var("APP_AUTO_SPLIT_VAR", "split");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Configuration with custom names:");
    println!("  Redis: {}", config.redis_connection_string);
    println!("  Host: {}", config.host);
    println!("  AutoSplitVar: {}", config.AutoSplitVar);

    Ok(())
}
