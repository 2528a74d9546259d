//! Lists, maps, durations and JSON values

use envconfig::{EnvConfig, Json};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Default, serde::Deserialize)]
struct RetryPolicy {
    attempts: u32,
    backoff_ms: u64,
}

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    // APP_ALLOWED_ORIGINS=https://a.example,https://b.example
    pub allowed_origins: Vec<String>,

    // APP_WORKER_PORTS=9001,9002
    pub worker_ports: Vec<u16>,

    // APP_COLOR_CODES=red:1,green:2,blue:3
    pub color_codes: HashMap<String, i32>,

    // APP_REQUEST_TIMEOUT=1m30s
    #[envconfig(default = "30s")]
    pub request_timeout: Duration,

    // APP_RETRY={"attempts":3,"backoff_ms":250}
    pub retry: Json<RetryPolicy>,

    // APP_LABELS={"team":"core"} via a custom deserializer
    #[envconfig(deserializer = "serde_json::from_str")]
    pub labels: Option<HashMap<String, String>>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_ALLOWED_ORIGINS", "https://a.example,https://b.example");
    std::env::set_var("APP_WORKER_PORTS", "9001,9002");
    std::env::set_var("APP_COLOR_CODES", "red:1,green:2,blue:3");
    std::env::set_var("APP_REQUEST_TIMEOUT", "1m30s");
    std::env::set_var("APP_RETRY", r#"{"attempts":3,"backoff_ms":250}"#);
    std::env::set_var("APP_LABELS", r#"{"team":"core"}"#);

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Complex configuration:");
    println!("  Allowed origins: {:?}", config.allowed_origins);
    println!("  Worker ports: {:?}", config.worker_ports);
    println!("  Color codes: {:?}", config.color_codes);
    println!("  Request timeout: {:?}", config.request_timeout);
    println!(
        "  Retry: {} attempts, {}ms backoff",
        config.retry.attempts, config.retry.backoff_ms
    );
    println!("  Labels: {:?}", config.labels);

    Ok(())
}
