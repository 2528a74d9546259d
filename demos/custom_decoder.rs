//! Custom field types via the `Decode` hooks and the `Coerce` trait

use envconfig::{BoxError, Coerce, Decode, EnvConfig};

/// Decoded from a whole value such as `warn`.
#[derive(Debug, Default)]
enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
}

impl Decode for LogLevel {
    fn decode(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
        *self = match raw.to_ascii_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" => LogLevel::Warn,
            other => return Some(Err(format!("unknown log level {other:?}").into())),
        };
        Some(Ok(()))
    }
}

/// Set from a single token; `a.b.c` becomes three labels.
#[derive(Debug, Default)]
struct Labels(Vec<String>);

impl Decode for Labels {
    fn set(&mut self, raw: &str) -> Option<Result<(), BoxError>> {
        self.0 = raw.split('.').map(str::to_string).collect();
        Some(Ok(()))
    }
}

/// Usable inside lists because it implements `Coerce`.
#[derive(Debug)]
struct Percent(u8);

impl Coerce for Percent {
    fn coerce(raw: &str) -> Result<Self, BoxError> {
        let value: u8 = raw.trim_end_matches('%').parse()?;
        if value > 100 {
            return Err(format!("{value}% is above 100%").into());
        }
        Ok(Percent(value))
    }

    fn description() -> String {
        "Percentage".to_string()
    }
}

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    #[envconfig(decoder, default = "info")]
    pub log_level: LogLevel,

    #[envconfig(decoder)]
    pub labels: Labels,

    pub rollout_steps: Vec<Percent>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_LOG_LEVEL", "WARN");
    std::env::set_var("APP_LABELS", "eu.west.primary");
    std::env::set_var("APP_ROLLOUT_STEPS", "10%,50%,100%");

    let mut config = Config::default();
    envconfig::process("app", &mut config)?;

    println!("Custom types:");
    println!("  Log level: {:?}", config.log_level);
    println!("  Labels: {:?}", config.labels);
    println!("  Rollout steps: {:?}", config.rollout_steps);

    std::env::set_var("APP_ROLLOUT_STEPS", "10%,150%");
    if let Err(e) = envconfig::process("app", &mut Config::default()) {
        println!("Rejected: {e}");
    }

    Ok(())
}
