//! Printing the variables an application reads

use envconfig::EnvConfig;
use std::time::Duration;

#[derive(Debug, Default, EnvConfig)]
#[envconfig(split_words)]
struct Config {
    #[envconfig(required, desc = "public URL of the service")]
    pub base_url: String,

    #[envconfig(default = 8080, desc = "listen port")]
    pub port: u16,

    #[envconfig(default = "30s", desc = "upstream request timeout")]
    pub request_timeout: Duration,

    #[envconfig(desc = "users allowed to call admin endpoints")]
    pub admin_users: Vec<String>,

    #[envconfig(name = "SERVICE_HOST", desc = "bind address")]
    pub host: String,
}

fn main() -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    envconfig::usage::<Config>("myapp", &mut stdout.lock())?;

    // refuse typos such as MYAPP_PROT
    std::env::set_var("MYAPP_PROT", "9090");
    if let Err(e) = envconfig::check_disallowed::<Config>("myapp") {
        eprintln!("{e}");
    }

    Ok(())
}
