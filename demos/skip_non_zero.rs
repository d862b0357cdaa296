//! Example demonstrating values set in code taking precedence over the environment

use envbind::{Bindable, Binder};

#[derive(Debug, Default, Bindable)]
struct Config {
    #[tag(env = "app_host")]
    pub host: String,

    #[tag(env = "app_port")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("APP_HOST", "0.0.0.0");
    std::env::set_var("APP_PORT", "3000");

    // `port` is already set, so APP_PORT is ignored; `host` is empty and bound
    let mut config = Config {
        port: 8080,
        ..Config::default()
    };
    Binder::new("env", "_", false, true).bind(&mut config)?;

    println!("Configuration with preserved values:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);

    Ok(())
}
