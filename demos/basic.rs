//! Basic usage example

use envbind::{Bindable, Binder};

#[derive(Debug, Default, Bindable)]
struct Config {
    // Loaded from DATABASE_URL
    #[tag(env = "database_url")]
    pub database_url: String,

    // Loaded from MAX_CONNECTIONS, keeps 10 when unset
    #[tag(env = "max_connections")]
    pub max_connections: u32,

    // Loaded from DEBUG
    #[tag(env = "debug")]
    pub debug_mode: bool,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG", "true");

    let mut config = Config {
        max_connections: 10,
        ..Config::default()
    };
    Binder::new("env", "_", false, false).bind(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);

    Ok(())
}
