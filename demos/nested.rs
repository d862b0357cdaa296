//! Example demonstrating nested structs, pointers and field name fallback
//!
//! Run with `cargo run --example nested` to see the trace of every field.

use envbind::{Bindable, Binder};

#[derive(Debug, Default, Bindable)]
struct Pool {
    pub size: u16,

    // Explicit tag wins over the field name: DATABASE_POOL_IDLE
    #[tag(env = "idle")]
    pub idle_timeout_secs: u64,
}

#[derive(Debug, Default, Bindable)]
struct Database {
    pub host: String,
    pub port: u16,
    pub pool: Pool,
}

#[derive(Debug, Default, Bindable)]
struct Tls {
    pub cert_path: String,
}

#[derive(Debug, Default, Bindable)]
struct Config {
    pub database: Database,

    // Filled with `Tls::default()` before descending: TLS_CERT_PATH
    pub tls: Option<Tls>,

    // Skipped, never an error
    pub allowed_origins: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    std::env::set_var("DATABASE_HOST", "db.internal");
    std::env::set_var("DATABASE_PORT", "5432");
    std::env::set_var("DATABASE_POOL_SIZE", "16");
    std::env::set_var("DATABASE_POOL_IDLE", "300");
    std::env::set_var("TLS_CERT_PATH", "/etc/tls/cert.pem");

    let mut config = Config::default();
    Binder::new("env", "_", true, false).bind(&mut config)?;

    println!("{config:#?}");

    Ok(())
}
