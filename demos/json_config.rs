//! Example demonstrating a binder configured from JSON and an explicit source

use envbind::{Bindable, Binder, BinderConfig};
use std::collections::HashMap;

#[derive(Debug, Default, Bindable)]
struct Limits {
    #[tag(cfg = "rps")]
    pub requests_per_second: f64,

    #[tag(cfg = "burst")]
    pub burst: u32,
}

#[derive(Debug, Default, Bindable)]
struct Config {
    #[tag(cfg = "limits")]
    pub limits: Limits,
}

fn main() -> anyhow::Result<()> {
    let config = BinderConfig::from_json(
        r#"{
            "tag_name": "cfg",
            "delimiter": ".",
            "use_field_name_fallback": false,
            "skip_non_zero": false
        }"#,
    )?;
    let binder = Binder::from_config(config);

    // Any `Environment` works as a source, here a plain map
    let source = HashMap::from([
        ("LIMITS.RPS".to_string(), "12.5".to_string()),
        ("LIMITS.BURST".to_string(), "40".to_string()),
    ]);

    let mut settings = Config::default();
    binder.bind_from(&source, &mut settings)?;

    println!("Limits:");
    println!("  Requests per second: {}", settings.limits.requests_per_second);
    println!("  Burst: {}", settings.limits.burst);

    Ok(())
}
