//! Populate nested structs in place from environment variables
//!
//! `envbind` walks the fields of a struct, composes an environment variable
//! name for every scalar leaf from the path that leads to it, and assigns
//! the parsed value when the variable is set.
//!
//! # Features
//!
//! - **Hierarchical keys**: nested structs join their segments with a delimiter (`DB_POOL_SIZE`)
//! - **In place**: binds into an existing value, so defaults are whatever the caller set
//! - **Lazy pointers**: empty `Option<T>` fields are filled with `T::default()` before descending
//! - **Preserve mode**: optionally leave fields that already hold a non-zero value alone
//! - **Static**: field tables are generated by `#[derive(Bindable)]`, no runtime reflection
//!
//! # Key composition
//!
//! Each field contributes one segment:
//! - the value of its tag under the configured tag name, uppercased
//! - otherwise its field name, uppercased, if name fallback is enabled
//! - otherwise nothing
//!
//! Segments are joined with the delimiter from the root down to the leaf.
//! `Option<T>` and `Box<T>` levels add no segment of their own; the field's
//! segment is applied once, to the value they hold.
//!
//! # Value Parsing
//!
//! - Strings: taken verbatim
//! - Integers: base 10, at the field's width (`300` does not fit a `u8`)
//! - Floats: `f32` or `f64`; finite values that overflow the width are rejected
//! - Booleans: `1 t T TRUE true True` and `0 f F FALSE false False`
//!
//! Unset and empty variables leave the field untouched. Collections, maps,
//! channels, function pointers and `Box<dyn Any>` fields are skipped.
//!
//! # Example
//!
//! ```rust
//! use envbind::{Bindable, Binder};
//!
//! #[derive(Debug, Default, Bindable)]
//! struct Database {
//!     #[tag(env = "host")]
//!     pub host: String,
//!
//!     #[tag(env = "port")]
//!     pub port: u16,
//! }
//!
//! #[derive(Debug, Default, Bindable)]
//! struct Config {
//!     #[tag(env = "db")]
//!     pub database: Database,
//!
//!     #[tag(env = "debug")]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("DB_HOST", "db.internal");
//! #     std::env::set_var("DB_PORT", "5432");
//! let mut config = Config::default();
//! Binder::new("env", "_", false, false).bind(&mut config)?;
//! assert_eq!(config.database.host, "db.internal");
//! assert_eq!(config.database.port, 5432);
//! assert!(!config.debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[tag(name = "segment", ...)]`
//!
//! Attach explicit key segments to a field, one per tag name. A binder only
//! reads the tag named in its configuration, so one struct can serve several
//! naming schemes.
//!
//! ```rust
//! # use envbind::{Bindable, Binder};
//! # use std::collections::HashMap;
//! #[derive(Default, Bindable)]
//! struct Config {
//!     #[tag(env = "redis_url", legacy = "cache")]
//!     pub cache_url: String,
//! }
//!
//! let env = HashMap::from([("CACHE".to_string(), "redis://localhost".to_string())]);
//! let mut config = Config::default();
//! Binder::new("legacy", "_", false, false).bind_from(&env, &mut config).unwrap();
//! assert_eq!(config.cache_url, "redis://localhost");
//! ```
//!
//! ## Pointers
//!
//! ```rust
//! # use envbind::{Bindable, Binder};
//! # use std::collections::HashMap;
//! #[derive(Debug, Default, Bindable)]
//! struct Tls {
//!     #[tag(env = "cert")]
//!     pub cert: String,
//! }
//!
//! #[derive(Debug, Default, Bindable)]
//! struct Server {
//!     #[tag(env = "tls")]
//!     pub tls: Option<Tls>,
//! }
//!
//! let env = HashMap::from([("TLS_CERT".to_string(), "/etc/cert.pem".to_string())]);
//! let mut server = Server::default();
//! Binder::new("env", "_", false, false).bind_from(&env, &mut server).unwrap();
//! assert_eq!(server.tls.unwrap().cert, "/etc/cert.pem");
//! ```
//!
//! ## `#[bind(skip)]`
//!
//! Leave a field alone. Its type does not need to implement [`Field`], which
//! covers trait objects, shared handles and callbacks.
//!
//! ```rust
//! # use envbind::{Bindable, Binder};
//! # use std::collections::HashMap;
//! # use std::sync::Arc;
//! #[derive(Bindable)]
//! struct Worker {
//!     #[tag(env = "name")]
//!     pub name: String,
//!     #[bind(skip)]
//!     pub pool: Arc<Vec<u8>>,
//! }
//!
//! let env = HashMap::from([("NAME".to_string(), "indexer".to_string())]);
//! let mut worker = Worker { name: String::new(), pool: Arc::new(vec![1]) };
//! Binder::new("env", "_", true, false).bind_from(&env, &mut worker).unwrap();
//! assert_eq!(worker.name, "indexer");
//! assert_eq!(*worker.pool, vec![1]);
//! ```

mod binder;
mod coerce;
mod config;
mod env;
mod error;
mod field;
mod key;

pub use binder::Binder;
pub use coerce::{coerce, Scalar};
pub use config::BinderConfig;
pub use env::{Environment, ProcessEnv};
pub use envbind_derive::Bindable;
pub use error::{BindError, CoercionCause, CoercionError};
pub use field::{
    Bindable, Field, FieldDescriptor, FieldKind, FieldTable, FloatWidth, IntWidth, PointerSlot,
    ScalarSlot, Slot,
};
