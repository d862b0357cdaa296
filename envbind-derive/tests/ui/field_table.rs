// The generated table lists fields in declaration order with their tags and kinds

use envbind::{Bindable, FieldKind, FieldTable, IntWidth};

#[derive(Default, Bindable)]
struct Config {
    #[tag(env = "host", yaml = "hostname")]
    pub host: String,

    pub port: u16,

    #[tag(env = "")]
    pub r#type: Vec<String>,
}

fn main() {
    let fields = <Config as FieldTable>::FIELDS;
    assert_eq!(fields.len(), 3);

    assert_eq!(fields[0].name, "host");
    assert_eq!(fields[0].tag("env"), Some("host"));
    assert_eq!(fields[0].tag("yaml"), Some("hostname"));
    assert_eq!(fields[0].kind, FieldKind::String);

    assert_eq!(fields[1].name, "port");
    assert!(fields[1].tags.is_empty());
    assert_eq!(fields[1].kind, FieldKind::Uint(IntWidth::W16));

    assert_eq!(fields[2].name, "type");
    assert_eq!(fields[2].tag("env"), None);
    assert_eq!(fields[2].kind, FieldKind::Unsupported);

    let mut config = Config::default();
    assert_eq!(config.descriptors(), fields);
    assert!(config.field_mut(3).is_none());
}
