// Generic structs bind as long as every field type is a field

use envbind::{Bindable, Binder, FieldKind, FieldTable, IntWidth};
use std::collections::HashMap;

#[derive(Debug, Default, Bindable)]
struct Limits<T> {
    #[tag(env = "max")]
    pub max: T,

    #[tag(env = "min")]
    pub min: Option<T>,
}

fn main() {
    let fields = <Limits<u8> as FieldTable>::FIELDS;
    assert_eq!(fields[0].kind, FieldKind::Uint(IntWidth::W8));
    assert_eq!(fields[1].kind, FieldKind::Pointer);

    let env: HashMap<String, String> = HashMap::from([
        ("MAX".to_string(), "250".to_string()),
        ("MIN".to_string(), "-3".to_string()),
    ]);

    let mut limits = Limits::<i16>::default();
    Binder::new("env", "_", false, false)
        .bind_from(&env, &mut limits)
        .unwrap();
    assert_eq!(limits.max, 250);
    assert_eq!(limits.min, Some(-3));
}
