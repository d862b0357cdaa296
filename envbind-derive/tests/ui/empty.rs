// A struct without fields binds as a no-op

use envbind::{Bindable, Binder, FieldTable};

#[derive(Default, Bindable)]
struct Empty {}

fn main() {
    assert!(<Empty as FieldTable>::FIELDS.is_empty());
    Binder::new("env", "_", true, false)
        .bind(&mut Empty::default())
        .unwrap();
}
