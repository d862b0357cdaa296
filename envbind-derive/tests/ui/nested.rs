// Derived structs are fields of other derived structs, directly or behind pointers

use envbind::{Bindable, Field, FieldKind, FieldTable, Slot};

#[derive(Debug, Default, Bindable)]
struct Inner {
    #[tag(env = "val")]
    pub value: i64,
}

#[derive(Debug, Default, Bindable)]
struct Outer {
    #[tag(env = "in")]
    pub inner: Inner,

    pub optional: Option<Inner>,

    pub boxed: Box<Inner>,
}

fn main() {
    assert_eq!(<Inner as Field>::KIND, FieldKind::Struct);

    let fields = <Outer as FieldTable>::FIELDS;
    assert_eq!(fields[0].kind, FieldKind::Struct);
    assert_eq!(fields[1].kind, FieldKind::Pointer);
    assert_eq!(fields[2].kind, FieldKind::Pointer);

    let mut outer = Outer::default();
    match outer.slot() {
        Slot::Struct(root) => match root.field_mut(0) {
            Some(Slot::Struct(inner)) => assert_eq!(inner.descriptors().len(), 1),
            other => panic!("unexpected slot {other:?}"),
        },
        other => panic!("unexpected slot {other:?}"),
    }
}
