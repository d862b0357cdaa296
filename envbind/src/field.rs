//! Static field model used by the binder.
//!
//! Every type that can appear as a field of a bindable struct implements
//! [`Field`], which reports its [`FieldKind`] at compile time and hands out a
//! mutable [`Slot`] at bind time. Structs get their implementation from
//! `#[derive(Bindable)]`; scalars, pointers and the unsupported collection
//! types are covered here.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::sync::mpsc::{Receiver, Sender};

/// Bit width of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    W8,
    W16,
    W32,
    W64,
    /// Pointer width (`isize` / `usize`).
    Size,
}

/// Bit width of a floating point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    W32,
    W64,
}

/// Kind of a field, as seen by the binder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A nested bindable struct.
    Struct,
    /// An owned optional or boxed value, materialized on demand.
    Pointer,
    Bool,
    String,
    /// Signed integer.
    Int(IntWidth),
    /// Unsigned integer.
    Uint(IntWidth),
    Float(FloatWidth),
    /// Collections, maps, channels, functions and dynamic values. Never bound.
    Unsupported,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Struct => "struct",
            Self::Pointer => "pointer",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Int(IntWidth::W8) => "i8",
            Self::Int(IntWidth::W16) => "i16",
            Self::Int(IntWidth::W32) => "i32",
            Self::Int(IntWidth::W64) => "i64",
            Self::Int(IntWidth::Size) => "isize",
            Self::Uint(IntWidth::W8) => "u8",
            Self::Uint(IntWidth::W16) => "u16",
            Self::Uint(IntWidth::W32) => "u32",
            Self::Uint(IntWidth::W64) => "u64",
            Self::Uint(IntWidth::Size) => "usize",
            Self::Float(FloatWidth::W32) => "f32",
            Self::Float(FloatWidth::W64) => "f64",
            Self::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Compile-time description of one struct field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name.
    pub name: &'static str,
    /// `(tag name, value)` pairs from `#[tag(...)]`.
    pub tags: &'static [(&'static str, &'static str)],
    /// Kind of the declared field type.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Create a descriptor (used by macro-generated code)
    pub const fn new(
        name: &'static str,
        tags: &'static [(&'static str, &'static str)],
        kind: FieldKind,
    ) -> Self {
        Self { name, tags, kind }
    }

    /// Value of the tag named `tag_name`, if present and non-empty.
    pub fn tag(&self, tag_name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(name, _)| *name == tag_name)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty())
    }
}

/// Mutable access to one field during a bind.
pub enum Slot<'a> {
    Struct(&'a mut dyn Bindable),
    Pointer(&'a mut dyn PointerSlot),
    Scalar(&'a mut dyn ScalarSlot),
    Unsupported,
}

impl Slot<'_> {
    /// Kind of the value behind this slot.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Struct(_) => FieldKind::Struct,
            Self::Pointer(_) => FieldKind::Pointer,
            Self::Scalar(scalar) => scalar.kind(),
            Self::Unsupported => FieldKind::Unsupported,
        }
    }
}

impl fmt::Debug for Slot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.kind()).finish()
    }
}

/// A type that may appear as a field of a bindable struct.
pub trait Field {
    /// Kind reported in the owning struct's field table.
    const KIND: FieldKind;

    /// Borrow this value as a slot the binder can walk or assign.
    fn slot(&mut self) -> Slot<'_>;
}

/// A struct whose fields the binder can enumerate.
///
/// Implemented by `#[derive(Bindable)]`. Hand-written implementations must
/// return a slot for every index below `descriptors().len()` whose kind
/// matches the descriptor at that index.
pub trait Bindable {
    /// Field table in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Slot for the field at `index`, or `None` if there is no such field.
    fn field_mut(&mut self, index: usize) -> Option<Slot<'_>>;
}

/// Compile-time field table of a bindable struct.
///
/// Kept apart from [`Bindable`] so that the latter stays object safe.
pub trait FieldTable {
    const FIELDS: &'static [FieldDescriptor];
}

/// Setter contract for scalar leaves.
///
/// Each setter returns `false` when the slot cannot hold the value, either
/// because it is of another kind or because the value exceeds its width.
pub trait ScalarSlot {
    fn kind(&self) -> FieldKind;

    /// Whether the current value is the zero value of its type.
    fn is_zero(&self) -> bool;

    fn set_bool(&mut self, _value: bool) -> bool {
        false
    }

    fn set_string(&mut self, _value: String) -> bool {
        false
    }

    fn set_int(&mut self, _value: i64) -> bool {
        false
    }

    fn set_uint(&mut self, _value: u64) -> bool {
        false
    }

    fn set_float(&mut self, _value: f64) -> bool {
        false
    }
}

/// An owned reference to a value that may not exist yet.
pub trait PointerSlot {
    /// Whether a pointee is present.
    fn is_materialized(&self) -> bool;

    /// Allocate a default pointee if none is present and borrow it.
    ///
    /// Calling this on a populated slot leaves the pointee untouched.
    fn materialize(&mut self) -> Slot<'_>;
}

impl Field for bool {
    const KIND: FieldKind = FieldKind::Bool;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

impl ScalarSlot for bool {
    fn kind(&self) -> FieldKind {
        FieldKind::Bool
    }

    fn is_zero(&self) -> bool {
        !*self
    }

    fn set_bool(&mut self, value: bool) -> bool {
        *self = value;
        true
    }
}

impl Field for String {
    const KIND: FieldKind = FieldKind::String;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

impl ScalarSlot for String {
    fn kind(&self) -> FieldKind {
        FieldKind::String
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn set_string(&mut self, value: String) -> bool {
        *self = value;
        true
    }
}

macro_rules! integer_field {
    ($($ty:ty => $kind:ident($width:ident) via $setter:ident($wide:ty)),* $(,)?) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::$kind(IntWidth::$width);

                fn slot(&mut self) -> Slot<'_> {
                    Slot::Scalar(self)
                }
            }

            impl ScalarSlot for $ty {
                fn kind(&self) -> FieldKind {
                    <Self as Field>::KIND
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn $setter(&mut self, value: $wide) -> bool {
                    match <$ty>::try_from(value) {
                        Ok(value) => {
                            *self = value;
                            true
                        }
                        Err(_) => false,
                    }
                }
            }
        )*
    };
}

integer_field! {
    i8 => Int(W8) via set_int(i64),
    i16 => Int(W16) via set_int(i64),
    i32 => Int(W32) via set_int(i64),
    i64 => Int(W64) via set_int(i64),
    isize => Int(Size) via set_int(i64),
    u8 => Uint(W8) via set_uint(u64),
    u16 => Uint(W16) via set_uint(u64),
    u32 => Uint(W32) via set_uint(u64),
    u64 => Uint(W64) via set_uint(u64),
    usize => Uint(Size) via set_uint(u64),
}

impl Field for f32 {
    const KIND: FieldKind = FieldKind::Float(FloatWidth::W32);

    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

impl ScalarSlot for f32 {
    fn kind(&self) -> FieldKind {
        <Self as Field>::KIND
    }

    // Negative zero is not the zero value.
    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }

    fn set_float(&mut self, value: f64) -> bool {
        let narrowed = value as f32;
        if narrowed.is_infinite() && value.is_finite() {
            return false;
        }
        *self = narrowed;
        true
    }
}

impl Field for f64 {
    const KIND: FieldKind = FieldKind::Float(FloatWidth::W64);

    fn slot(&mut self) -> Slot<'_> {
        Slot::Scalar(self)
    }
}

impl ScalarSlot for f64 {
    fn kind(&self) -> FieldKind {
        <Self as Field>::KIND
    }

    fn is_zero(&self) -> bool {
        self.to_bits() == 0
    }

    fn set_float(&mut self, value: f64) -> bool {
        *self = value;
        true
    }
}

impl<T: Field + Default> Field for Option<T> {
    const KIND: FieldKind = FieldKind::Pointer;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Field + Default> PointerSlot for Option<T> {
    fn is_materialized(&self) -> bool {
        self.is_some()
    }

    fn materialize(&mut self) -> Slot<'_> {
        self.get_or_insert_with(T::default).slot()
    }
}

impl<T: Field> Field for Box<T> {
    const KIND: FieldKind = FieldKind::Pointer;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Pointer(self)
    }
}

impl<T: Field> PointerSlot for Box<T> {
    fn is_materialized(&self) -> bool {
        true
    }

    fn materialize(&mut self) -> Slot<'_> {
        (**self).slot()
    }
}

macro_rules! unsupported_field {
    ($(impl<$($param:ident),*> for $ty:ty;)*) => {
        $(
            impl<$($param),*> Field for $ty {
                const KIND: FieldKind = FieldKind::Unsupported;

                fn slot(&mut self) -> Slot<'_> {
                    Slot::Unsupported
                }
            }
        )*
    };
}

unsupported_field! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<K, V, S> for HashMap<K, V, S>;
    impl<K, V> for BTreeMap<K, V>;
    impl<T, S> for HashSet<T, S>;
    impl<T> for BTreeSet<T>;
    impl<T> for Sender<T>;
    impl<T> for Receiver<T>;
    impl<R> for fn() -> R;
    impl<A, R> for fn(A) -> R;
    impl<A, B, R> for fn(A, B) -> R;
    impl<> for Box<dyn Any>;
    impl<> for Box<dyn Any + Send>;
    impl<> for Box<dyn Any + Send + Sync>;
}

impl<T, const N: usize> Field for [T; N] {
    const KIND: FieldKind = FieldKind::Unsupported;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(<bool as Field>::KIND, FieldKind::Bool);
        assert_eq!(<String as Field>::KIND, FieldKind::String);
        assert_eq!(<i8 as Field>::KIND, FieldKind::Int(IntWidth::W8));
        assert_eq!(<usize as Field>::KIND, FieldKind::Uint(IntWidth::Size));
        assert_eq!(<f32 as Field>::KIND, FieldKind::Float(FloatWidth::W32));
    }

    #[test]
    fn test_container_kinds() {
        assert_eq!(<Option<u8> as Field>::KIND, FieldKind::Pointer);
        assert_eq!(<Box<String> as Field>::KIND, FieldKind::Pointer);
        assert_eq!(<Vec<u8> as Field>::KIND, FieldKind::Unsupported);
        assert_eq!(<[u8; 4] as Field>::KIND, FieldKind::Unsupported);
        assert_eq!(<HashMap<String, String> as Field>::KIND, FieldKind::Unsupported);
        assert_eq!(<Box<dyn Any> as Field>::KIND, FieldKind::Unsupported);
        assert_eq!(<fn() -> u8 as Field>::KIND, FieldKind::Unsupported);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Int(IntWidth::W16).to_string(), "i16");
        assert_eq!(FieldKind::Uint(IntWidth::Size).to_string(), "usize");
        assert_eq!(FieldKind::Float(FloatWidth::W64).to_string(), "f64");
        assert_eq!(FieldKind::Pointer.to_string(), "pointer");
    }

    #[test]
    fn test_descriptor_tag_lookup() {
        let descriptor = FieldDescriptor::new(
            "port",
            &[("env", "PORT"), ("json", ""), ("yaml", "port")],
            FieldKind::Uint(IntWidth::W16),
        );
        assert_eq!(descriptor.tag("env"), Some("PORT"));
        assert_eq!(descriptor.tag("yaml"), Some("port"));
        assert_eq!(descriptor.tag("json"), None);
        assert_eq!(descriptor.tag("toml"), None);
    }

    #[test]
    fn test_integer_setter_rejects_out_of_width() {
        let mut value: u8 = 7;
        assert!(!value.set_uint(256));
        assert_eq!(value, 7);
        assert!(value.set_uint(255));
        assert_eq!(value, 255);
        assert!(!value.set_int(1));
    }

    #[test]
    fn test_setter_rejects_other_kind() {
        let mut flag = false;
        assert!(!flag.set_string("true".to_string()));
        let mut name = String::new();
        assert!(!name.set_bool(true));
    }

    #[test]
    fn test_float_zero_uses_bit_pattern() {
        assert!(0.0_f64.is_zero());
        assert!(!(-0.0_f64).is_zero());
        assert!(0.0_f32.is_zero());
        assert!(!(-0.0_f32).is_zero());
    }

    #[test]
    fn test_f32_setter_rejects_overflow() {
        let mut value: f32 = 1.5;
        assert!(!value.set_float(1e40));
        assert_eq!(value, 1.5);
        assert!(value.set_float(f64::INFINITY));
        assert!(value.is_infinite());
    }

    #[test]
    fn test_option_materializes_once() {
        let mut slot: Option<u32> = None;
        assert!(!slot.is_materialized());
        match slot.materialize() {
            Slot::Scalar(scalar) => assert!(scalar.set_uint(9)),
            other => panic!("unexpected slot {other:?}"),
        }
        assert_eq!(slot, Some(9));

        // A populated pointee is left as is.
        match slot.materialize() {
            Slot::Scalar(scalar) => assert!(!scalar.is_zero()),
            other => panic!("unexpected slot {other:?}"),
        }
        assert_eq!(slot, Some(9));
    }

    #[test]
    fn test_box_is_always_materialized() {
        let mut boxed = Box::new(String::from("kept"));
        assert!(boxed.is_materialized());
        assert_eq!(boxed.materialize().kind(), FieldKind::String);
        assert_eq!(*boxed, "kept");
    }
}
