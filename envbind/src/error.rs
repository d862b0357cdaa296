//! Error types for environment binding

use std::num::{ParseFloatError, ParseIntError};

use crate::field::FieldKind;

/// Errors that can occur while binding environment variables into a struct.
///
/// Any error aborts the walk. Fields assigned before the failure keep their
/// new values.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The bind target is not a struct.
    ///
    /// Raised before any field is touched.
    #[error("bind target must be a reference to a structure, but `{type_name}` has kind {found}")]
    InvalidArgument {
        /// Type name of the value passed to `bind`
        type_name: &'static str,
        /// Kind the value reported
        found: FieldKind,
    },

    /// A struct handed out a slot that disagrees with its own field table.
    ///
    /// Cannot happen for `#[derive(Bindable)]` structs; indicates a faulty
    /// hand-written `Bindable` implementation.
    #[error("field '{field}' does not provide a {expected} slot")]
    InvalidFieldKind {
        /// Declared field name
        field: &'static str,
        /// Kind the field table promised
        expected: FieldKind,
    },

    /// An environment value could not be converted into the field's type.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

/// Failed to parse an environment variable into a scalar field.
///
/// The raw value is kept for the caller but left out of the message, since
/// environment variables often carry secrets.
#[derive(Debug, thiserror::Error)]
#[error("Failed to parse environment variable '{key}' as {kind}: {cause}")]
pub struct CoercionError {
    /// Composed key the value was read from
    pub key: String,
    /// Kind of the target field
    pub kind: FieldKind,
    /// Value found in the environment
    pub raw_value: String,
    /// Underlying parse failure
    #[source]
    pub cause: CoercionCause,
}

impl CoercionError {
    pub(crate) fn new(
        key: impl Into<String>,
        kind: FieldKind,
        raw_value: impl Into<String>,
        cause: CoercionCause,
    ) -> Self {
        Self {
            key: key.into(),
            kind,
            raw_value: raw_value.into(),
            cause,
        }
    }
}

/// Reason a raw string was rejected by the coercer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoercionCause {
    #[error("{0}")]
    Int(#[from] ParseIntError),

    #[error("{0}")]
    Float(#[from] ParseFloatError),

    #[error("expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
    Bool,

    #[error("unsigned values must not carry a sign")]
    Sign,

    #[error("value out of range for the target type")]
    OutOfRange,

    #[error("target is not a scalar")]
    NotScalar,
}
