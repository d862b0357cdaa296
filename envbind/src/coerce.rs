//! Conversion of raw environment strings into scalar values.

use crate::error::CoercionCause;
use crate::field::{FieldKind, FloatWidth, IntWidth, ScalarSlot};

/// A parsed scalar, widened to the largest type of its family.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    String(String),
    Int(i64),
    Uint(u64),
    Float(f64),
}

impl Scalar {
    /// Store this value through the slot's setter for its family.
    ///
    /// Returns `false` if the slot refuses the value.
    pub fn assign(self, slot: &mut dyn ScalarSlot) -> bool {
        match self {
            Self::Bool(value) => slot.set_bool(value),
            Self::String(value) => slot.set_string(value),
            Self::Int(value) => slot.set_int(value),
            Self::Uint(value) => slot.set_uint(value),
            Self::Float(value) => slot.set_float(value),
        }
    }
}

/// Parse `raw` as a value of `kind`.
///
/// Integers are parsed in base 10 at the field's width, so a value that does
/// not fit is an error rather than a truncation. Non-scalar kinds always fail.
pub fn coerce(raw: &str, kind: FieldKind) -> Result<Scalar, CoercionCause> {
    match kind {
        FieldKind::Bool => parse_bool(raw).map(Scalar::Bool),
        FieldKind::String => Ok(Scalar::String(raw.to_string())),
        FieldKind::Int(width) => parse_int(raw, width).map(Scalar::Int),
        FieldKind::Uint(width) => parse_uint(raw, width).map(Scalar::Uint),
        FieldKind::Float(width) => parse_float(raw, width).map(Scalar::Float),
        FieldKind::Struct | FieldKind::Pointer | FieldKind::Unsupported => {
            Err(CoercionCause::NotScalar)
        }
    }
}

fn parse_bool(raw: &str) -> Result<bool, CoercionCause> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(CoercionCause::Bool),
    }
}

fn parse_int(raw: &str, width: IntWidth) -> Result<i64, CoercionCause> {
    let value = match width {
        IntWidth::W8 => i64::from(raw.parse::<i8>()?),
        IntWidth::W16 => i64::from(raw.parse::<i16>()?),
        IntWidth::W32 => i64::from(raw.parse::<i32>()?),
        IntWidth::W64 => raw.parse::<i64>()?,
        IntWidth::Size => {
            i64::try_from(raw.parse::<isize>()?).map_err(|_| CoercionCause::OutOfRange)?
        }
    };
    Ok(value)
}

fn parse_uint(raw: &str, width: IntWidth) -> Result<u64, CoercionCause> {
    // `str::parse` accepts a leading `+` for unsigned types; a sign is not a digit.
    if raw.starts_with('+') {
        return Err(CoercionCause::Sign);
    }
    let value = match width {
        IntWidth::W8 => u64::from(raw.parse::<u8>()?),
        IntWidth::W16 => u64::from(raw.parse::<u16>()?),
        IntWidth::W32 => u64::from(raw.parse::<u32>()?),
        IntWidth::W64 => raw.parse::<u64>()?,
        IntWidth::Size => {
            u64::try_from(raw.parse::<usize>()?).map_err(|_| CoercionCause::OutOfRange)?
        }
    };
    Ok(value)
}

fn parse_float(raw: &str, width: FloatWidth) -> Result<f64, CoercionCause> {
    let value = match width {
        FloatWidth::W32 => f64::from(raw.parse::<f32>()?),
        FloatWidth::W64 => raw.parse::<f64>()?,
    };
    // A finite literal that rounds to infinity does not fit the field.
    if value.is_infinite() && !spells_infinity(raw) {
        return Err(CoercionCause::OutOfRange);
    }
    Ok(value)
}

fn spells_infinity(raw: &str) -> bool {
    let unsigned = raw.trim_start_matches(|c: char| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
