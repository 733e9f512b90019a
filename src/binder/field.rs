//! Field descriptors and the closed set of supported field kinds.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};
use std::str::FromStr;
use std::time::Duration;

use super::error::CoercionError;

/// Declared type of a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int(IntWidth),
    Bool,
    Float(FloatWidth),
    Duration,
    /// Registered but not bindable; carries the Rust type name.
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Text => f.write_str("string"),
            FieldKind::Int(width) => fmt::Display::fmt(width, f),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Float(width) => fmt::Display::fmt(width, f),
            FieldKind::Duration => f.write_str("duration"),
            FieldKind::Unsupported(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntWidth {
    I8,
    I16,
    I32,
    I64,
    Isize,
}

impl fmt::Display for IntWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            IntWidth::I8 => "i8",
            IntWidth::I16 => "i16",
            IntWidth::I32 => "i32",
            IntWidth::I64 => "i64",
            IntWidth::Isize => "isize",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatWidth {
    F32,
    F64,
}

impl fmt::Display for FloatWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FloatWidth::F32 => "f32",
            FloatWidth::F64 => "f64",
        })
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Signed integer types a field may be declared as.
pub trait SignedInt: sealed::Sealed + FromStr<Err = ParseIntError> + 'static {
    const WIDTH: IntWidth;
}

/// Floating point types a field may be declared as.
pub trait Float: sealed::Sealed + FromStr<Err = ParseFloatError> + 'static {
    const WIDTH: FloatWidth;

    fn is_infinite(&self) -> bool;
}

macro_rules! signed_int {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl SignedInt for $ty {
                const WIDTH: IntWidth = IntWidth::$width;
            }
        )*
    };
}

signed_int!(i8 => I8, i16 => I16, i32 => I32, i64 => I64, isize => Isize);

macro_rules! float {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Float for $ty {
                const WIDTH: FloatWidth = FloatWidth::$width;

                fn is_infinite(&self) -> bool {
                    <$ty>::is_infinite(*self)
                }
            }
        )*
    };
}

float!(f32 => F32, f64 => F64);

pub(crate) type Assign<T> = Box<dyn Fn(&mut T, &str) -> Result<(), CoercionError> + Send + Sync>;

/// Typed write access to one field of `T`.
pub(crate) enum Slot<T> {
    Text(fn(&mut T) -> &mut String),
    Int(IntWidth, Assign<T>),
    Bool(fn(&mut T) -> &mut bool),
    Float(FloatWidth, Assign<T>),
    Duration(fn(&mut T) -> &mut Duration),
    Unsupported(&'static str),
}

impl<T: 'static> Slot<T> {
    pub(crate) fn int<I: SignedInt>(accessor: fn(&mut T) -> &mut I) -> Self {
        Slot::Int(
            I::WIDTH,
            Box::new(move |record: &mut T, raw: &str| {
                *accessor(record) = raw.parse::<I>()?;
                Ok(())
            }),
        )
    }

    pub(crate) fn float<F: Float>(accessor: fn(&mut T) -> &mut F) -> Self {
        Slot::Float(
            F::WIDTH,
            Box::new(move |record: &mut T, raw: &str| {
                *accessor(record) = parse_float::<F>(raw)?;
                Ok(())
            }),
        )
    }

    pub(crate) fn kind(&self) -> FieldKind {
        match self {
            Slot::Text(_) => FieldKind::Text,
            Slot::Int(width, _) => FieldKind::Int(*width),
            Slot::Bool(_) => FieldKind::Bool,
            Slot::Float(width, _) => FieldKind::Float(*width),
            Slot::Duration(_) => FieldKind::Duration,
            Slot::Unsupported(name) => FieldKind::Unsupported(*name),
        }
    }

    /// Coerces `raw` and writes it into the field.
    pub(crate) fn assign(&self, record: &mut T, raw: &str) -> Result<(), CoercionError> {
        match self {
            Slot::Text(accessor) => *accessor(record) = raw.to_string(),
            Slot::Int(_, assign) | Slot::Float(_, assign) => assign(record, raw)?,
            Slot::Bool(accessor) => *accessor(record) = parse_bool(raw)?,
            Slot::Duration(accessor) => *accessor(record) = super::duration::parse_duration(raw)?,
            Slot::Unsupported(kind) => return Err(CoercionError::Unsupported(*kind)),
        }
        Ok(())
    }
}

/// Static metadata for one registered field.
pub(crate) struct FieldSpec<T> {
    pub(crate) name: &'static str,
    pub(crate) env_key: &'static str,
    pub(crate) default: &'static str,
    pub(crate) slot: Slot<T>,
}

/// Public view of a registered field, for listing the variables a schema reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: &'static str,
    pub env_key: &'static str,
    pub default: &'static str,
    pub kind: FieldKind,
}

/// Parses the truthy/falsy literal set, ignoring ASCII case.
pub(crate) fn parse_bool(raw: &str) -> Result<bool, CoercionError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(CoercionError::Bool),
    }
}

/// Parses a float, rejecting finite literals that overflow the target width.
pub(crate) fn parse_float<F: Float>(raw: &str) -> Result<F, CoercionError> {
    let value: F = raw.parse()?;
    if value.is_infinite() && !names_infinity(raw) {
        return Err(CoercionError::FloatOutOfRange(F::WIDTH));
    }
    Ok(value)
}

fn names_infinity(raw: &str) -> bool {
    let digits = raw.trim_start_matches(['+', '-']);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}
