use crate::BitFieldError;
use alloc::string::String;

/// Arguments that can stand in for an integer index, size or bit value.
///
/// Every primitive integer implements this. Values that don't fit into an
/// `i64` are rejected the same way a non-numeric [`Value`] is, with
/// [`BitFieldError::Type`].
///
/// # Examples
/// ```
/// use light_bitfield::{BitFieldError, Integral, Value};
///
/// assert_eq!(7u8.to_integer(), Ok(7));
/// assert_eq!(Value::Int(-3).to_integer(), Ok(-3));
/// assert_eq!(
///     Value::Str("1".into()).to_integer(),
///     Err(BitFieldError::Type { found: "String" })
/// );
/// ```
pub trait Integral {
    /// Returns the argument as an `i64` or a type error.
    fn to_integer(&self) -> Result<i64, BitFieldError>;
}

macro_rules! impl_integral_lossless {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Integral for $ty {
                #[inline]
                fn to_integer(&self) -> Result<i64, BitFieldError> {
                    Ok(i64::from(*self))
                }
            }
        )+
    };
}

macro_rules! impl_integral_checked {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Integral for $ty {
                #[inline]
                fn to_integer(&self) -> Result<i64, BitFieldError> {
                    i64::try_from(*self).map_err(|_| BitFieldError::Type { found: "Bignum" })
                }
            }
        )+
    };
}

impl_integral_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_integral_checked!(isize, usize, u64, i128, u128);

impl<T: Integral + ?Sized> Integral for &T {
    #[inline]
    fn to_integer(&self) -> Result<i64, BitFieldError> {
        (**self).to_integer()
    }
}

/// A loosely typed argument, as handed over by a dynamically typed caller.
///
/// Only [`Value::Int`] is accepted where an index or bit value is expected;
/// everything else is a [`BitFieldError::Type`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value.
    Nil,
    /// A boolean. Not an integer, so it is never coerced to a bit.
    Bool(bool),
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
}

impl Value {
    /// Name of the variant's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "NilClass",
            Value::Bool(true) => "TrueClass",
            Value::Bool(false) => "FalseClass",
            Value::Int(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Str(_) => "String",
        }
    }
}

impl Integral for Value {
    fn to_integer(&self) -> Result<i64, BitFieldError> {
        match self {
            Value::Int(int) => Ok(*int),
            other => Err(BitFieldError::Type {
                found: other.type_name(),
            }),
        }
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Int(int)
    }
}

impl From<Option<i64>> for Value {
    fn from(int: Option<i64>) -> Self {
        int.map_or(Value::Nil, Value::Int)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.into())
    }
}

/// Coerces an integral argument to a bit: even values become `false`, odd
/// values (negative ones included) become `true`.
#[inline]
pub(crate) fn to_bit<V: Integral + ?Sized>(value: &V) -> Result<bool, BitFieldError> {
    Ok(value.to_integer()? & 1 == 1)
}
