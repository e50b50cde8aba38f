//! Scalar machine values.
//!
//! The machine has exactly two value shapes: a signed 32-bit integer and an
//! IEEE-754 single-precision float. The discriminant only changes through
//! the explicit conversion instructions (`i2f`, `f2i`); everything else
//! reads the variant it expects through the total accessors.

use std::fmt;

/// A scalar value held on the operand stack or in the variable store.
///
/// Copied by value everywhere; there is no shared ownership of values.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    /// Signed 32-bit integer.
    Int(i32),
    /// IEEE-754 single-precision float.
    Float(f32),
}

impl Value {
    /// Construct an integer value.
    #[inline]
    pub const fn int(i: i32) -> Self {
        Value::Int(i)
    }

    /// Construct a float value.
    #[inline]
    pub const fn float(f: f32) -> Self {
        Value::Float(f)
    }

    /// Returns `true` if this is an `Int`.
    #[inline]
    pub const fn is_int(self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if this is a `Float`.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// The integer payload, if this is an `Int`.
    #[inline]
    pub const fn as_int(self) -> Option<i32> {
        match self {
            Value::Int(i) => Some(i),
            Value::Float(_) => None,
        }
    }

    /// The float payload, if this is a `Float`.
    #[inline]
    pub const fn as_float(self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(f),
            Value::Int(_) => None,
        }
    }

    /// Widen to `Float`. Identity on values that are already `Float`.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "i2f is defined as conversion to the nearest f32"
    )]
    pub fn to_float(self) -> Self {
        match self {
            Value::Int(i) => Value::Float(i as f32),
            float @ Value::Float(_) => float,
        }
    }

    /// Narrow to `Int`, truncating toward zero. Identity on `Int`.
    #[inline]
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "f2i truncates toward zero by definition"
    )]
    pub fn to_int(self) -> Self {
        match self {
            Value::Float(f) => Value::Int(f as i32),
            int @ Value::Int(_) => int,
        }
    }

    /// Read the value as `f32` without changing what is stored.
    ///
    /// The float binary instructions coerce both operands through this;
    /// the values on the stack keep their original variants.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "transient widening mirrors to_float"
    )]
    pub fn widened(self) -> f32 {
        match self {
            Value::Int(i) => i as f32,
            Value::Float(f) => f,
        }
    }

    /// Name of the variant for diagnostics.
    #[inline]
    pub const fn type_name(self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }
}

impl fmt::Display for Value {
    /// `Int` prints as plain decimal with no fractional part. `Float`
    /// prints with Rust's shortest round-trip formatting, so two builds
    /// of this machine always render the same bits as the same text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}
