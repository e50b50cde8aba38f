//! Binary operator implementations.
//!
//! Direct enum-based dispatch for the two operator families. The type set
//! is fixed (int and float only), so pattern matching is preferred over
//! any table of function pointers, since exhaustiveness checking catches a
//! missing operator at compile time.
//!
//! In both families `a` is the left-hand operand: the executor pops the
//! right-hand operand first, so `a` sat second from the top.

use crate::errors::{divide_by_zero, type_mismatch, KindResult};
use mica_ir::Value;

/// Integer binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntBinaryOp {
    /// `iadd`
    Add,
    /// `isub`
    Sub,
    /// `imul`
    Mul,
    /// `idiv`
    Div,
    /// `irem`
    Rem,
    /// `iand`
    And,
    /// `ior`
    Or,
    /// `ieq`
    Eq,
    /// `ineq`
    Neq,
    /// `ilt`
    Lt,
    /// `igt`
    Gt,
}

/// Float binary operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloatBinaryOp {
    /// `fadd`
    Add,
    /// `fsub`
    Sub,
    /// `fmul`
    Mul,
    /// `fdiv`
    Div,
    /// `feq`
    Eq,
    /// `fneq`
    Neq,
    /// `flt`
    Lt,
    /// `fgt`
    Gt,
}

/// Evaluate an integer binary operator.
///
/// Both operands must be `Int`; a float on either side is a type
/// mismatch. Arithmetic wraps on i32 (two's complement), and `Rem` is
/// `a - (a/b)*b` under truncating division (the remainder, not a
/// floored modulo). Comparisons push 1 or 0.
pub fn eval_int_binary(op: IntBinaryOp, a: Value, b: Value) -> KindResult<Value> {
    let (Some(a), Some(b)) = (a.as_int(), b.as_int()) else {
        let got = if a.is_int() { b.type_name() } else { a.type_name() };
        return Err(type_mismatch("int", got));
    };
    let result = match op {
        IntBinaryOp::Add => a.wrapping_add(b),
        IntBinaryOp::Sub => a.wrapping_sub(b),
        IntBinaryOp::Mul => a.wrapping_mul(b),
        IntBinaryOp::Div => {
            if b == 0 {
                return Err(divide_by_zero());
            }
            a.wrapping_div(b)
        }
        IntBinaryOp::Rem => {
            if b == 0 {
                return Err(divide_by_zero());
            }
            a.wrapping_sub(a.wrapping_div(b).wrapping_mul(b))
        }
        IntBinaryOp::And => a & b,
        IntBinaryOp::Or => a | b,
        IntBinaryOp::Eq => i32::from(a == b),
        IntBinaryOp::Neq => i32::from(a != b),
        IntBinaryOp::Lt => i32::from(a < b),
        IntBinaryOp::Gt => i32::from(a > b),
    };
    Ok(Value::int(result))
}

/// Evaluate a float binary operator.
///
/// Either operand may be `Int` or `Float`; both are widened transiently
/// for the computation (the stack values themselves are untouched).
/// Arithmetic pushes a `Float`; comparisons push `Int` 1 or 0.
#[expect(
    clippy::float_cmp,
    reason = "feq/fneq and the fdiv zero guard are defined as exact IEEE comparison"
)]
pub fn eval_float_binary(op: FloatBinaryOp, a: Value, b: Value) -> KindResult<Value> {
    let a = a.widened();
    let b = b.widened();
    let result = match op {
        FloatBinaryOp::Add => a + b,
        FloatBinaryOp::Sub => a - b,
        FloatBinaryOp::Mul => a * b,
        FloatBinaryOp::Div => {
            if b == 0.0 {
                return Err(divide_by_zero());
            }
            a / b
        }
        FloatBinaryOp::Eq => return Ok(Value::int(i32::from(a == b))),
        FloatBinaryOp::Neq => return Ok(Value::int(i32::from(a != b))),
        FloatBinaryOp::Lt => return Ok(Value::int(i32::from(a < b))),
        FloatBinaryOp::Gt => return Ok(Value::int(i32::from(a > b))),
    };
    Ok(Value::float(result))
}
