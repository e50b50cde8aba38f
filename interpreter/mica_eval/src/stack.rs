//! Bounded operand stack.

use crate::errors::{stack_empty, stack_full, KindResult};
use mica_ir::Value;

/// Last-in-first-out buffer of values with a hard capacity bound.
///
/// All access is at the tail. The bound is checked on push, never
/// resized; pop and peek fail on an empty stack.
#[derive(Debug)]
pub struct OperandStack {
    values: Vec<Value>,
    bound: usize,
}

impl OperandStack {
    /// Create an empty stack holding at most `bound` values.
    pub fn with_bound(bound: usize) -> Self {
        OperandStack {
            values: Vec::with_capacity(bound),
            bound,
        }
    }

    /// Append a value at the tail.
    ///
    /// Fails with `StackFull` exactly when the stack already holds
    /// `bound` values, never earlier.
    pub fn push(&mut self, value: Value) -> KindResult<()> {
        if self.values.len() == self.bound {
            return Err(stack_full());
        }
        self.values.push(value);
        Ok(())
    }

    /// Remove and return the tail value.
    pub fn pop(&mut self) -> KindResult<Value> {
        self.values.pop().ok_or_else(stack_empty)
    }

    /// Return the tail value without removing it.
    pub fn peek(&self) -> KindResult<Value> {
        self.values.last().copied().ok_or_else(stack_empty)
    }

    /// Discard every value. Never fails.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of values currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
