//! Runtime limits.
//!
//! Limits specify constraints only; enforcement lives in the stack and
//! store. Each limit names the configured space, and the live structure
//! may occupy at most half of it.

/// Size limits for one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Configured operand-stack space. The stack holds at most half of
    /// this many values.
    pub operand_stack_size: usize,
    /// Configured local-variable space. The store holds at most half of
    /// this many distinct names.
    pub local_var_space: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            operand_stack_size: 32,
            local_var_space: 32,
        }
    }
}

impl Limits {
    /// Maximum number of values the operand stack may hold.
    #[inline]
    pub const fn stack_bound(self) -> usize {
        self.operand_stack_size / 2
    }

    /// Maximum number of distinct names the variable store may hold.
    #[inline]
    pub const fn store_bound(self) -> usize {
        self.local_var_space / 2
    }

    /// Replace the operand-stack space.
    #[inline]
    #[must_use]
    pub const fn with_operand_stack_size(mut self, size: usize) -> Self {
        self.operand_stack_size = size;
        self
    }

    /// Replace the local-variable space.
    #[inline]
    #[must_use]
    pub const fn with_local_var_space(mut self, size: usize) -> Self {
        self.local_var_space = size;
        self
    }
}
