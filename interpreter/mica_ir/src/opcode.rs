//! Instruction mnemonics.
//!
//! The instruction set is fixed (not user-extensible), so decoding is a
//! single exact-match table lookup and dispatch elsewhere is enum-based
//! pattern matching for exhaustiveness checking.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// One instruction mnemonic recognized by the executor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// Push an integer literal.
    Iconst,
    /// Push a float literal.
    Fconst,
    /// Push an int variable from the store.
    Iload,
    /// Push a float variable from the store.
    Fload,
    /// Pop an int into the store.
    Istore,
    /// Pop a float into the store.
    Fstore,
    /// Print a stored variable's value.
    Val,
    /// Print the parent name of a variable on its search path.
    Par,
    /// Integer add.
    Iadd,
    /// Float add.
    Fadd,
    /// Integer subtract.
    Isub,
    /// Float subtract.
    Fsub,
    /// Integer multiply.
    Imul,
    /// Float multiply.
    Fmul,
    /// Integer divide (truncating).
    Idiv,
    /// Float divide.
    Fdiv,
    /// Integer remainder under truncating division.
    Irem,
    /// Integer negate.
    Ineg,
    /// Float negate (widens an int operand).
    Fneg,
    /// Bitwise and.
    Iand,
    /// Bitwise or.
    Ior,
    /// Integer equality, pushes 1 or 0.
    Ieq,
    /// Float equality, pushes 1 or 0.
    Feq,
    /// Integer inequality, pushes 1 or 0.
    Ineq,
    /// Float inequality, pushes 1 or 0.
    Fneq,
    /// Integer less-than, pushes 1 or 0.
    Ilt,
    /// Float less-than, pushes 1 or 0.
    Flt,
    /// Integer greater-than, pushes 1 or 0.
    Igt,
    /// Float greater-than, pushes 1 or 0.
    Fgt,
    /// Boolean not: 1 if the popped int is 0, else 0.
    Ibnot,
    /// Convert the top int to float.
    I2f,
    /// Convert the top float to int, truncating.
    F2i,
    /// Print the top of the stack without popping.
    Top,
}

/// Shape of the single optional operand an opcode consumes from the
/// instruction stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OperandKind {
    /// No operand.
    None,
    /// A signed 32-bit integer literal.
    Int,
    /// A single-precision float literal.
    Float,
    /// A variable name (any non-whitespace token).
    Name,
}

impl Opcode {
    /// Every opcode, in instruction-set order.
    pub const ALL: [Opcode; 33] = [
        Opcode::Iconst,
        Opcode::Fconst,
        Opcode::Iload,
        Opcode::Fload,
        Opcode::Istore,
        Opcode::Fstore,
        Opcode::Val,
        Opcode::Par,
        Opcode::Iadd,
        Opcode::Fadd,
        Opcode::Isub,
        Opcode::Fsub,
        Opcode::Imul,
        Opcode::Fmul,
        Opcode::Idiv,
        Opcode::Fdiv,
        Opcode::Irem,
        Opcode::Ineg,
        Opcode::Fneg,
        Opcode::Iand,
        Opcode::Ior,
        Opcode::Ieq,
        Opcode::Feq,
        Opcode::Ineq,
        Opcode::Fneq,
        Opcode::Ilt,
        Opcode::Flt,
        Opcode::Igt,
        Opcode::Fgt,
        Opcode::Ibnot,
        Opcode::I2f,
        Opcode::F2i,
        Opcode::Top,
    ];

    /// Decode a mnemonic token.
    ///
    /// Exact-match table lookup: the first (only) exact match wins, and
    /// there is no fallback decoding for unrecognized tokens; reporting
    /// those is the caller's job.
    pub fn parse(token: &str) -> Option<Opcode> {
        static TABLE: OnceLock<FxHashMap<&'static str, Opcode>> = OnceLock::new();
        let table = TABLE
            .get_or_init(|| Opcode::ALL.iter().map(|op| (op.mnemonic(), *op)).collect());
        table.get(token).copied()
    }

    /// The textual mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Iconst => "iconst",
            Opcode::Fconst => "fconst",
            Opcode::Iload => "iload",
            Opcode::Fload => "fload",
            Opcode::Istore => "istore",
            Opcode::Fstore => "fstore",
            Opcode::Val => "val",
            Opcode::Par => "par",
            Opcode::Iadd => "iadd",
            Opcode::Fadd => "fadd",
            Opcode::Isub => "isub",
            Opcode::Fsub => "fsub",
            Opcode::Imul => "imul",
            Opcode::Fmul => "fmul",
            Opcode::Idiv => "idiv",
            Opcode::Fdiv => "fdiv",
            Opcode::Irem => "irem",
            Opcode::Ineg => "ineg",
            Opcode::Fneg => "fneg",
            Opcode::Iand => "iand",
            Opcode::Ior => "ior",
            Opcode::Ieq => "ieq",
            Opcode::Feq => "feq",
            Opcode::Ineq => "ineq",
            Opcode::Fneq => "fneq",
            Opcode::Ilt => "ilt",
            Opcode::Flt => "flt",
            Opcode::Igt => "igt",
            Opcode::Fgt => "fgt",
            Opcode::Ibnot => "ibnot",
            Opcode::I2f => "i2f",
            Opcode::F2i => "f2i",
            Opcode::Top => "top",
        }
    }

    /// The operand this opcode consumes from the instruction stream.
    pub const fn operand_kind(self) -> OperandKind {
        match self {
            Opcode::Iconst => OperandKind::Int,
            Opcode::Fconst => OperandKind::Float,
            Opcode::Iload
            | Opcode::Fload
            | Opcode::Istore
            | Opcode::Fstore
            | Opcode::Val
            | Opcode::Par => OperandKind::Name,
            _ => OperandKind::None,
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests;
