//! Instruction decoding.
//!
//! Turns the raw token stream into typed instructions. Each `Instruction`
//! variant carries the operand its opcode calls for, so an executor can
//! never read the wrong operand shape; the mismatch is unrepresentable.
//!
//! The stream owns the 1-based instruction counter: it advances after
//! every successfully decoded instruction, and faults report the counter
//! value from before the advance.

use crate::error::{malformed_operand, unexpected_end, unknown_opcode, ProgramError};
use crate::opcode::Opcode;
use crate::scan::Scanner;
use crate::value::Value;
use std::fmt;

/// One decoded instruction, operand included.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Push an integer literal.
    Iconst(i32),
    /// Push a float literal.
    Fconst(f32),
    /// Push an int variable.
    Iload(String),
    /// Push a float variable.
    Fload(String),
    /// Pop an int into a variable.
    Istore(String),
    /// Pop a float into a variable.
    Fstore(String),
    /// Print a variable's value.
    Val(String),
    /// Print a variable's parent name.
    Par(String),
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
    /// Integer divide.
    Idiv,
    /// Float divide.
    Fdiv,
    /// Integer remainder.
    Irem,
    /// Integer negate.
    Ineg,
    /// Float negate.
    Fneg,
    /// Bitwise and.
    Iand,
    /// Bitwise or.
    Ior,
    /// Integer equality.
    Ieq,
    /// Float equality.
    Feq,
    /// Integer inequality.
    Ineq,
    /// Float inequality.
    Fneq,
    /// Integer less-than.
    Ilt,
    /// Float less-than.
    Flt,
    /// Integer greater-than.
    Igt,
    /// Float greater-than.
    Fgt,
    /// Boolean not.
    Ibnot,
    /// Int to float conversion.
    I2f,
    /// Float to int conversion.
    F2i,
    /// Print the top of the stack.
    Top,
}

impl Instruction {
    /// The mnemonic this instruction was decoded from.
    pub const fn opcode(&self) -> Opcode {
        match self {
            Instruction::Iconst(_) => Opcode::Iconst,
            Instruction::Fconst(_) => Opcode::Fconst,
            Instruction::Iload(_) => Opcode::Iload,
            Instruction::Fload(_) => Opcode::Fload,
            Instruction::Istore(_) => Opcode::Istore,
            Instruction::Fstore(_) => Opcode::Fstore,
            Instruction::Val(_) => Opcode::Val,
            Instruction::Par(_) => Opcode::Par,
            Instruction::Iadd => Opcode::Iadd,
            Instruction::Fadd => Opcode::Fadd,
            Instruction::Isub => Opcode::Isub,
            Instruction::Fsub => Opcode::Fsub,
            Instruction::Imul => Opcode::Imul,
            Instruction::Fmul => Opcode::Fmul,
            Instruction::Idiv => Opcode::Idiv,
            Instruction::Fdiv => Opcode::Fdiv,
            Instruction::Irem => Opcode::Irem,
            Instruction::Ineg => Opcode::Ineg,
            Instruction::Fneg => Opcode::Fneg,
            Instruction::Iand => Opcode::Iand,
            Instruction::Ior => Opcode::Ior,
            Instruction::Ieq => Opcode::Ieq,
            Instruction::Feq => Opcode::Feq,
            Instruction::Ineq => Opcode::Ineq,
            Instruction::Fneq => Opcode::Fneq,
            Instruction::Ilt => Opcode::Ilt,
            Instruction::Flt => Opcode::Flt,
            Instruction::Igt => Opcode::Igt,
            Instruction::Fgt => Opcode::Fgt,
            Instruction::Ibnot => Opcode::Ibnot,
            Instruction::I2f => Opcode::I2f,
            Instruction::F2i => Opcode::F2i,
            Instruction::Top => Opcode::Top,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Iconst(literal) => write!(f, "iconst {literal}"),
            Instruction::Fconst(literal) => {
                write!(f, "fconst {}", Value::float(*literal))
            }
            Instruction::Iload(name)
            | Instruction::Fload(name)
            | Instruction::Istore(name)
            | Instruction::Fstore(name)
            | Instruction::Val(name)
            | Instruction::Par(name) => write!(f, "{} {name}", self.opcode()),
            nullary => write!(f, "{}", nullary.opcode()),
        }
    }
}

/// Decoder over program text.
pub struct InstructionStream<'src> {
    scanner: Scanner<'src>,
    line: u32,
}

impl<'src> InstructionStream<'src> {
    /// Start decoding at the beginning of `source`.
    pub const fn new(source: &'src str) -> Self {
        InstructionStream {
            scanner: Scanner::new(source),
            line: 1,
        }
    }

    /// The 1-based position of the next instruction to decode.
    ///
    /// Read this before `next_instruction` to know the position of the
    /// instruction it returns.
    #[inline]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Decode the next instruction, or `Ok(None)` at end of input.
    pub fn next_instruction(&mut self) -> Result<Option<Instruction>, ProgramError> {
        let Some(token) = self.scanner.next_token() else {
            return Ok(None);
        };
        let opcode =
            Opcode::parse(token).ok_or_else(|| unknown_opcode(token, self.line))?;
        let instruction = match opcode {
            Opcode::Iconst => Instruction::Iconst(self.int_operand(opcode)?),
            Opcode::Fconst => Instruction::Fconst(self.float_operand(opcode)?),
            Opcode::Iload => Instruction::Iload(self.name_operand(opcode)?),
            Opcode::Fload => Instruction::Fload(self.name_operand(opcode)?),
            Opcode::Istore => Instruction::Istore(self.name_operand(opcode)?),
            Opcode::Fstore => Instruction::Fstore(self.name_operand(opcode)?),
            Opcode::Val => Instruction::Val(self.name_operand(opcode)?),
            Opcode::Par => Instruction::Par(self.name_operand(opcode)?),
            Opcode::Iadd => Instruction::Iadd,
            Opcode::Fadd => Instruction::Fadd,
            Opcode::Isub => Instruction::Isub,
            Opcode::Fsub => Instruction::Fsub,
            Opcode::Imul => Instruction::Imul,
            Opcode::Fmul => Instruction::Fmul,
            Opcode::Idiv => Instruction::Idiv,
            Opcode::Fdiv => Instruction::Fdiv,
            Opcode::Irem => Instruction::Irem,
            Opcode::Ineg => Instruction::Ineg,
            Opcode::Fneg => Instruction::Fneg,
            Opcode::Iand => Instruction::Iand,
            Opcode::Ior => Instruction::Ior,
            Opcode::Ieq => Instruction::Ieq,
            Opcode::Feq => Instruction::Feq,
            Opcode::Ineq => Instruction::Ineq,
            Opcode::Fneq => Instruction::Fneq,
            Opcode::Ilt => Instruction::Ilt,
            Opcode::Flt => Instruction::Flt,
            Opcode::Igt => Instruction::Igt,
            Opcode::Fgt => Instruction::Fgt,
            Opcode::Ibnot => Instruction::Ibnot,
            Opcode::I2f => Instruction::I2f,
            Opcode::F2i => Instruction::F2i,
            Opcode::Top => Instruction::Top,
        };
        self.line += 1;
        Ok(Some(instruction))
    }

    /// The raw operand token for `opcode`, or the end-of-source fault.
    fn raw_operand(&mut self, opcode: Opcode) -> Result<&'src str, ProgramError> {
        self.scanner
            .next_token()
            .ok_or_else(|| unexpected_end(opcode, self.line))
    }

    fn int_operand(&mut self, opcode: Opcode) -> Result<i32, ProgramError> {
        let token = self.raw_operand(opcode)?;
        token
            .parse::<i32>()
            .map_err(|_| malformed_operand(token, "int literal", self.line))
    }

    fn float_operand(&mut self, opcode: Opcode) -> Result<f32, ProgramError> {
        let token = self.raw_operand(opcode)?;
        token
            .parse::<f32>()
            .map_err(|_| malformed_operand(token, "float literal", self.line))
    }

    fn name_operand(&mut self, opcode: Opcode) -> Result<String, ProgramError> {
        Ok(self.raw_operand(opcode)?.to_string())
    }
}
