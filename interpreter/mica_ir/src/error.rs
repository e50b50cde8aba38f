//! Program-format errors.
//!
//! These cover faults in the program text itself: unknown mnemonics and
//! bad operand tokens. They are deliberately a separate type from the
//! runtime error taxonomy: a malformed program is a fault of the program
//! producer, not a condition the machine can reach while executing a
//! well-formed one.

use crate::opcode::Opcode;
use std::fmt;

/// Category of a program-format fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgramErrorKind {
    /// A token in mnemonic position did not decode to any opcode.
    UnknownOpcode {
        /// The offending token.
        token: String,
    },
    /// An operand token failed to parse as the literal its opcode needs.
    MalformedOperand {
        /// The offending token.
        token: String,
        /// What the opcode expected ("int literal" / "float literal").
        expected: &'static str,
    },
    /// The source ended where an opcode still needed its operand.
    UnexpectedEnd {
        /// The opcode left without an operand.
        opcode: Opcode,
    },
}

impl fmt::Display for ProgramErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgramErrorKind::UnknownOpcode { token } => {
                write!(f, "unknown instruction `{token}`")
            }
            ProgramErrorKind::MalformedOperand { token, expected } => {
                write!(f, "expected {expected}, found `{token}`")
            }
            ProgramErrorKind::UnexpectedEnd { opcode } => {
                write!(f, "program ends before the operand of `{opcode}`")
            }
        }
    }
}

/// A program-format fault, tagged with the 1-based position of the
/// instruction being decoded when it was discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramError {
    /// What went wrong.
    pub kind: ProgramErrorKind,
    /// 1-based instruction position.
    pub line: u32,
}

impl fmt::Display for ProgramError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ProgramError {}

/// An unrecognized mnemonic token.
pub fn unknown_opcode(token: &str, line: u32) -> ProgramError {
    ProgramError {
        kind: ProgramErrorKind::UnknownOpcode {
            token: token.to_string(),
        },
        line,
    }
}

/// An operand token that failed literal parsing.
pub fn malformed_operand(token: &str, expected: &'static str, line: u32) -> ProgramError {
    ProgramError {
        kind: ProgramErrorKind::MalformedOperand {
            token: token.to_string(),
            expected,
        },
        line,
    }
}

/// Source exhausted while an operand was still required.
pub fn unexpected_end(opcode: Opcode, line: u32) -> ProgramError {
    ProgramError {
        kind: ProgramErrorKind::UnexpectedEnd { opcode },
        line,
    }
}
