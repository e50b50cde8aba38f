//! The executor.
//!
//! Pulls instructions from a program source and applies them to the
//! run's operand stack and variable store until the source is exhausted
//! or the first fault. A fresh interpreter executes exactly one program;
//! build a new one per run; nothing persists across runs.

use crate::errors::{type_mismatch, KindResult, MachineError};
use crate::limits::Limits;
use crate::operators::{eval_float_binary, eval_int_binary, FloatBinaryOp, IntBinaryOp};
use crate::print_handler::PrintHandler;
use crate::stack::OperandStack;
use crate::store::VarStore;
use mica_ir::{Instruction, InstructionStream, Value};

/// One program execution: operand stack, variable store, and the output
/// destination, created fresh per run and discarded after it.
pub struct Interpreter {
    stack: OperandStack,
    store: VarStore,
    printer: PrintHandler,
}

impl Interpreter {
    /// An interpreter printing observation output to stdout.
    pub fn new(limits: Limits) -> Self {
        Self::with_printer(limits, PrintHandler::default())
    }

    /// An interpreter sending observation output to `printer`.
    pub fn with_printer(limits: Limits, printer: PrintHandler) -> Self {
        Interpreter {
            stack: OperandStack::with_bound(limits.stack_bound()),
            store: VarStore::with_bound(limits.store_bound()),
            printer,
        }
    }

    /// The output destination, for reading captured output after a run.
    pub fn printer(&self) -> &PrintHandler {
        &self.printer
    }

    /// Execute `source` until it is exhausted or the first fault.
    ///
    /// The first error terminates the run immediately: whatever executed
    /// before it keeps its side effects (printed lines, stored
    /// variables), and nothing is rolled back.
    pub fn run(&mut self, source: &str) -> Result<(), MachineError> {
        let mut stream = InstructionStream::new(source);
        loop {
            let line = stream.line();
            let Some(instruction) = stream.next_instruction()? else {
                return Ok(());
            };
            self.execute(&instruction)
                .map_err(|kind| kind.at(line))?;
        }
    }

    /// Apply one instruction to the run state.
    fn execute(&mut self, instruction: &Instruction) -> KindResult<()> {
        match instruction {
            Instruction::Iconst(literal) => self.stack.push(Value::int(*literal)),
            Instruction::Fconst(literal) => self.stack.push(Value::float(*literal)),
            Instruction::Iload(name) => self.load_int(name),
            Instruction::Fload(name) => self.load_float(name),
            Instruction::Istore(name) => self.store_int(name),
            Instruction::Fstore(name) => self.store_float(name),
            Instruction::Val(name) => {
                let value = self.store.find(name)?;
                self.printer.println(&value.to_string());
                Ok(())
            }
            Instruction::Par(name) => {
                let parent = self.store.parent_name(name)?;
                self.printer.println(parent);
                Ok(())
            }
            Instruction::Top => {
                let value = self.stack.peek()?;
                self.printer.println(&value.to_string());
                Ok(())
            }
            Instruction::Ibnot => {
                let value = self.pop_int()?;
                self.stack.push(Value::int(i32::from(value == 0)))
            }
            Instruction::Ineg => {
                let value = self.pop_int()?;
                self.stack.push(Value::int(value.wrapping_neg()))
            }
            Instruction::Fneg => {
                // Widens an int operand; its only fault is an empty stack.
                let value = self.stack.pop()?;
                self.stack.push(Value::float(-value.widened()))
            }
            Instruction::I2f => {
                let value = self.stack.pop()?;
                if value.is_float() {
                    return Err(type_mismatch("int", value.type_name()));
                }
                self.stack.push(value.to_float())
            }
            Instruction::F2i => {
                let value = self.stack.pop()?;
                if value.is_int() {
                    return Err(type_mismatch("float", value.type_name()));
                }
                self.stack.push(value.to_int())
            }
            Instruction::Iadd => self.int_binary(IntBinaryOp::Add),
            Instruction::Isub => self.int_binary(IntBinaryOp::Sub),
            Instruction::Imul => self.int_binary(IntBinaryOp::Mul),
            Instruction::Idiv => self.int_binary(IntBinaryOp::Div),
            Instruction::Irem => self.int_binary(IntBinaryOp::Rem),
            Instruction::Iand => self.int_binary(IntBinaryOp::And),
            Instruction::Ior => self.int_binary(IntBinaryOp::Or),
            Instruction::Ieq => self.int_binary(IntBinaryOp::Eq),
            Instruction::Ineq => self.int_binary(IntBinaryOp::Neq),
            Instruction::Ilt => self.int_binary(IntBinaryOp::Lt),
            Instruction::Igt => self.int_binary(IntBinaryOp::Gt),
            Instruction::Fadd => self.float_binary(FloatBinaryOp::Add),
            Instruction::Fsub => self.float_binary(FloatBinaryOp::Sub),
            Instruction::Fmul => self.float_binary(FloatBinaryOp::Mul),
            Instruction::Fdiv => self.float_binary(FloatBinaryOp::Div),
            Instruction::Feq => self.float_binary(FloatBinaryOp::Eq),
            Instruction::Fneq => self.float_binary(FloatBinaryOp::Neq),
            Instruction::Flt => self.float_binary(FloatBinaryOp::Lt),
            Instruction::Fgt => self.float_binary(FloatBinaryOp::Gt),
        }
    }

    /// Pop an operand that must be an int.
    fn pop_int(&mut self) -> KindResult<i32> {
        let value = self.stack.pop()?;
        value
            .as_int()
            .ok_or_else(|| type_mismatch("int", value.type_name()))
    }

    fn load_int(&mut self, name: &str) -> KindResult<()> {
        let value = self.store.find(name)?;
        if !value.is_int() {
            return Err(type_mismatch("int", value.type_name()));
        }
        self.stack.push(value)
    }

    fn load_float(&mut self, name: &str) -> KindResult<()> {
        let value = self.store.find(name)?;
        if !value.is_float() {
            return Err(type_mismatch("float", value.type_name()));
        }
        self.stack.push(value)
    }

    /// `istore`: pop first, then type-check, then insert. That is the fault
    /// order programs observe.
    fn store_int(&mut self, name: &str) -> KindResult<()> {
        let value = self.stack.pop()?;
        if !value.is_int() {
            return Err(type_mismatch("int", value.type_name()));
        }
        self.store.insert(name, value)
    }

    fn store_float(&mut self, name: &str) -> KindResult<()> {
        let value = self.stack.pop()?;
        if !value.is_float() {
            return Err(type_mismatch("float", value.type_name()));
        }
        self.store.insert(name, value)
    }

    /// Pop b then a (b is the right-hand operand) and push the result.
    fn int_binary(&mut self, op: IntBinaryOp) -> KindResult<()> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(eval_int_binary(op, a, b)?)
    }

    fn float_binary(&mut self, op: FloatBinaryOp) -> KindResult<()> {
        let b = self.stack.pop()?;
        let a = self.stack.pop()?;
        self.stack.push(eval_float_binary(op, a, b)?)
    }
}

/// Run `source` with a capturing printer; returns everything the program
/// printed and how the run ended.
///
/// This is the surface the diff-driver collaborator consumes: the output
/// stream plus the trailing error, both as comparable text.
pub fn run_captured(source: &str, limits: Limits) -> (String, Result<(), MachineError>) {
    let mut interpreter = Interpreter::with_printer(limits, PrintHandler::buffer());
    let result = interpreter.run(source);
    (interpreter.printer().output(), result)
}

#[cfg(test)]
mod tests;
