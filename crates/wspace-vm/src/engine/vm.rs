//! Virtual machine for executing wspace programs.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use wspace_bytecode::{
    ArithmeticOp, FlowOp, HeapOp, Instruction, IoOp, NoopTracer, Opcode, Program, StackOp,
    Tracer,
};

use super::error::{RuntimeError, RuntimeErrorKind};
use super::input::{read_char, read_line};
use super::labels::LabelTable;

type Result<T> = std::result::Result<T, RuntimeErrorKind>;

/// Runtime limits for program execution.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuelLimits {
    /// Maximum number of executed instructions (default: unlimited).
    pub(crate) exec_fuel: Option<u64>,
}

impl FuelLimits {
    /// Create new fuel limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.exec_fuel = Some(fuel);
        self
    }

    pub fn get_exec_fuel(&self) -> Option<u64> {
        self.exec_fuel
    }
}

/// How a run stopped cleanly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// An `end` instruction executed.
    End,
    /// The program counter moved past the last instruction.
    EndOfProgram,
}

/// Outcome of a single dispatched instruction.
enum Control {
    Next,
    Halt,
}

/// Virtual machine state for program execution.
pub struct VM<'p, R, W> {
    program: &'p Program,
    pc: usize,
    stack: Vec<i64>,
    heap: HashMap<i64, i64>,
    call_stack: Vec<usize>,
    labels: LabelTable,
    input: R,
    output: W,

    // Fuel tracking
    exec_fuel: Option<u64>,
    limits: FuelLimits,
}

/// Builder for VM instances.
pub struct VMBuilder<'p, R = io::Empty, W = io::Sink> {
    program: &'p Program,
    input: R,
    output: W,
    limits: FuelLimits,
}

impl<'p> VMBuilder<'p> {
    /// Create a new VM builder with empty input and discarded output.
    pub fn new(program: &'p Program) -> Self {
        Self {
            program,
            input: io::empty(),
            output: io::sink(),
            limits: FuelLimits::default(),
        }
    }
}

impl<'p, R: BufRead, W: Write> VMBuilder<'p, R, W> {
    /// Set the source read by `readc` and `readn`.
    pub fn input<R2: BufRead>(self, input: R2) -> VMBuilder<'p, R2, W> {
        VMBuilder {
            program: self.program,
            input,
            output: self.output,
            limits: self.limits,
        }
    }

    /// Set the sink written by `outc` and `outn`.
    pub fn output<W2: Write>(self, output: W2) -> VMBuilder<'p, R, W2> {
        VMBuilder {
            program: self.program,
            input: self.input,
            output,
            limits: self.limits,
        }
    }

    /// Set the fuel limits.
    pub fn limits(mut self, limits: FuelLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the execution fuel limit.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    /// Build the VM.
    pub fn build(self) -> VM<'p, R, W> {
        VM {
            program: self.program,
            pc: 0,
            stack: Vec::new(),
            heap: HashMap::new(),
            call_stack: Vec::new(),
            labels: LabelTable::new(),
            input: self.input,
            output: self.output,
            exec_fuel: self.limits.get_exec_fuel(),
            limits: self.limits,
        }
    }
}

impl<'p> VM<'p, io::Empty, io::Sink> {
    /// Create a VM builder.
    pub fn builder(program: &'p Program) -> VMBuilder<'p> {
        VMBuilder::new(program)
    }
}

impl<'p, R: BufRead, W: Write> VM<'p, R, W> {
    /// Run until the program halts or fails.
    ///
    /// This is a convenience method that uses `NoopTracer`, which gets
    /// completely optimized away at compile time.
    pub fn execute(&mut self) -> std::result::Result<Halt, RuntimeError> {
        self.execute_with(&mut NoopTracer)
    }

    /// Run with a tracer for debugging.
    pub fn execute_with<T: Tracer>(
        &mut self,
        tracer: &mut T,
    ) -> std::result::Result<Halt, RuntimeError> {
        tracer.trace_program(self.program);
        loop {
            if let Some(halt) = self.step_with(tracer)? {
                return Ok(halt);
            }
        }
    }

    /// Execute a single instruction. Returns `Some` once the program has halted.
    pub fn step(&mut self) -> std::result::Result<Option<Halt>, RuntimeError> {
        self.step_with(&mut NoopTracer)
    }

    /// Execute a single instruction, reporting to `tracer`.
    pub fn step_with<T: Tracer>(
        &mut self,
        tracer: &mut T,
    ) -> std::result::Result<Option<Halt>, RuntimeError> {
        let program = self.program;
        let index = self.pc;
        let Some(instr) = program.get(index) else {
            tracer.trace_halt(index, false);
            return Ok(Some(Halt::EndOfProgram));
        };

        // Fuel check
        if let Some(fuel) = self.exec_fuel.as_mut() {
            if *fuel == 0 {
                let limit = self.limits.get_exec_fuel().unwrap_or_default();
                return Err(RuntimeError::new(
                    index,
                    instr.clone(),
                    RuntimeErrorKind::ExecFuelExhausted(limit),
                ));
            }
            *fuel -= 1;
        }

        self.pc += 1;
        tracer.trace_instruction(index, instr);

        let result = match instr.opcode() {
            Opcode::Stack(op) => self.exec_stack(op, instr).map(|()| Control::Next),
            Opcode::Arithmetic(op) => self.exec_arithmetic(op).map(|()| Control::Next),
            Opcode::Heap(op) => self.exec_heap(op).map(|()| Control::Next),
            Opcode::Flow(op) => self.exec_flow(op, instr, tracer),
            Opcode::Io(op) => self.exec_io(op).map(|()| Control::Next),
        };

        match result {
            Ok(Control::Next) => {
                tracer.trace_stack(&self.stack);
                Ok(None)
            }
            Ok(Control::Halt) => {
                tracer.trace_halt(index, true);
                Ok(Some(Halt::End))
            }
            Err(kind) => Err(RuntimeError::new(index, instr.clone(), kind)),
        }
    }

    /// Find the instruction index `label` resumes at.
    ///
    /// Known labels come straight from the label table. Otherwise the program is
    /// scanned forward for marks, recording each one, until `label` turns up.
    pub fn resolve_label(&mut self, label: i64) -> Result<usize> {
        self.resolve_label_with(label, &mut NoopTracer)
    }

    fn resolve_label_with<T: Tracer>(&mut self, label: i64, tracer: &mut T) -> Result<usize> {
        self.labels
            .resolve(self.program, label, tracer)?
            .ok_or(RuntimeErrorKind::UndefinedLabel(label))
    }

    fn exec_stack(&mut self, op: StackOp, instr: &Instruction) -> Result<()> {
        match op {
            StackOp::Push => {
                let n = operand(instr)?;
                self.stack.push(n);
            }
            StackOp::Duplicate => {
                let top = self.peek(0)?;
                self.stack.push(top);
            }
            StackOp::Copy => {
                let n = stack_index(operand(instr)?)?;
                let value = self.peek(n)?;
                self.stack.push(value);
            }
            StackOp::Swap => {
                self.require(2)?;
                let len = self.stack.len();
                self.stack.swap(len - 1, len - 2);
            }
            StackOp::Discard => {
                self.pop()?;
            }
            StackOp::Slide => {
                let n = stack_index(operand(instr)?)?;
                self.require(n.saturating_add(1))?;
                let top = self.pop()?;
                let keep = self.stack.len() - n;
                self.stack.truncate(keep);
                self.stack.push(top);
            }
        }
        Ok(())
    }

    fn exec_arithmetic(&mut self, op: ArithmeticOp) -> Result<()> {
        self.require(2)?;
        let a = self.peek(0)?;
        let b = self.peek(1)?;

        let result = match op {
            ArithmeticOp::Add => b.checked_add(a),
            ArithmeticOp::Subtract => b.checked_sub(a),
            ArithmeticOp::Multiply => b.checked_mul(a),
            ArithmeticOp::Divide | ArithmeticOp::Modulo if a == 0 => {
                return Err(RuntimeErrorKind::DivisionByZero);
            }
            ArithmeticOp::Divide => b.checked_div(a),
            ArithmeticOp::Modulo => b.checked_rem(a),
        }
        .ok_or(RuntimeErrorKind::ArithmeticOverflow)?;

        self.stack.truncate(self.stack.len() - 2);
        self.stack.push(result);
        Ok(())
    }

    fn exec_heap(&mut self, op: HeapOp) -> Result<()> {
        match op {
            HeapOp::Store => {
                self.require(2)?;
                let value = self.pop()?;
                let address = self.pop()?;
                self.heap.insert(address, value);
            }
            HeapOp::Retrieve => {
                let address = self.peek(0)?;
                let value = self.load(address)?;
                self.pop()?;
                self.stack.push(value);
            }
        }
        Ok(())
    }

    fn exec_flow<T: Tracer>(
        &mut self,
        op: FlowOp,
        instr: &Instruction,
        tracer: &mut T,
    ) -> Result<Control> {
        match op {
            FlowOp::Mark => {
                let label = operand(instr)?;
                self.labels.record(label, self.pc, tracer);
            }
            FlowOp::Call => {
                let label = operand(instr)?;
                let target = self.resolve_label_with(label, tracer)?;
                tracer.trace_call(label, target);
                self.call_stack.push(self.pc);
                self.pc = target;
            }
            FlowOp::Jump => {
                let label = operand(instr)?;
                self.jump(label, tracer)?;
            }
            FlowOp::JumpIfZero => {
                let label = operand(instr)?;
                if self.pop()? == 0 {
                    self.jump(label, tracer)?;
                }
            }
            FlowOp::JumpIfNegative => {
                let label = operand(instr)?;
                if self.pop()? < 0 {
                    self.jump(label, tracer)?;
                }
            }
            FlowOp::Return => {
                let target = self
                    .call_stack
                    .pop()
                    .ok_or(RuntimeErrorKind::ReturnWithoutCall)?;
                tracer.trace_return(target);
                self.pc = target;
            }
            FlowOp::End => return Ok(Control::Halt),
        }
        Ok(Control::Next)
    }

    fn exec_io(&mut self, op: IoOp) -> Result<()> {
        match op {
            IoOp::OutputChar => {
                let value = self.peek(0)?;
                let c = u32::try_from(value)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or(RuntimeErrorKind::InvalidCharacter(value))?;
                self.pop()?;
                write!(self.output, "{c}")?;
                self.output.flush()?;
            }
            IoOp::OutputNumber => {
                let value = self.pop()?;
                write!(self.output, "{value}")?;
                self.output.flush()?;
            }
            IoOp::ReadChar => {
                let address = self.peek(0)?;
                let c = read_char(&mut self.input)?
                    .ok_or(RuntimeErrorKind::UnexpectedEndOfInput)?;
                self.pop()?;
                self.heap.insert(address, i64::from(u32::from(c)));
            }
            IoOp::ReadNumber => {
                let address = self.peek(0)?;
                let line = read_line(&mut self.input)?
                    .ok_or(RuntimeErrorKind::UnexpectedEndOfInput)?;
                let text = line.trim();
                let value = text
                    .parse::<i64>()
                    .map_err(|_| RuntimeErrorKind::InvalidNumber(text.to_string()))?;
                self.pop()?;
                self.heap.insert(address, value);
            }
        }
        Ok(())
    }

    fn jump<T: Tracer>(&mut self, label: i64, tracer: &mut T) -> Result<()> {
        let target = self.resolve_label_with(label, tracer)?;
        tracer.trace_jump(label, target);
        self.pc = target;
        Ok(())
    }

    fn load(&self, address: i64) -> Result<i64> {
        self.heap
            .get(&address)
            .copied()
            .ok_or(RuntimeErrorKind::UninitializedHeapAddress(address))
    }

    fn require(&self, count: usize) -> Result<()> {
        let available = self.stack.len();
        if available < count {
            return Err(RuntimeErrorKind::StackUnderflow {
                required: count,
                available,
            });
        }
        Ok(())
    }

    /// Value `depth` places below the top (0 = top).
    fn peek(&self, depth: usize) -> Result<i64> {
        self.require(depth.saturating_add(1))?;
        Ok(self.stack[self.stack.len() - 1 - depth])
    }

    fn pop(&mut self) -> Result<i64> {
        self.stack.pop().ok_or(RuntimeErrorKind::StackUnderflow {
            required: 1,
            available: 0,
        })
    }
}

impl<R, W> VM<'_, R, W> {
    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Operand stack, bottom first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    pub fn heap(&self) -> &HashMap<i64, i64> {
        &self.heap
    }

    /// Saved return indices, innermost last.
    pub fn call_stack(&self) -> &[usize] {
        &self.call_stack
    }

    /// Target of `label` if it has been recorded so far.
    pub fn label(&self, label: i64) -> Option<usize> {
        self.labels.get(label)
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Decode the operand of a parameterized instruction.
fn operand(instr: &Instruction) -> Result<i64> {
    let literal = instr
        .parameter()
        .expect("parameterized instruction carries a literal");
    Ok(literal.decode()?)
}

fn stack_index(n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| RuntimeErrorKind::InvalidStackIndex(n))
}
