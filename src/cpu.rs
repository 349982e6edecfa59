//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the LS-8 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: R0-R7, with R5 = IM, R6 = IS, R7 = SP
//! - **Program counter** (PC): address of the next instruction byte
//! - **Flags**: E, G, L, set by CMP
//! - **Run state**: RUNNING or HALTED (terminal)
//! - **Step counter**: number of instructions completed
//!
//! ## Execution Model
//!
//! The CPU executes instructions via:
//! - `step()`: Execute one instruction
//! - `run()`: Execute until HLT or a fault
//! - `run_for_steps()`: Execute at most a given number of instructions

use std::io::{self, Stdout, Write};
use std::path::Path;

use log::{debug, log_enabled, trace, Level};

use crate::instructions::{alu, branches, control, load_store, output, stack};
use crate::loader::{self, LoadError};
use crate::memory::{INTERRUPT_STATUS_START, MEMORY_SIZE};
use crate::{AddressingFault, ExecutionError, Flags, MemoryBus, Opcode, RegisterFile};

/// CPU run state. HALTED is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Halted,
}

/// LS-8 CPU state and execution context.
///
/// The CPU is generic over its memory (via `MemoryBus`) and over the writer
/// that receives PRN/PRA output, which defaults to standard output.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Opcode, Ram, CPU};
///
/// let mut mem = Ram::new();
/// mem.write(0x00, Opcode::Ldi.byte()).unwrap();
/// mem.write(0x01, 0).unwrap(); // R0
/// mem.write(0x02, 42).unwrap();
/// mem.write(0x03, Opcode::Hlt.byte()).unwrap();
///
/// let mut cpu = CPU::with_output(mem, Vec::new());
/// cpu.run().unwrap();
///
/// assert_eq!(cpu.register(0).unwrap(), 42);
/// assert_eq!(cpu.pc(), 0x03);
/// assert!(cpu.is_halted());
/// ```
pub struct CPU<M: MemoryBus, W: Write = Stdout> {
    /// General-purpose registers
    pub(crate) registers: RegisterFile,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Comparison flags
    pub(crate) flags: Flags,

    pub(crate) state: RunState,

    /// Cleared while an interrupt is being serviced, set again by IRET
    pub(crate) interrupts_enabled: bool,

    /// Next free slot in the interrupt status area
    pub(crate) interrupt_cursor: u16,

    /// Instructions completed since power-on or reset
    pub(crate) steps: u64,

    /// Memory bus implementation
    pub(crate) memory: M,

    /// Destination of PRN/PRA output
    pub(crate) output: W,
}

impl<M: MemoryBus> CPU<M, Stdout> {
    /// Creates a new CPU writing program output to standard output.
    pub fn new(memory: M) -> Self {
        Self::with_output(memory, io::stdout())
    }
}

impl<M: MemoryBus, W: Write> CPU<M, W> {
    /// Creates a new CPU in the power-on state, writing program output to `output`.
    ///
    /// - PC = 0, flags clear
    /// - R0-R6 = 0, R7 (SP) = 0xF4
    /// - Interrupts enabled, state RUNNING
    ///
    /// Memory is taken as-is; a program may already be present.
    pub fn with_output(memory: M, output: W) -> Self {
        Self {
            registers: RegisterFile::new(),
            pc: 0,
            flags: Flags::default(),
            state: RunState::Running,
            interrupts_enabled: true,
            interrupt_cursor: INTERRUPT_STATUS_START,
            steps: 0,
            memory,
            output,
        }
    }

    /// Returns the CPU to its power-on state without touching memory.
    pub fn reset(&mut self) {
        self.registers = RegisterFile::new();
        self.pc = 0;
        self.flags = Flags::default();
        self.state = RunState::Running;
        self.interrupts_enabled = true;
        self.interrupt_cursor = INTERRUPT_STATUS_START;
        self.steps = 0;
    }

    // ========== Program Loading ==========

    /// Loads the program file at `path` into memory starting at address 0.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let program = loader::read_program(path.as_ref())?;
        self.load_bytes(&program)
    }

    /// Parses program text and loads it into memory starting at address 0.
    pub fn load_source(&mut self, source: &str) -> Result<(), LoadError> {
        let program = loader::parse_program(source)?;
        self.load_bytes(&program)
    }

    /// Writes `program` into memory starting at address 0.
    pub fn load_bytes(&mut self, program: &[u8]) -> Result<(), LoadError> {
        if program.len() > MEMORY_SIZE {
            return Err(LoadError::ProgramTooLarge { len: program.len() });
        }

        for (addr, &byte) in program.iter().enumerate() {
            self.memory.write(addr as u16, byte)?;
        }

        debug!("loaded {} program bytes", program.len());
        Ok(())
    }

    // ========== Execution ==========

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs the fetch-decode-execute cycle:
    /// 1. Fetch opcode byte at current PC
    /// 2. Decode it to an `Opcode`; an unknown byte is a fault
    /// 3. Dispatch to the ALU or the instruction family that handles it
    ///
    /// Any error halts the CPU before it is returned. Once halted, `step`
    /// executes nothing and returns `Ok(RunState::Halted)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{ExecutionError, MemoryBus, Ram, RunState, CPU};
    ///
    /// let mut mem = Ram::new();
    /// mem.write(0x00, 0xFF).unwrap(); // not an LS-8 opcode
    ///
    /// let mut cpu = CPU::with_output(mem, Vec::new());
    ///
    /// match cpu.step() {
    ///     Err(ExecutionError::UnknownOpcode { opcode: 0xFF, pc: 0 }) => {}
    ///     other => panic!("expected UnknownOpcode, got {:?}", other),
    /// }
    /// assert_eq!(cpu.step().unwrap(), RunState::Halted);
    /// ```
    pub fn step(&mut self) -> Result<RunState, ExecutionError> {
        if self.state == RunState::Halted {
            return Ok(RunState::Halted);
        }

        if log_enabled!(Level::Trace) {
            trace!("{}", self.trace());
        }

        match self.execute_next() {
            Ok(()) => {
                self.steps += 1;
                Ok(self.state)
            }
            Err(err) => {
                self.halt();
                Err(err)
            }
        }
    }

    fn execute_next(&mut self) -> Result<(), ExecutionError> {
        // Fetch
        let byte = self.read_memory(self.pc)?;

        // Decode
        let opcode = Opcode::decode(byte).ok_or(ExecutionError::UnknownOpcode {
            opcode: byte,
            pc: self.pc,
        })?;

        // Execute
        if opcode.is_alu() {
            return alu::execute_alu(self, opcode);
        }

        match opcode {
            Opcode::Nop => control::execute_nop(self, opcode),
            Opcode::Hlt => control::execute_hlt(self, opcode),
            Opcode::Int => control::execute_int(self, opcode),
            Opcode::Iret => control::execute_iret(self, opcode),
            Opcode::Call => control::execute_call(self, opcode),
            Opcode::Ret => control::execute_ret(self, opcode),
            Opcode::Jmp
            | Opcode::Jeq
            | Opcode::Jne
            | Opcode::Jgt
            | Opcode::Jlt
            | Opcode::Jle
            | Opcode::Jge => branches::execute_jump(self, opcode),
            Opcode::Push => stack::execute_push(self, opcode),
            Opcode::Pop => stack::execute_pop(self, opcode),
            Opcode::Ldi => load_store::execute_ldi(self, opcode),
            Opcode::Ld => load_store::execute_ld(self, opcode),
            Opcode::St => load_store::execute_st(self, opcode),
            Opcode::Prn => output::execute_prn(self, opcode),
            Opcode::Pra => output::execute_pra(self, opcode),
            _ => unreachable!("ALU opcode {} dispatched above", opcode),
        }
    }

    /// Runs until HLT or the first fault.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        while self.state == RunState::Running {
            self.step()?;
        }
        Ok(())
    }

    /// Runs at most `step_budget` instructions, stopping early on HLT.
    ///
    /// Returns the number of instructions executed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{Ram, CPU};
    ///
    /// // Zeroed memory is an endless run of NOPs
    /// let mut cpu = CPU::with_output(Ram::new(), Vec::new());
    /// assert_eq!(cpu.run_for_steps(10).unwrap(), 10);
    /// assert_eq!(cpu.pc(), 10);
    /// ```
    pub fn run_for_steps(&mut self, step_budget: u64) -> Result<u64, ExecutionError> {
        let start_steps = self.steps;
        let target_steps = start_steps.saturating_add(step_budget);

        while self.state == RunState::Running && self.steps < target_steps {
            self.step()?;
        }

        Ok(self.steps - start_steps)
    }

    pub(crate) fn halt(&mut self) {
        if self.state == RunState::Running {
            debug!("halted at PC 0x{:02X} after {} steps", self.pc, self.steps);
        }
        self.state = RunState::Halted;
    }

    // ========== Helpers for instruction implementations ==========

    pub(crate) fn fault(&self, source: AddressingFault) -> ExecutionError {
        ExecutionError::AddressingFault {
            pc: self.pc,
            source,
        }
    }

    pub(crate) fn read_memory(&self, addr: u16) -> Result<u8, ExecutionError> {
        self.memory.read(addr).map_err(|e| self.fault(e))
    }

    pub(crate) fn write_memory(&mut self, addr: u16, value: u8) -> Result<(), ExecutionError> {
        self.memory.write(addr, value).map_err(|e| self.fault(e))
    }

    /// Reads operand byte `n` (1-based) of the current instruction.
    pub(crate) fn operand(&self, n: u16) -> Result<u8, ExecutionError> {
        self.read_memory(self.pc.saturating_add(n))
    }

    pub(crate) fn read_register(&self, index: u8) -> Result<u8, ExecutionError> {
        self.registers.get(index).map_err(|e| self.fault(e))
    }

    pub(crate) fn write_register(&mut self, index: u8, value: u8) -> Result<(), ExecutionError> {
        self.registers.set(index, value).map_err(|e| self.fault(e))
    }

    /// Decrements SP, then writes `value` at the new SP.
    pub(crate) fn push(&mut self, value: u8) -> Result<(), ExecutionError> {
        let sp = self.registers.sp().wrapping_sub(1);
        self.registers.set_sp(sp);
        self.write_memory(sp as u16, value)
    }

    /// Reads the value at SP, then increments SP.
    pub(crate) fn pop(&mut self) -> Result<u8, ExecutionError> {
        let sp = self.registers.sp();
        let value = self.read_memory(sp as u16)?;
        self.registers.set_sp(sp.wrapping_add(1));
        Ok(value)
    }

    /// Moves PC past the current instruction.
    pub(crate) fn advance(&mut self, opcode: Opcode) {
        self.pc = self.pc.wrapping_add(opcode.size() as u16);
    }

    /// One-line dump of the CPU state:
    /// `TRACE: PC | FL | b0 b1 b2 | R0 R1 R2 R3 R4 R5 R6 R7`.
    ///
    /// Bytes past the end of memory are shown as `--`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::{Ram, CPU};
    ///
    /// let cpu = CPU::with_output(Ram::new(), Vec::new());
    /// assert_eq!(
    ///     cpu.trace(),
    ///     "TRACE: 00 | 00 | 00 00 00 | 00 00 00 00 00 00 00 F4"
    /// );
    /// ```
    pub fn trace(&self) -> String {
        let bytes: Vec<String> = (0..3u16)
            .map(|i| match self.memory.read(self.pc.saturating_add(i)) {
                Ok(b) => format!("{:02X}", b),
                Err(_) => "--".to_string(),
            })
            .collect();

        let regs: Vec<String> = self
            .registers
            .as_array()
            .iter()
            .map(|r| format!("{:02X}", r))
            .collect();

        format!(
            "TRACE: {:02X} | {:02X} | {} | {}",
            self.pc,
            self.flags.bits(),
            bytes.join(" "),
            regs.join(" ")
        )
    }

    // ========== State Getters ==========

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns register `index`, or `AddressingFault::Register` past R7.
    pub fn register(&self, index: u8) -> Result<u8, AddressingFault> {
        self.registers.get(index)
    }

    /// Returns all eight registers, R0 first.
    pub fn registers(&self) -> [u8; 8] {
        self.registers.as_array()
    }

    /// Returns the stack pointer (R7).
    pub fn sp(&self) -> u8 {
        self.registers.sp()
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    pub fn interrupts_enabled(&self) -> bool {
        self.interrupts_enabled
    }

    /// Returns the number of instructions completed since power-on or reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Returns the output writer (a `Vec<u8>` in tests holds everything printed).
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // ========== State Setters ==========

    pub fn set_pc(&mut self, pc: u16) {
        self.pc = pc;
    }

    pub fn set_register(&mut self, index: u8, value: u8) -> Result<(), AddressingFault> {
        self.registers.set(index, value)
    }

    pub fn set_sp(&mut self, sp: u8) {
        self.registers.set_sp(sp);
    }

    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags;
    }

    pub fn set_interrupts_enabled(&mut self, enabled: bool) {
        self.interrupts_enabled = enabled;
    }
}
