//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PUSH: Decrement SP, then store a register at SP
//! - POP: Load a register from SP, then increment SP
//!
//! The stack lives in main memory and grows downward from 0xF4. The stack
//! pointer is R7 and wraps within 0x00-0xFF.

use std::io::Write;

use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes the PUSH instruction.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Opcode, Ram, CPU};
///
/// let mut memory = Ram::new();
/// memory.write(0x00, Opcode::Push.byte()).unwrap();
/// memory.write(0x01, 2).unwrap(); // R2
///
/// let mut cpu = CPU::with_output(memory, Vec::new());
/// cpu.set_register(2, 0x42).unwrap();
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.memory().read(0xF3), Ok(0x42));
/// assert_eq!(cpu.sp(), 0xF3);
/// assert_eq!(cpu.pc(), 0x02);
/// ```
pub(crate) fn execute_push<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let value = cpu.read_register(reg)?;

    cpu.push(value)?;

    cpu.advance(opcode);

    Ok(())
}

/// Executes the POP instruction.
///
/// `POP R7` leaves R7 holding the popped value, not the incremented pointer.
pub(crate) fn execute_pop<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    // Validate the register before touching SP
    cpu.read_register(reg)?;

    let value = cpu.pop()?;
    cpu.write_register(reg, value)?;

    cpu.advance(opcode);

    Ok(())
}
