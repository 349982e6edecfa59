//! # Load and Store Instructions
//!
//! This module implements data movement between registers and memory:
//! - LDI: Load an immediate value into a register
//! - LD: Load a register from the address held in another register
//! - ST: Store a register at the address held in another register

use std::io::Write;

use crate::{ExecutionError, MemoryBus, Opcode, CPU};

/// Executes LDI rA, imm. The second operand is a literal, not a register.
pub(crate) fn execute_ldi<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let value = cpu.operand(2)?;

    cpu.write_register(reg, value)?;

    cpu.advance(opcode);

    Ok(())
}

/// Executes LD rA, rB: `rA = memory[rB]`.
pub(crate) fn execute_ld<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.operand(1)?;
    let reg_b = cpu.operand(2)?;

    let addr = cpu.read_register(reg_b)?;
    let value = cpu.read_memory(addr as u16)?;
    cpu.write_register(reg_a, value)?;

    cpu.advance(opcode);

    Ok(())
}

/// Executes ST rA, rB: `memory[rA] = rB`.
///
/// rA supplies the address and rB the value.
pub(crate) fn execute_st<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg_a = cpu.operand(1)?;
    let reg_b = cpu.operand(2)?;

    let addr = cpu.read_register(reg_a)?;
    let value = cpu.read_register(reg_b)?;
    cpu.write_memory(addr as u16, value)?;

    cpu.advance(opcode);

    Ok(())
}
