//! # Jump Instructions
//!
//! This module implements the unconditional and conditional jumps:
//! - JMP: always
//! - JEQ: E set
//! - JNE: E clear
//! - JGT: G set
//! - JLT: L set
//! - JLE: L or E set
//! - JGE: G or E set
//!
//! The operand names a register; the jump target is that register's value.
//! A jump not taken falls through to the next instruction (PC + 2).

use std::io::Write;

use crate::{ExecutionError, Flags, MemoryBus, Opcode, CPU};

fn condition_met(opcode: Opcode, flags: Flags) -> bool {
    match opcode {
        Opcode::Jmp => true,
        Opcode::Jeq => flags.equal,
        Opcode::Jne => !flags.equal,
        Opcode::Jgt => flags.greater,
        Opcode::Jlt => flags.less,
        Opcode::Jle => flags.less || flags.equal,
        Opcode::Jge => flags.greater || flags.equal,
        _ => unreachable!("{} is not a jump", opcode),
    }
}

/// Executes JMP or one of the conditional jumps.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The decoded jump opcode
pub(crate) fn execute_jump<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let target = cpu.read_register(reg)?;

    if condition_met(opcode, cpu.flags) {
        cpu.pc = target as u16;
    } else {
        cpu.advance(opcode);
    }

    Ok(())
}
