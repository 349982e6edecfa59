//! # Output Instructions
//!
//! - PRN: Print a register as a decimal number
//! - PRA: Print a register as a character
//!
//! Both terminate the line with `\n`.

use std::io::Write;

use crate::{ExecutionError, MemoryBus, Opcode, CPU};

pub(crate) fn execute_prn<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let value = cpu.read_register(reg)?;

    writeln!(cpu.output, "{}", value)?;

    cpu.advance(opcode);

    Ok(())
}

/// Executes PRA. Values are interpreted as Latin-1 code points.
pub(crate) fn execute_pra<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let value = cpu.read_register(reg)?;

    writeln!(cpu.output, "{}", value as char)?;

    cpu.advance(opcode);

    Ok(())
}
