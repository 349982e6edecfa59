//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - NOP: No operation
//! - HLT: Halt the CPU
//! - CALL: Call the subroutine at the address held in a register
//! - RET: Return from subroutine
//! - INT: Record a software interrupt
//! - IRET: Return from interrupt handler
//!
//! Interrupts are bookkeeping only. INT records the interrupt number in the
//! status area at 0xF8-0xFF and sets its bit in IS (R6), but nothing ever
//! dispatches to a handler. IRET unwinds the frame a handler entry would push:
//!
//! ```text
//! SP ->  R6 R5 R4 R3 R2 R1 R0 FL PC   (higher addresses to the right)
//! ```

use std::io::Write;

use log::warn;

use crate::{AddressingFault, ExecutionError, Flags, MemoryBus, Opcode, CPU, IS};

/// Interrupt numbers occupy the low three bits.
const INTERRUPT_NUMBER_MASK: u8 = 0x07;

/// Last slot of the interrupt status area.
const INTERRUPT_STATUS_END: u16 = 0xFF;

pub(crate) fn execute_nop<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    cpu.advance(opcode);
    Ok(())
}

/// Executes HLT. PC stays on the HLT instruction.
pub(crate) fn execute_hlt<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    _opcode: Opcode,
) -> Result<(), ExecutionError> {
    cpu.halt();
    Ok(())
}

/// Executes CALL.
///
/// Pushes the address of the next instruction (PC + 2) and jumps to the
/// address held in the operand register. The target is read before the push,
/// so `CALL R7` jumps to the old stack pointer. A return address past the end
/// of memory is an addressing fault and nothing is pushed.
pub(crate) fn execute_call<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let target = cpu.read_register(reg)?;

    let return_address = cpu.pc.wrapping_add(opcode.size() as u16);
    let return_byte = u8::try_from(return_address)
        .map_err(|_| cpu.fault(AddressingFault::Address(return_address)))?;
    cpu.push(return_byte)?;

    cpu.pc = target as u16;

    Ok(())
}

/// Executes RET: pops the return address into PC.
pub(crate) fn execute_ret<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    _opcode: Opcode,
) -> Result<(), ExecutionError> {
    cpu.pc = cpu.pop()? as u16;
    Ok(())
}

/// Executes INT.
///
/// The interrupt number is the low three bits of the operand register. While
/// the status area has a free slot the number is written there and its bit is
/// set in IS; once the area is full further requests are dropped.
pub(crate) fn execute_int<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let reg = cpu.operand(1)?;
    let number = cpu.read_register(reg)? & INTERRUPT_NUMBER_MASK;

    let slot = cpu.interrupt_cursor;
    if slot <= INTERRUPT_STATUS_END {
        cpu.write_memory(slot, number)?;
        cpu.interrupt_cursor = slot + 1;

        let status = cpu.read_register(IS)?;
        cpu.write_register(IS, status | (1 << number))?;
    } else {
        warn!(
            "interrupt {} dropped at PC 0x{:02X}: status area full",
            number, cpu.pc
        );
    }

    cpu.advance(opcode);

    Ok(())
}

/// Executes IRET.
///
/// Pops R6 down to R0, then FL, then PC, and re-enables interrupts.
pub(crate) fn execute_iret<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    _opcode: Opcode,
) -> Result<(), ExecutionError> {
    for reg in (0..IS + 1).rev() {
        let value = cpu.pop()?;
        cpu.write_register(reg, value)?;
    }

    cpu.flags = Flags::from_bits(cpu.pop()?);
    cpu.pc = cpu.pop()? as u16;
    cpu.interrupts_enabled = true;

    Ok(())
}
