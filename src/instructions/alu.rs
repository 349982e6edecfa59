//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logic and comparison operations:
//! - Binary: ADD, SUB, MUL, DIV, MOD, AND, OR, XOR, SHL, SHR (`rA = rA op rB`)
//! - Unary: INC, DEC, NOT (`rA = op rA`)
//! - CMP: sets exactly one of the E, G, L flags
//!
//! Registers are 8 bits wide and all arithmetic wraps. Shifting by 8 or more
//! clears the register.

use std::io::Write;

use crate::{ExecutionError, Flags, MemoryBus, Opcode, CPU};

/// Executes any ALU instruction.
///
/// PC advances by the instruction size after the operation, including when a
/// zero divisor makes DIV or MOD fail.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU
/// * `opcode` - The decoded ALU opcode
pub(crate) fn execute_alu<M: MemoryBus, W: Write>(
    cpu: &mut CPU<M, W>,
    opcode: Opcode,
) -> Result<(), ExecutionError> {
    let pc = cpu.pc;
    let reg_a = cpu.operand(1)?;
    let a = cpu.read_register(reg_a)?;

    let b = if opcode.operand_count() == 2 {
        let reg_b = cpu.operand(2)?;
        cpu.read_register(reg_b)?
    } else {
        0
    };

    let result = match opcode {
        Opcode::Add => Some(a.wrapping_add(b)),
        Opcode::Sub => Some(a.wrapping_sub(b)),
        Opcode::Mul => Some(a.wrapping_mul(b)),
        Opcode::Div | Opcode::Mod => {
            if b == 0 {
                cpu.advance(opcode);
                return Err(ExecutionError::DivisionByZero {
                    mnemonic: opcode.mnemonic(),
                    pc,
                });
            }
            Some(if opcode == Opcode::Div { a / b } else { a % b })
        }
        Opcode::And => Some(a & b),
        Opcode::Or => Some(a | b),
        Opcode::Xor => Some(a ^ b),
        Opcode::Shl => Some(a.checked_shl(b as u32).unwrap_or(0)),
        Opcode::Shr => Some(a.checked_shr(b as u32).unwrap_or(0)),
        Opcode::Inc => Some(a.wrapping_add(1)),
        Opcode::Dec => Some(a.wrapping_sub(1)),
        Opcode::Not => Some(!a),
        Opcode::Cmp => {
            cpu.flags = Flags::from_ordering(a.cmp(&b));
            None
        }
        _ => unreachable!("{} is not an ALU instruction", opcode),
    };

    if let Some(value) = result {
        cpu.write_register(reg_a, value)?;
    }

    cpu.advance(opcode);

    Ok(())
}
