//! # LS-8 CPU Emulator Core
//!
//! An emulator for the LS-8, a small 8-bit register machine with 256 bytes of
//! flat memory, eight general-purpose registers, three comparison flags and a
//! downward-growing stack.
//!
//! This crate provides the CPU state, a trait-based memory bus, a table of
//! opcode metadata, the program loader and a disassembler.
//!
//! ## Quick Start
//!
//! ```rust
//! use ls8::{RunState, Ram, CPU};
//!
//! let source = "\
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ";
//!
//! let mut cpu = CPU::with_output(Ram::new(), Vec::new());
//! cpu.load_source(source).unwrap();
//! cpu.run().unwrap();
//!
//! assert_eq!(cpu.output(), b"8\n");
//! assert_eq!(cpu.state(), RunState::Halted);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory via the `MemoryBus` trait
//! - **Table-Driven Design**: every opcode is an `Opcode` variant carrying its own metadata
//! - **Fail Loudly**: unknown opcodes, bad addresses and division by zero halt the CPU
//!   and surface as `ExecutionError`
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `memory` - MemoryBus trait and the 256-byte RAM
//! - `registers` - Register file and E/G/L flags
//! - `opcodes` - Opcode enumeration and metadata
//! - `loader` - Program text parsing
//! - `disassembler` - Byte image to mnemonic listing

pub mod cpu;
pub mod disassembler;
pub mod loader;
pub mod memory;
pub mod opcodes;
pub mod registers;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use cpu::{RunState, CPU};
pub use disassembler::{disassemble, format_instruction, Instruction};
pub use loader::{parse_program, LoadError};
pub use memory::{MemoryBus, Ram, INTERRUPT_STATUS_START, MEMORY_SIZE, STACK_START};
pub use opcodes::{Opcode, OPCODE_TABLE};
pub use registers::{Flags, RegisterFile, IM, IS, SP};

use thiserror::Error;

/// A memory or register access outside the machine's address space.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingFault {
    /// Memory address at or beyond `MEMORY_SIZE`.
    #[error("address 0x{0:03X} is outside the 256-byte memory")]
    Address(u16),

    /// Register index at or beyond 8.
    #[error("register index {0} does not exist (R0-R7)")]
    Register(u8),
}

/// Errors that can occur during CPU execution.
///
/// Every variant is fatal: the CPU is HALTED by the time `step` returns it,
/// and memory and registers hold whatever the last completed write left.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The byte at PC has no entry in the instruction table.
    #[error("unknown instruction 0x{opcode:02X} at PC 0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    /// An instruction touched memory or a register that does not exist.
    #[error("addressing fault at PC 0x{pc:02X}: {source}")]
    AddressingFault {
        pc: u16,
        #[source]
        source: AddressingFault,
    },

    /// DIV or MOD with a zero divisor.
    #[error("{mnemonic} by zero at PC 0x{pc:02X}")]
    DivisionByZero { mnemonic: &'static str, pc: u16 },

    /// Writing PRN/PRA output failed.
    #[error("failed to write program output")]
    Output(#[from] std::io::Error),
}
