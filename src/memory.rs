//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! memory implementation, and `Ram`, the flat 256-byte memory of the LS-8.
//!
//! ## Memory Map
//!
//! Code and data share a single address space:
//!
//! - `0x00..=0xF3`: program bytes (loaded from address 0) and stack
//! - `0xF4`: initial stack pointer, the stack grows downward from here
//! - `0xF5..=0xF7`: reserved
//! - `0xF8..=0xFF`: interrupt status area, one slot per recorded interrupt
//!
//! ## Design Principles
//!
//! Unlike a real bus, an LS-8 access outside `0..MEMORY_SIZE` is a fatal
//! addressing fault, so both operations are fallible.

use crate::AddressingFault;

/// Number of addressable memory cells.
pub const MEMORY_SIZE: usize = 256;

/// Initial value of the stack pointer (R7).
pub const STACK_START: u8 = 0xF4;

/// First slot of the interrupt status area.
pub const INTERRUPT_STATUS_START: u16 = 0xF8;

/// Memory bus trait for CPU to read/write bytes.
///
/// Addresses are passed as `u16` so that an access one past the end of
/// memory (an operand fetch at PC 0xFF, for example) is representable and
/// can be rejected.
///
/// # Examples
///
/// ```
/// use ls8::{AddressingFault, MemoryBus, Ram};
///
/// let mut mem = Ram::new();
/// mem.write(0x42, 0x99).unwrap();
/// assert_eq!(mem.read(0x42), Ok(0x99));
/// assert_eq!(mem.read(0x100), Err(AddressingFault::Address(0x100)));
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified address.
    fn read(&self, addr: u16) -> Result<u8, AddressingFault>;

    /// Writes a byte to the specified address.
    fn write(&mut self, addr: u16, value: u8) -> Result<(), AddressingFault>;
}

/// Flat 256-byte RAM, zero-initialized.
///
/// # Examples
///
/// ```
/// use ls8::{MemoryBus, Ram};
///
/// let mem = Ram::new();
/// assert_eq!(mem.read(0x00), Ok(0x00));
/// assert_eq!(mem.read(0xFF), Ok(0x00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ram {
    data: [u8; MEMORY_SIZE],
}

impl Ram {
    /// Creates a new RAM instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: [0; MEMORY_SIZE],
        }
    }

    /// Returns the whole memory image.
    pub fn as_bytes(&self) -> &[u8; MEMORY_SIZE] {
        &self.data
    }

    /// Zeroes every cell.
    pub fn clear(&mut self) {
        self.data = [0; MEMORY_SIZE];
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: u16) -> Result<u8, AddressingFault> {
        self.data
            .get(addr as usize)
            .copied()
            .ok_or(AddressingFault::Address(addr))
    }

    fn write(&mut self, addr: u16, value: u8) -> Result<(), AddressingFault> {
        let cell = self
            .data
            .get_mut(addr as usize)
            .ok_or(AddressingFault::Address(addr))?;
        *cell = value;
        Ok(())
    }
}
