//! # Register File and Flags
//!
//! The LS-8 has eight 8-bit general-purpose registers. Three of them carry a
//! conventional meaning:
//!
//! - **R5 (IM)**: interrupt mask
//! - **R6 (IS)**: interrupt status
//! - **R7 (SP)**: stack pointer
//!
//! They remain ordinary registers and can be read and written by any
//! instruction.

use std::cmp::Ordering;

use crate::memory::STACK_START;
use crate::AddressingFault;

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 8;

/// Interrupt mask register index.
pub const IM: u8 = 5;

/// Interrupt status register index.
pub const IS: u8 = 6;

/// Stack pointer register index.
pub const SP: u8 = 7;

/// The eight general-purpose registers.
///
/// # Examples
///
/// ```
/// use ls8::{RegisterFile, SP};
///
/// let regs = RegisterFile::new();
/// assert_eq!(regs.get(SP), Ok(0xF4));
/// assert_eq!(regs.get(0), Ok(0));
/// assert!(regs.get(8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; REGISTER_COUNT],
}

impl RegisterFile {
    /// Power-on register state: R0-R6 cleared, SP at `STACK_START`.
    pub fn new() -> Self {
        let mut regs = [0; REGISTER_COUNT];
        regs[SP as usize] = STACK_START;
        Self { regs }
    }

    /// Reads register `index`.
    pub fn get(&self, index: u8) -> Result<u8, AddressingFault> {
        self.regs
            .get(index as usize)
            .copied()
            .ok_or(AddressingFault::Register(index))
    }

    /// Writes register `index`.
    pub fn set(&mut self, index: u8, value: u8) -> Result<(), AddressingFault> {
        let reg = self
            .regs
            .get_mut(index as usize)
            .ok_or(AddressingFault::Register(index))?;
        *reg = value;
        Ok(())
    }

    pub fn sp(&self) -> u8 {
        self.regs[SP as usize]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs[SP as usize] = value;
    }

    /// All registers, R0 first.
    pub fn as_array(&self) -> [u8; REGISTER_COUNT] {
        self.regs
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

/// Comparison flags set by CMP.
///
/// After any CMP exactly one of `equal`, `greater` and `less` is set. Before
/// the first CMP all three are clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// E: operands were equal
    pub equal: bool,

    /// G: first operand was greater
    pub greater: bool,

    /// L: first operand was less
    pub less: bool,
}

impl Flags {
    /// Builds the flags for the outcome of comparing the first operand to the second.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8::Flags;
    /// use std::cmp::Ordering;
    ///
    /// let fl = Flags::from_ordering(3u8.cmp(&7));
    /// assert!(fl.less && !fl.equal && !fl.greater);
    /// ```
    pub fn from_ordering(ordering: Ordering) -> Self {
        Self {
            equal: ordering == Ordering::Equal,
            greater: ordering == Ordering::Greater,
            less: ordering == Ordering::Less,
        }
    }

    /// Packs the flags as `00000LGE`.
    pub fn bits(&self) -> u8 {
        let mut fl = 0;
        if self.equal {
            fl |= 0b001;
        }
        if self.greater {
            fl |= 0b010;
        }
        if self.less {
            fl |= 0b100;
        }
        fl
    }

    /// Unpacks an `00000LGE` byte; the upper bits are ignored.
    pub fn from_bits(fl: u8) -> Self {
        Self {
            equal: fl & 0b001 != 0,
            greater: fl & 0b010 != 0,
            less: fl & 0b100 != 0,
        }
    }
}
