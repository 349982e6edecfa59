//! LS-8 Disassembler Module
//!
//! Converts a memory image into human-readable mnemonics such as `LDI R0,8`.

pub mod decoder;
pub mod formatter;

pub use formatter::format_instruction;

use crate::Opcode;

/// A single disassembled instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The raw opcode byte
    pub byte: u8,

    /// Decoded opcode, `None` for bytes with no table entry
    pub opcode: Option<Opcode>,

    /// Operand bytes (0-2)
    pub operand_bytes: Vec<u8>,
}

impl Instruction {
    /// Number of bytes this entry covers.
    pub fn size_bytes(&self) -> usize {
        1 + self.operand_bytes.len()
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// Bytes that do not decode become single-byte `.byte` entries, and an
/// instruction cut off by the end of the slice is also emitted byte by byte.
///
/// # Arguments
///
/// * `bytes` - The memory image to disassemble
/// * `start_address` - Address of `bytes[0]`
///
/// # Examples
///
/// ```
/// use ls8::{disassemble, format_instruction};
///
/// let listing: Vec<String> = disassemble(&[0x82, 0x00, 0x08, 0x47, 0x00, 0x01], 0)
///     .iter()
///     .map(format_instruction)
///     .collect();
///
/// assert_eq!(listing, vec!["LDI R0,8", "PRN R0", "HLT"]);
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut offset = 0;
    let mut address = start_address;

    while offset < bytes.len() {
        let instr = decoder::decode_instruction(&bytes[offset..], address).unwrap_or(Instruction {
            address,
            byte: bytes[offset],
            opcode: None,
            operand_bytes: Vec::new(),
        });

        offset += instr.size_bytes();
        address = address.wrapping_add(instr.size_bytes() as u16);
        instructions.push(instr);
    }

    instructions
}
