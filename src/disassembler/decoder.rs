//! Instruction decoder for the LS-8 disassembler

use crate::disassembler::Instruction;
use crate::Opcode;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` for unknown opcodes and for instructions whose operands run past
/// the end of `bytes`
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&byte, rest) = bytes.split_first()?;
    let opcode = Opcode::decode(byte)?;

    let operand_count = opcode.operand_count() as usize;
    if rest.len() < operand_count {
        return None;
    }

    Some(Instruction {
        address,
        byte,
        opcode: Some(opcode),
        operand_bytes: rest[..operand_count].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_operands() {
        let instr = decode_instruction(&[0xA0, 0x01, 0x02, 0xFF], 0x20).unwrap();
        assert_eq!(instr.opcode, Some(Opcode::Add));
        assert_eq!(instr.operand_bytes, vec![0x01, 0x02]);
        assert_eq!(instr.address, 0x20);
        assert_eq!(instr.size_bytes(), 3);
    }

    #[test]
    fn test_decode_no_operands() {
        let instr = decode_instruction(&[0x11, 0x99], 0).unwrap();
        assert_eq!(instr.opcode, Some(Opcode::Ret));
        assert!(instr.operand_bytes.is_empty());
    }

    #[test]
    fn test_decode_unknown() {
        assert_eq!(decode_instruction(&[0xFF], 0), None);
        assert_eq!(decode_instruction(&[], 0), None);
    }
}
