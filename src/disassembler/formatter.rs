//! Formatting functions for disassembled instructions

use crate::disassembler::Instruction;
use crate::Opcode;

/// Format a single instruction as assembly text
///
/// Register operands print as `R0`-`R7`; the second operand of LDI is an
/// immediate and prints in decimal. Unknown bytes print as `.byte $XX`.
pub fn format_instruction(instr: &Instruction) -> String {
    let opcode = match instr.opcode {
        Some(opcode) => opcode,
        None => return format!(".byte ${:02X}", instr.byte),
    };

    let operands: Vec<String> = instr
        .operand_bytes
        .iter()
        .enumerate()
        .map(|(i, &operand)| {
            if opcode == Opcode::Ldi && i == 1 {
                operand.to_string()
            } else {
                format!("R{}", operand)
            }
        })
        .collect();

    if operands.is_empty() {
        opcode.mnemonic().to_string()
    } else {
        format!("{} {}", opcode.mnemonic(), operands.join(","))
    }
}

/// Format a listing line: address, raw bytes and instruction text
///
/// ```
/// use ls8::disassembler::{decoder::decode_instruction, formatter::format_listing_line};
///
/// let instr = decode_instruction(&[0x82, 0x01, 0xF4], 0x0A).unwrap();
/// assert_eq!(format_listing_line(&instr), "0A: 82 01 F4  LDI R1,244");
/// ```
pub fn format_listing_line(instr: &Instruction) -> String {
    let mut bytes = vec![format!("{:02X}", instr.byte)];
    bytes.extend(instr.operand_bytes.iter().map(|b| format!("{:02X}", b)));

    format!(
        "{:02X}: {:<8}  {}",
        instr.address,
        bytes.join(" "),
        format_instruction(instr)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instr(byte: u8, operand_bytes: Vec<u8>) -> Instruction {
        Instruction {
            address: 0,
            byte,
            opcode: Opcode::decode(byte),
            operand_bytes,
        }
    }

    #[test]
    fn test_format_register_operands() {
        assert_eq!(format_instruction(&instr(0xA2, vec![0, 1])), "MUL R0,R1");
        assert_eq!(format_instruction(&instr(0x50, vec![3])), "CALL R3");
        assert_eq!(format_instruction(&instr(0x84, vec![2, 5])), "ST R2,R5");
    }

    #[test]
    fn test_format_immediate() {
        assert_eq!(format_instruction(&instr(0x82, vec![0, 8])), "LDI R0,8");
    }

    #[test]
    fn test_format_unknown() {
        assert_eq!(format_instruction(&instr(0xFF, vec![])), ".byte $FF");
    }

    #[test]
    fn test_listing_line_pads_bytes() {
        assert_eq!(format_listing_line(&instr(0x01, vec![])), "00: 01        HLT");
    }
}
