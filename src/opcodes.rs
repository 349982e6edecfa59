//! # Opcode Table
//!
//! This module defines every LS-8 instruction as a variant of `Opcode`, with
//! its static metadata attached: mnemonic, operand count and ALU
//! classification.
//!
//! LS-8 opcodes are laid out as `AABCDDDD`:
//!
//! - `AA`: number of operand bytes (0-2)
//! - `B`: 1 if the instruction is executed by the ALU
//! - `C`: 1 if the instruction is a jump, call or return
//! - `DDDD`: instruction identifier
//!
//! The metadata below is written out per variant rather than computed from the
//! bits, and `tests/opcode_table_test.rs` checks the two agree.

use std::fmt;

/// An LS-8 instruction identity. The discriminant is the opcode byte.
///
/// # Examples
///
/// ```
/// use ls8::Opcode;
///
/// let ldi = Opcode::decode(0b1000_0010).unwrap();
/// assert_eq!(ldi, Opcode::Ldi);
/// assert_eq!(ldi.mnemonic(), "LDI");
/// assert_eq!(ldi.operand_count(), 2);
/// assert_eq!(ldi.size(), 3);
/// assert!(!ldi.is_alu());
///
/// assert_eq!(Opcode::decode(0xFF), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Nop = 0b0000_0000,
    Hlt = 0b0000_0001,
    Ret = 0b0001_0001,
    Iret = 0b0001_0011,
    Push = 0b0100_0101,
    Pop = 0b0100_0110,
    Prn = 0b0100_0111,
    Pra = 0b0100_1000,
    Call = 0b0101_0000,
    Int = 0b0101_0010,
    Jmp = 0b0101_0100,
    Jeq = 0b0101_0101,
    Jne = 0b0101_0110,
    Jgt = 0b0101_0111,
    Jlt = 0b0101_1000,
    Jle = 0b0101_1001,
    Jge = 0b0101_1010,
    Inc = 0b0110_0101,
    Dec = 0b0110_0110,
    Not = 0b0110_1001,
    Ldi = 0b1000_0010,
    Ld = 0b1000_0011,
    St = 0b1000_0100,
    Add = 0b1010_0000,
    Sub = 0b1010_0001,
    Mul = 0b1010_0010,
    Div = 0b1010_0011,
    Mod = 0b1010_0100,
    Cmp = 0b1010_0111,
    And = 0b1010_1000,
    Or = 0b1010_1010,
    Xor = 0b1010_1011,
    Shl = 0b1010_1100,
    Shr = 0b1010_1101,
}

/// Every defined opcode, in ascending byte order.
pub const OPCODE_TABLE: [Opcode; 34] = [
    Opcode::Nop,
    Opcode::Hlt,
    Opcode::Ret,
    Opcode::Iret,
    Opcode::Push,
    Opcode::Pop,
    Opcode::Prn,
    Opcode::Pra,
    Opcode::Call,
    Opcode::Int,
    Opcode::Jmp,
    Opcode::Jeq,
    Opcode::Jne,
    Opcode::Jgt,
    Opcode::Jlt,
    Opcode::Jle,
    Opcode::Jge,
    Opcode::Inc,
    Opcode::Dec,
    Opcode::Not,
    Opcode::Ldi,
    Opcode::Ld,
    Opcode::St,
    Opcode::Add,
    Opcode::Sub,
    Opcode::Mul,
    Opcode::Div,
    Opcode::Mod,
    Opcode::Cmp,
    Opcode::And,
    Opcode::Or,
    Opcode::Xor,
    Opcode::Shl,
    Opcode::Shr,
];

impl Opcode {
    /// Decodes an opcode byte. Returns `None` for bytes with no table entry.
    pub fn decode(byte: u8) -> Option<Self> {
        let opcode = match byte {
            0b0000_0000 => Opcode::Nop,
            0b0000_0001 => Opcode::Hlt,
            0b0001_0001 => Opcode::Ret,
            0b0001_0011 => Opcode::Iret,
            0b0100_0101 => Opcode::Push,
            0b0100_0110 => Opcode::Pop,
            0b0100_0111 => Opcode::Prn,
            0b0100_1000 => Opcode::Pra,
            0b0101_0000 => Opcode::Call,
            0b0101_0010 => Opcode::Int,
            0b0101_0100 => Opcode::Jmp,
            0b0101_0101 => Opcode::Jeq,
            0b0101_0110 => Opcode::Jne,
            0b0101_0111 => Opcode::Jgt,
            0b0101_1000 => Opcode::Jlt,
            0b0101_1001 => Opcode::Jle,
            0b0101_1010 => Opcode::Jge,
            0b0110_0101 => Opcode::Inc,
            0b0110_0110 => Opcode::Dec,
            0b0110_1001 => Opcode::Not,
            0b1000_0010 => Opcode::Ldi,
            0b1000_0011 => Opcode::Ld,
            0b1000_0100 => Opcode::St,
            0b1010_0000 => Opcode::Add,
            0b1010_0001 => Opcode::Sub,
            0b1010_0010 => Opcode::Mul,
            0b1010_0011 => Opcode::Div,
            0b1010_0100 => Opcode::Mod,
            0b1010_0111 => Opcode::Cmp,
            0b1010_1000 => Opcode::And,
            0b1010_1010 => Opcode::Or,
            0b1010_1011 => Opcode::Xor,
            0b1010_1100 => Opcode::Shl,
            0b1010_1101 => Opcode::Shr,
            _ => return None,
        };
        Some(opcode)
    }

    /// The opcode byte.
    pub fn byte(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Nop => "NOP",
            Opcode::Hlt => "HLT",
            Opcode::Ret => "RET",
            Opcode::Iret => "IRET",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Prn => "PRN",
            Opcode::Pra => "PRA",
            Opcode::Call => "CALL",
            Opcode::Int => "INT",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
            Opcode::Jgt => "JGT",
            Opcode::Jlt => "JLT",
            Opcode::Jle => "JLE",
            Opcode::Jge => "JGE",
            Opcode::Inc => "INC",
            Opcode::Dec => "DEC",
            Opcode::Not => "NOT",
            Opcode::Ldi => "LDI",
            Opcode::Ld => "LD",
            Opcode::St => "ST",
            Opcode::Add => "ADD",
            Opcode::Sub => "SUB",
            Opcode::Mul => "MUL",
            Opcode::Div => "DIV",
            Opcode::Mod => "MOD",
            Opcode::Cmp => "CMP",
            Opcode::And => "AND",
            Opcode::Or => "OR",
            Opcode::Xor => "XOR",
            Opcode::Shl => "SHL",
            Opcode::Shr => "SHR",
        }
    }

    /// Number of operand bytes following the opcode (0-2).
    pub fn operand_count(self) -> u8 {
        match self {
            Opcode::Nop | Opcode::Hlt | Opcode::Ret | Opcode::Iret => 0,

            Opcode::Push
            | Opcode::Pop
            | Opcode::Prn
            | Opcode::Pra
            | Opcode::Call
            | Opcode::Int
            | Opcode::Jmp
            | Opcode::Jeq
            | Opcode::Jne
            | Opcode::Jgt
            | Opcode::Jlt
            | Opcode::Jle
            | Opcode::Jge
            | Opcode::Inc
            | Opcode::Dec
            | Opcode::Not => 1,

            Opcode::Ldi
            | Opcode::Ld
            | Opcode::St
            | Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Cmp
            | Opcode::And
            | Opcode::Or
            | Opcode::Xor
            | Opcode::Shl
            | Opcode::Shr => 2,
        }
    }

    /// True for instructions executed by the ALU.
    pub fn is_alu(self) -> bool {
        matches!(
            self,
            Opcode::Add
                | Opcode::Sub
                | Opcode::Mul
                | Opcode::Div
                | Opcode::Mod
                | Opcode::Inc
                | Opcode::Dec
                | Opcode::Cmp
                | Opcode::And
                | Opcode::Not
                | Opcode::Or
                | Opcode::Xor
                | Opcode::Shl
                | Opcode::Shr
        )
    }

    /// Total instruction size in bytes (opcode + operands).
    pub fn size(self) -> u8 {
        1 + self.operand_count()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_matches_discriminant() {
        for opcode in OPCODE_TABLE {
            assert_eq!(Opcode::decode(opcode.byte()), Some(opcode));
        }
    }

    #[test]
    fn test_unknown_bytes() {
        let known = (0..=255u8)
            .filter(|&b| Opcode::decode(b).is_some())
            .count();
        assert_eq!(known, OPCODE_TABLE.len());
    }

    #[test]
    fn test_unary_alu_ops_take_one_operand() {
        for op in [Opcode::Inc, Opcode::Dec, Opcode::Not] {
            assert!(op.is_alu());
            assert_eq!(op.operand_count(), 1);
        }
    }
}
