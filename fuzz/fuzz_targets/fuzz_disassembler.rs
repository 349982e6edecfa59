//! Fuzz target for the disassembler.
//!
//! This target feeds arbitrary byte sequences to the disassembler
//! to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ls8::disassembler::formatter::format_listing_line;
use ls8::disassemble;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    bytes: Vec<u8>,
    start_address: u8,
}

fuzz_target!(|input: FuzzInput| {
    if input.bytes.len() > 256 {
        return;
    }

    let instructions = disassemble(&input.bytes, input.start_address as u16);

    let mut total_size = 0;
    let mut expected_address = input.start_address as u16;

    for instr in &instructions {
        assert_eq!(instr.address, expected_address);
        assert!((1..=3).contains(&instr.size_bytes()));

        // Unknown bytes never carry operands
        if instr.opcode.is_none() {
            assert!(instr.operand_bytes.is_empty());
        }

        let _ = format_listing_line(instr);

        total_size += instr.size_bytes();
        expected_address = expected_address.wrapping_add(instr.size_bytes() as u16);
    }

    assert_eq!(total_size, input.bytes.len());
});
