//! Comprehensive tests for the ALU instructions.
//!
//! Tests cover:
//! - Binary arithmetic and bitwise operations store into the first register
//! - 8-bit wraparound on overflow and underflow
//! - Unary INC, DEC, NOT
//! - PC advance by instruction size
//! - Division and modulo by zero halt the CPU

use ls8::{ExecutionError, Opcode, Ram, RunState, CPU};

/// Helper function to create a CPU with `program` loaded at address 0
fn setup_cpu(program: &[u8]) -> CPU<Ram, Vec<u8>> {
    let mut cpu = CPU::with_output(Ram::new(), Vec::new());
    cpu.load_bytes(program).unwrap();
    cpu
}

/// Runs `op R0,R1` with the given register values and returns R0
fn binary_op(op: Opcode, a: u8, b: u8) -> u8 {
    let mut cpu = setup_cpu(&[op.byte(), 0, 1]);
    cpu.set_register(0, a).unwrap();
    cpu.set_register(1, b).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 3, "{} should advance PC by 3", op);
    assert_eq!(cpu.register(1).unwrap(), b, "{} must not modify the second register", op);
    cpu.register(0).unwrap()
}

/// Runs `op R2` with the given register value and returns R2
fn unary_op(op: Opcode, a: u8) -> u8 {
    let mut cpu = setup_cpu(&[op.byte(), 2]);
    cpu.set_register(2, a).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 2, "{} should advance PC by 2", op);
    cpu.register(2).unwrap()
}

// ========== Arithmetic ==========

#[test]
fn test_add() {
    assert_eq!(binary_op(Opcode::Add, 12, 30), 42);
    assert_eq!(binary_op(Opcode::Add, 0xFF, 0x02), 0x01); // wraps
}

#[test]
fn test_sub() {
    assert_eq!(binary_op(Opcode::Sub, 50, 8), 42);
    assert_eq!(binary_op(Opcode::Sub, 0, 1), 0xFF); // wraps
}

#[test]
fn test_mul() {
    assert_eq!(binary_op(Opcode::Mul, 8, 9), 72);
    assert_eq!(binary_op(Opcode::Mul, 16, 16), 0); // 256 wraps to 0
}

#[test]
fn test_div() {
    assert_eq!(binary_op(Opcode::Div, 85, 4), 21);
    assert_eq!(binary_op(Opcode::Div, 3, 7), 0);
}

#[test]
fn test_mod() {
    assert_eq!(binary_op(Opcode::Mod, 85, 4), 1);
    assert_eq!(binary_op(Opcode::Mod, 3, 7), 3);
}

#[test]
fn test_same_register_operands() {
    // ADD R0,R0 doubles R0
    let mut cpu = setup_cpu(&[Opcode::Add.byte(), 0, 0]);
    cpu.set_register(0, 21).unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.register(0).unwrap(), 42);
}

// ========== Bitwise ==========

#[test]
fn test_and_or_xor() {
    assert_eq!(binary_op(Opcode::And, 0b1100_1010, 0b1010_0110), 0b1000_0010);
    assert_eq!(binary_op(Opcode::Or, 0b1100_1010, 0b1010_0110), 0b1110_1110);
    assert_eq!(binary_op(Opcode::Xor, 0b1100_1010, 0b1010_0110), 0b0110_1100);
}

#[test]
fn test_shifts() {
    assert_eq!(binary_op(Opcode::Shl, 0b0000_0101, 2), 0b0001_0100);
    assert_eq!(binary_op(Opcode::Shl, 0b1000_0001, 1), 0b0000_0010);
    assert_eq!(binary_op(Opcode::Shr, 0b1010_0000, 5), 0b0000_0101);
}

#[test]
fn test_shift_by_width_or_more_clears() {
    assert_eq!(binary_op(Opcode::Shl, 0xFF, 8), 0);
    assert_eq!(binary_op(Opcode::Shr, 0xFF, 200), 0);
}

// ========== Unary ==========

#[test]
fn test_inc_dec() {
    assert_eq!(unary_op(Opcode::Inc, 41), 42);
    assert_eq!(unary_op(Opcode::Inc, 0xFF), 0x00);
    assert_eq!(unary_op(Opcode::Dec, 43), 42);
    assert_eq!(unary_op(Opcode::Dec, 0x00), 0xFF);
}

#[test]
fn test_not() {
    assert_eq!(unary_op(Opcode::Not, 0b1010_0101), 0b0101_1010);
    assert_eq!(unary_op(Opcode::Not, 0x00), 0xFF);
}

#[test]
fn test_alu_leaves_flags_alone() {
    let mut cpu = setup_cpu(&[Opcode::Cmp.byte(), 0, 1, Opcode::Add.byte(), 0, 1]);
    cpu.set_register(1, 1).unwrap();

    cpu.step().unwrap(); // CMP: 0 < 1
    let flags = cpu.flags();
    cpu.step().unwrap(); // ADD

    assert_eq!(cpu.flags(), flags);
}

// ========== Division by zero ==========

#[test]
fn test_div_by_zero_halts() {
    let mut cpu = setup_cpu(&[Opcode::Div.byte(), 0, 1, Opcode::Hlt.byte()]);
    cpu.set_register(0, 42).unwrap();

    match cpu.step() {
        Err(ExecutionError::DivisionByZero { mnemonic: "DIV", pc: 0 }) => {}
        other => panic!("Expected DivisionByZero, got {:?}", other),
    }

    assert_eq!(cpu.state(), RunState::Halted);
    assert_eq!(cpu.register(0).unwrap(), 42, "Dividend must be left untouched");
    assert_eq!(cpu.pc(), 3, "PC still advances past the faulting instruction");
}

#[test]
fn test_mod_by_zero_halts() {
    let mut cpu = setup_cpu(&[Opcode::Mod.byte(), 0, 1]);
    cpu.set_register(0, 42).unwrap();

    let err = cpu.run().unwrap_err();
    assert!(matches!(
        err,
        ExecutionError::DivisionByZero { mnemonic: "MOD", .. }
    ));
    assert!(cpu.is_halted());
    assert_eq!(cpu.register(0).unwrap(), 42);
}

#[test]
fn test_invalid_register_operand() {
    let mut cpu = setup_cpu(&[Opcode::Add.byte(), 0, 9]);

    assert!(matches!(
        cpu.step(),
        Err(ExecutionError::AddressingFault { pc: 0, .. })
    ));
    assert!(cpu.is_halted());
}
