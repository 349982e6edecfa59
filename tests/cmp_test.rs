//! Tests for the CMP instruction.
//!
//! After every CMP exactly one of E, G, L is set.

use ls8::{Flags, Opcode, Ram, CPU};

fn setup_cpu(program: &[u8]) -> CPU<Ram, Vec<u8>> {
    let mut cpu = CPU::with_output(Ram::new(), Vec::new());
    cpu.load_bytes(program).unwrap();
    cpu
}

fn compare(a: u8, b: u8) -> Flags {
    let mut cpu = setup_cpu(&[Opcode::Cmp.byte(), 3, 4]);
    cpu.set_register(3, a).unwrap();
    cpu.set_register(4, b).unwrap();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.register(3).unwrap(), a, "CMP must not write registers");
    assert_eq!(cpu.register(4).unwrap(), b, "CMP must not write registers");
    cpu.flags()
}

#[test]
fn test_cmp_equal() {
    assert_eq!(
        compare(7, 7),
        Flags {
            equal: true,
            greater: false,
            less: false
        }
    );
}

#[test]
fn test_cmp_greater() {
    assert_eq!(
        compare(200, 7),
        Flags {
            equal: false,
            greater: true,
            less: false
        }
    );
}

#[test]
fn test_cmp_less() {
    // The less-than outcome must not also report equal
    assert_eq!(
        compare(7, 200),
        Flags {
            equal: false,
            greater: false,
            less: true
        }
    );
}

#[test]
fn test_cmp_is_unsigned() {
    assert!(compare(0x80, 0x7F).greater);
}

#[test]
fn test_cmp_replaces_previous_flags() {
    let mut cpu = setup_cpu(&[Opcode::Cmp.byte(), 0, 1, Opcode::Cmp.byte(), 1, 0]);
    cpu.set_register(0, 1).unwrap();
    cpu.set_register(1, 2).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.flags().bits(), 0b100);

    cpu.step().unwrap();
    assert_eq!(cpu.flags().bits(), 0b010);
}
