//! CPU initialization tests
//!
//! Verifies the power-on state and the accessors used by the rest of the suite.

use ls8::{Flags, MemoryBus, Ram, RunState, CPU, IM, IS, SP};

#[test]
fn test_power_on_state() {
    let cpu = CPU::with_output(Ram::new(), Vec::new());

    assert_eq!(cpu.pc(), 0x00);
    assert_eq!(cpu.state(), RunState::Running);
    assert_eq!(cpu.flags(), Flags::default());
    assert_eq!(cpu.steps(), 0);
    assert!(cpu.interrupts_enabled());
    assert!(cpu.output().is_empty());

    // R0-R6 cleared, SP at 0xF4
    for reg in 0..SP {
        assert_eq!(cpu.register(reg).unwrap(), 0, "R{} should start at 0", reg);
    }
    assert_eq!(cpu.sp(), 0xF4);
    assert_eq!(cpu.register(SP).unwrap(), 0xF4);
}

#[test]
fn test_reserved_register_indices() {
    assert_eq!(IM, 5);
    assert_eq!(IS, 6);
    assert_eq!(SP, 7);
}

#[test]
fn test_memory_is_zeroed() {
    let cpu = CPU::with_output(Ram::new(), Vec::new());
    assert!(cpu.memory().as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_setters() {
    let mut cpu = CPU::with_output(Ram::new(), Vec::new());

    cpu.set_pc(0x42);
    cpu.set_sp(0x80);
    cpu.set_register(3, 0x33).unwrap();
    cpu.set_flags(Flags {
        equal: true,
        greater: false,
        less: false,
    });

    assert_eq!(cpu.pc(), 0x42);
    assert_eq!(cpu.sp(), 0x80);
    assert_eq!(cpu.register(3).unwrap(), 0x33);
    assert!(cpu.flags().equal);
    assert!(cpu.set_register(8, 1).is_err());
}

#[test]
fn test_memory_access_through_cpu() {
    let mut cpu = CPU::with_output(Ram::new(), Vec::new());
    cpu.memory_mut().write(0x20, 0xAB).unwrap();
    assert_eq!(cpu.memory().read(0x20), Ok(0xAB));
}
