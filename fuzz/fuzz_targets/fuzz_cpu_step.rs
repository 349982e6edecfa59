//! Fuzz target for CPU execution.
//!
//! Builds an arbitrary machine state and memory image, then runs a bounded
//! number of instructions. Errors are expected; panics are bugs.

#![no_main]

use std::io;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ls8::{Flags, MemoryBus, Ram, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    /// R0-R7 (R7 is the stack pointer)
    registers: [u8; 8],
    pc: u8,
    flag_e: bool,
    flag_g: bool,
    flag_l: bool,
    interrupts_enabled: bool,
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: [u8; 256],
    step_budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Ram::new();
    for (addr, &byte) in input.memory.iter().enumerate() {
        memory.write(addr as u16, byte).unwrap();
    }

    let mut cpu = CPU::with_output(memory, io::sink());

    for (i, &value) in input.cpu_state.registers.iter().enumerate() {
        cpu.set_register(i as u8, value).unwrap();
    }
    cpu.set_pc(input.cpu_state.pc as u16);
    cpu.set_flags(Flags {
        equal: input.cpu_state.flag_e,
        greater: input.cpu_state.flag_g,
        less: input.cpu_state.flag_l,
    });
    cpu.set_interrupts_enabled(input.cpu_state.interrupts_enabled);

    let steps_before = cpu.steps();
    let result = cpu.run_for_steps(input.step_budget as u64);

    // An error always leaves the CPU halted
    if result.is_err() {
        assert!(cpu.is_halted());
    }
    assert!(cpu.steps() - steps_before <= input.step_budget as u64);

    // Once halted, further steps are no-ops
    if cpu.is_halted() {
        let pc = cpu.pc();
        let registers = cpu.registers();
        assert!(cpu.step().is_ok());
        assert_eq!(cpu.pc(), pc);
        assert_eq!(cpu.registers(), registers);
    }
});
