//! # LS-8 Instruction Implementations
//!
//! This module contains the implementations of all LS-8 instructions, organized
//! by category. Each instruction is implemented as a standalone function that
//! takes a mutable reference to the CPU and the decoded opcode.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic, logic and comparison (ADD, SUB, MUL, DIV, MOD, INC, DEC,
//!   CMP, AND, NOT, OR, XOR, SHL, SHR)
//! - **branches**: Jumps (JMP, JEQ, JNE, JGT, JLT, JLE, JGE)
//! - **control**: Control flow and interrupts (NOP, HLT, CALL, RET, INT, IRET)
//! - **load_store**: Register/memory transfer (LDI, LD, ST)
//! - **output**: Console output (PRN, PRA)
//! - **stack**: Stack operations (PUSH, POP)

pub mod alu;
pub mod branches;
pub mod control;
pub mod load_store;
pub mod output;
pub mod stack;
