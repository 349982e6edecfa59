//! WASM API for the LS-8 emulator.
//!
//! Provides JavaScript-callable interfaces for loading programs, CPU control,
//! state inspection and disassembly.

use std::io::{self, Write};

use wasm_bindgen::prelude::*;

use crate::disassembler::formatter::format_listing_line;
use crate::{disassemble, MemoryBus, Ram, CPU};

/// Decodes one chunk of PRN/PRA output. PRA emits characters as UTF-8, so
/// bytes 0x80-0xFF arrive as two-byte sequences.
fn output_text(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf).into_owned()
}

/// Forwards PRN/PRA output to a JavaScript callback, one call per write.
struct JsOutput {
    on_output: js_sys::Function,
}

impl Write for JsOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = output_text(buf);
        self.on_output
            .call1(&JsValue::NULL, &JsValue::from_str(&text))
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("{:?}", e)))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

fn js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Ls8Emulator {
    cpu: CPU<Ram, JsOutput>,
}

#[wasm_bindgen]
impl Ls8Emulator {
    /// Create a new LS-8 emulator; `on_output` receives PRN/PRA text.
    #[wasm_bindgen(constructor)]
    pub fn new(on_output: js_sys::Function) -> Self {
        Ls8Emulator {
            cpu: CPU::with_output(Ram::new(), JsOutput { on_output }),
        }
    }

    /// Parse LS-8 program text and load it at address 0
    pub fn load_source(&mut self, source: &str) -> Result<(), JsError> {
        self.cpu.load_source(source).map_err(js_error)
    }

    /// Load raw program bytes at address 0
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu.load_bytes(program).map_err(js_error)
    }

    /// Execute a single instruction; returns true once halted
    pub fn step(&mut self) -> Result<bool, JsError> {
        self.cpu.step().map_err(js_error)?;
        Ok(self.cpu.is_halted())
    }

    /// Execute up to `max_steps` instructions and return the number executed
    pub fn run(&mut self, max_steps: u32) -> Result<u32, JsError> {
        self.cpu
            .run_for_steps(max_steps as u64)
            .map(|n| n as u32)
            .map_err(js_error)
    }

    /// Reset registers, flags and PC; memory is kept
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Clear memory and reset the CPU
    pub fn clear(&mut self) {
        self.cpu.memory_mut().clear();
        self.cpu.reset();
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Flags packed as `00000LGE`
    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u8 {
        self.cpu.flags().bits()
    }

    #[wasm_bindgen(getter)]
    pub fn halted(&self) -> bool {
        self.cpu.is_halted()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.cpu.steps() as f64 // Convert u64 to f64 for JavaScript
    }

    /// R0-R7
    pub fn registers(&self) -> Vec<u8> {
        self.cpu.registers().to_vec()
    }

    /// The full 256-byte memory image
    pub fn memory(&self) -> Vec<u8> {
        self.cpu.memory().as_bytes().to_vec()
    }

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> Result<u8, JsError> {
        self.cpu.memory().read(addr).map_err(js_error)
    }

    /// Current machine state as a trace line
    pub fn trace(&self) -> String {
        self.cpu.trace()
    }

    /// Disassemble memory starting at an address, one listing line per entry
    pub fn disassemble(&self, start_addr: u8, num_instructions: u32) -> Vec<JsValue> {
        let image = &self.cpu.memory().as_bytes()[start_addr as usize..];

        disassemble(image, start_addr as u16)
            .iter()
            .take(num_instructions as usize)
            .map(|instr| JsValue::from_str(&format_listing_line(instr)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Opcode;

    #[test]
    fn test_output_text_decodes_utf8() {
        assert_eq!(output_text(&[0xC3, 0xA9, 0x0A]), "\u{e9}\n");
        assert_eq!(output_text(b"72\n"), "72\n");
    }

    #[test]
    fn test_output_text_matches_pra() {
        let mut cpu = CPU::with_output(Ram::new(), Vec::new());
        cpu.load_bytes(&[Opcode::Pra.byte(), 0, Opcode::Hlt.byte()]).unwrap();
        cpu.set_register(0, 0xE9).unwrap();

        cpu.run().unwrap();

        assert_eq!(output_text(cpu.output()), "\u{e9}\n");
    }
}
