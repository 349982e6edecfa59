//! Fuzz target for the program loader.
//!
//! Feeds arbitrary text to the parser; it must either return bytes or an
//! error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use ls8::{parse_program, LoadError, Ram, CPU};

fuzz_target!(|data: &[u8]| {
    let source = String::from_utf8_lossy(data);

    match parse_program(&source) {
        Ok(bytes) => {
            // Every byte came from a non-empty line
            assert!(bytes.len() <= source.lines().count());

            let mut cpu = CPU::with_output(Ram::new(), std::io::sink());
            match cpu.load_bytes(&bytes) {
                Ok(()) => assert!(bytes.len() <= 256),
                Err(LoadError::ProgramTooLarge { len }) => assert_eq!(len, bytes.len()),
                Err(err) => panic!("unexpected load error: {}", err),
            }
        }
        Err(LoadError::MalformedToken { line, token }) => {
            assert!(line >= 1);
            assert!(!token.is_empty());
        }
        Err(err) => panic!("unexpected parse error: {}", err),
    }
});
