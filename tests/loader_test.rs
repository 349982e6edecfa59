//! Program loading tests
//!
//! Covers reading program files from disk and placing them in memory.

use std::fs;
use std::path::PathBuf;

use ls8::{LoadError, MemoryBus, Ram, RunState, CPU};

fn setup_cpu() -> CPU<Ram, Vec<u8>> {
    CPU::with_output(Ram::new(), Vec::new())
}

fn write_temp_program(name: &str, source: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ls8-{}-{}.ls8", name, std::process::id()));
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn test_load_file_places_bytes_from_address_zero() {
    let path = write_temp_program(
        "load",
        "# header\n\n10000010 # LDI R0,8\n00000000\n00001000\n00000001\n",
    );
    let mut cpu = setup_cpu();

    cpu.load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let image = cpu.memory().as_bytes();
    assert_eq!(&image[..4], &[0x82, 0x00, 0x08, 0x01]);
    assert!(image[4..].iter().all(|&b| b == 0));
}

#[test]
fn test_load_and_run_file() {
    let path = write_temp_program(
        "run",
        "10000010\n00000000\n00001000\n01000111\n00000000\n00000001\n",
    );
    let mut cpu = setup_cpu();

    cpu.load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    cpu.run().unwrap();

    assert_eq!(cpu.output(), b"8\n");
    assert_eq!(cpu.state(), RunState::Halted);
}

#[test]
fn test_load_missing_file() {
    let mut cpu = setup_cpu();
    let err = cpu.load("/nonexistent/dir/missing.ls8").unwrap_err();

    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("missing.ls8"));
}

#[test]
fn test_malformed_file_leaves_memory_untouched() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x00, 0xAA).unwrap();

    let err = cpu.load_source("00000001\n1000201\n").unwrap_err();

    match err {
        LoadError::MalformedToken { line, ref token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "1000201");
        }
        other => panic!("Expected MalformedToken, got {:?}", other),
    }
    assert_eq!(cpu.memory().read(0x00), Ok(0xAA));
}

#[test]
fn test_load_full_memory_image() {
    let mut cpu = setup_cpu();
    let source = "00000001\n".repeat(256);

    cpu.load_source(&source).unwrap();

    assert!(cpu.memory().as_bytes().iter().all(|&b| b == 0x01));
}

#[test]
fn test_load_too_large() {
    let mut cpu = setup_cpu();
    let source = "00000000\n".repeat(257);

    match cpu.load_source(&source) {
        Err(LoadError::ProgramTooLarge { len: 257 }) => {}
        other => panic!("Expected ProgramTooLarge, got {:?}", other),
    }
}

#[test]
fn test_windows_line_endings() {
    let mut cpu = setup_cpu();
    cpu.load_source("10000010\r\n00000000\r\n00000011\r\n").unwrap();
    assert_eq!(&cpu.memory().as_bytes()[..3], &[0x82, 0x00, 0x03]);
}
