//! # Program Loader
//!
//! LS-8 programs are text files with one byte per line, written as binary
//! digits. Anything after `#` is a comment. Blank and comment-only lines are
//! skipped.
//!
//! ```text
//! # print8.ls8
//! 10000010 # LDI R0,8
//! 00000000
//! 00001000
//! 01000111 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::AddressingFault;

/// Errors raised while reading or parsing a program.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read program {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A retained token is not a binary byte.
    #[error("line {line}: '{token}' is not a binary byte")]
    MalformedToken { line: usize, token: String },

    #[error("program is {len} bytes, memory holds 256")]
    ProgramTooLarge { len: usize },

    #[error(transparent)]
    Memory(#[from] AddressingFault),
}

/// Parses program text into bytes, in file order.
///
/// Each retained token must be exactly eight binary digits. Line numbers in
/// errors are 1-based.
///
/// # Examples
///
/// ```
/// use ls8::parse_program;
///
/// let bytes = parse_program("# header\n\n10000010 # LDI\n00000000\n00001000\n").unwrap();
/// assert_eq!(bytes, vec![0b1000_0010, 0, 8]);
///
/// assert!(parse_program("10000012\n").is_err());
/// ```
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let mut program = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let token = line.split('#').next().unwrap_or_default().trim();
        if token.is_empty() {
            continue;
        }

        program.push(parse_byte(token).ok_or_else(|| LoadError::MalformedToken {
            line: index + 1,
            token: token.to_string(),
        })?);
    }

    Ok(program)
}

fn parse_byte(token: &str) -> Option<u8> {
    // from_str_radix alone would accept a leading '+'
    if token.len() != 8 || !token.bytes().all(|b| b == b'0' || b == b'1') {
        return None;
    }
    u8::from_str_radix(token, 2).ok()
}

/// Reads and parses the program file at `path`.
pub fn read_program(path: &Path) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_program(&source)
}
