use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use ls8::disassembler::formatter::format_listing_line;
use ls8::{disassemble, loader, Ram, CPU};

#[derive(Parser, Debug)]
#[command(name = "ls8")]
#[command(about = "Run a program on the LS-8 virtual CPU", long_about = None)]
struct Args {
    /// Program file: one binary byte per line, `#` starts a comment
    program: PathBuf,

    /// Stop after this many instructions even if the program has not halted
    #[arg(long)]
    max_steps: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Log a trace line before every instruction (implies --log-level trace)
    #[arg(long)]
    trace: bool,

    /// Print the disassembled program instead of running it
    #[arg(long)]
    disassemble: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.trace {
        LevelFilter::Trace
    } else {
        args.log_level
    };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("failed to initialize logging")?;

    if args.disassemble {
        let program = loader::read_program(&args.program)?;
        for instr in disassemble(&program, 0) {
            println!("{}", format_listing_line(&instr));
        }
        return Ok(());
    }

    let mut cpu = CPU::new(Ram::new());
    cpu.load(&args.program)
        .with_context(|| format!("failed to load {}", args.program.display()))?;

    match args.max_steps {
        Some(budget) => {
            cpu.run_for_steps(budget)?;
            if !cpu.is_halted() {
                log::warn!("stopped after {} steps without halting", budget);
            }
        }
        None => cpu.run()?,
    }

    Ok(())
}
