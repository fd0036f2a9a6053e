use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mipsasm_rs::{to_hex, Assembler, BASE_PC};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a MIPS subset source file into hex machine words"
)]
struct Opts {
    /// Input assembly file (one instruction, optionally label-prefixed, per line)
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// Load address of the first instruction
    #[arg(long, default_value_t = BASE_PC)]
    base: u32,
    /// Dump the pass-1 symbol table as JSON to stderr
    #[arg(long)]
    symbols: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts = Opts::parse();
    let text = std::fs::read_to_string(&opts.input)?;

    let asm = Assembler::with_base(opts.base);
    let program = asm.parse(&text);
    if opts.symbols {
        eprintln!("{}", serde_json::to_string_pretty(&program.symbols)?);
    }

    // Encode and print line by line; words already printed stay printed
    // when a later line fails.
    for line in &program.lines {
        let word = asm.encode_line(line, &program.symbols)?;
        println!("{}", to_hex(word));
    }
    Ok(())
}
