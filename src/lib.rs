pub mod assembler;
pub mod codec;
pub mod error;
pub mod operand;
pub mod parser;

pub mod isa {
    pub mod mips1; // MIPS I integer subset tables
}

pub use assembler::{Assembler, ParsedLine, Program, SymbolTable, BASE_PC};
pub use codec::{to_hex, Bits};
pub use error::AsmError;

/// Assemble a MIPS source text into 32-bit machine words, one per
/// instruction, in source order. The first instruction is placed at
/// [`BASE_PC`].
///
/// ```rust
/// let words = mipsasm_rs::assemble("add $t0, $t1, $t2").unwrap();
/// assert_eq!(words, vec![0x012a_4020]);
/// ```
pub fn assemble(source: &str) -> Result<Vec<u32>, AsmError> {
    Assembler::new().assemble(source)
}

/// Assemble with an explicit load address for the first instruction.
///
/// ```rust
/// // `j start` at base 0x1000 encodes the word address 0x1000 >> 2.
/// let words = mipsasm_rs::assemble_at("start: j start", 0x1000).unwrap();
/// assert_eq!(words, vec![(2 << 26) | 0x400]);
/// ```
pub fn assemble_at(source: &str, base: u32) -> Result<Vec<u32>, AsmError> {
    Assembler::with_base(base).assemble(source)
}
