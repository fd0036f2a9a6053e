//! The two-pass engine: pass 1 walks the source once, binding labels and
//! assigning each instruction its address; pass 2 encodes every parsed
//! line into one 32-bit word using the pass-1 symbol table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::Bits;
use crate::error::AsmError;
use crate::isa::mips1::{self, InstrDesc, Shape};
use crate::operand::{parse_int, parse_memory_operand, parse_register};
use crate::parser::{split_label, strip_comment, tokenize};

/// Load address of the first instruction.
pub const BASE_PC: u32 = 0x0040_0000;

/// One instruction-bearing source line after pass 1. Immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Address assigned before the program counter advanced.
    pub addr: u32,
    /// 1-based physical line number in the source text.
    pub line_number: u32,
    /// Mnemonic, lowercased.
    pub mnemonic: String,
    /// Operand tokens in source order, still unparsed.
    pub operands: Vec<String>,
}

/// Label name to instruction address. Written only during pass 1.
pub type SymbolTable = HashMap<String, u32>;

/// Pass-1 output: the parsed-line stream plus the label map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub lines: Vec<ParsedLine>,
    pub symbols: SymbolTable,
}

pub struct Assembler {
    base: u32,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Assembler {
    pub fn new() -> Self {
        Self { base: BASE_PC }
    }

    pub fn with_base(base: u32) -> Self {
        Self { base }
    }

    /// Pass 1: single forward scan. Labels bind to the address of the
    /// instruction on the same line, or to the next pc if the label stands
    /// alone. Only instructions advance the counter, by 4. Never fails;
    /// operand and label problems surface in pass 2.
    pub fn parse(&self, source: &str) -> Program {
        let mut pc = self.base;
        let mut symbols = SymbolTable::new();
        let mut lines = Vec::new();

        for (idx, raw) in source.lines().enumerate() {
            let line_number = idx as u32 + 1;
            let text = strip_comment(raw);
            if text.trim().is_empty() {
                continue;
            }
            let (label, rest) = split_label(text);
            if let Some(name) = label {
                symbols.insert(name.to_string(), pc);
            }
            let tokens = tokenize(rest);
            if tokens.is_empty() {
                // label-only line: no address consumed
                continue;
            }
            let mnemonic = tokens[0].to_lowercase();
            let operands = tokens[1..].iter().map(|t| (*t).to_string()).collect();
            lines.push(ParsedLine {
                addr: pc,
                line_number,
                mnemonic,
                operands,
            });
            pc += 4;
        }

        debug!(
            instructions = lines.len(),
            labels = symbols.len(),
            "pass 1 complete"
        );
        Program { lines, symbols }
    }

    /// Pass 2 for a single line: arity check, operand parsing, label
    /// resolution, field assembly. Lines are independent of each other.
    pub fn encode_line(&self, line: &ParsedLine, symbols: &SymbolTable) -> Result<u32, AsmError> {
        let ln = line.line_number;
        let desc = mips1::lookup(&line.mnemonic).ok_or_else(|| AsmError::UnknownInstruction {
            line: ln,
            mnemonic: line.mnemonic.clone(),
        })?;
        let expected = desc.shape.arity();
        if line.operands.len() != expected {
            return Err(AsmError::Arity {
                line: ln,
                mnemonic: line.mnemonic.clone(),
                expected,
                found: line.operands.len(),
            });
        }
        let ops = &line.operands;
        let malformed = |tok: &str| AsmError::MalformedOperand {
            line: ln,
            operand: tok.to_string(),
        };
        let resolve = |label: &str| {
            symbols
                .get(label)
                .copied()
                .ok_or_else(|| AsmError::UnresolvedLabel {
                    line: ln,
                    label: label.to_string(),
                })
        };

        let word = match desc.shape {
            Shape::None => Bits::new(0, 32),
            Shape::ThreeReg => {
                let rd = parse_register(&ops[0], ln)?;
                let rs = parse_register(&ops[1], ln)?;
                let rt = parse_register(&ops[2], ln)?;
                r_word(desc, rs, rt, rd, 0)
            }
            Shape::Shift => {
                let rd = parse_register(&ops[0], ln)?;
                let rt = parse_register(&ops[1], ln)?;
                let shamt = parse_int(&ops[2]).ok_or_else(|| malformed(&ops[2]))?;
                r_word(desc, 0, rt, rd, shamt)
            }
            Shape::JumpReg => {
                let rs = parse_register(&ops[0], ln)?;
                r_word(desc, rs, 0, 0, 0)
            }
            Shape::RegRegImm => {
                let rt = parse_register(&ops[0], ln)?;
                let rs = parse_register(&ops[1], ln)?;
                let imm = parse_int(&ops[2]).ok_or_else(|| malformed(&ops[2]))?;
                i_word(desc, rs, rt, imm)
            }
            Shape::Branch => {
                let rs = parse_register(&ops[0], ln)?;
                let rt = parse_register(&ops[1], ln)?;
                let target = resolve(&ops[2])?;
                // word offset relative to pc + 4; always a multiple of 4
                let offset = (i64::from(target) - i64::from(line.addr) - 4) / 4;
                i_word(desc, rs, rt, offset)
            }
            Shape::Mem => {
                let rt = parse_register(&ops[0], ln)?;
                let (base, imm) = parse_memory_operand(&ops[1], ln)?;
                i_word(desc, base, rt, imm)
            }
            Shape::Target => {
                let target = resolve(&ops[0])?;
                Bits::new(i64::from(desc.opcode), 6).concat(Bits::new(i64::from(target >> 2), 26))
            }
        };
        Ok(word.value())
    }

    /// Both passes: parse, then encode every line in source order.
    pub fn assemble(&self, source: &str) -> Result<Vec<u32>, AsmError> {
        let program = self.parse(source);
        program
            .lines
            .iter()
            .map(|line| self.encode_line(line, &program.symbols))
            .collect()
    }
}

/// `opcode | rs | rt | rd | shamt | funct`, opcode fixed at zero.
fn r_word(desc: &InstrDesc, rs: u8, rt: u8, rd: u8, shamt: i64) -> Bits {
    Bits::new(0, 6)
        .concat(Bits::new(i64::from(rs), 5))
        .concat(Bits::new(i64::from(rt), 5))
        .concat(Bits::new(i64::from(rd), 5))
        .concat(Bits::new(shamt, 5))
        .concat(Bits::new(i64::from(desc.funct), 6))
}

/// `opcode | rs | rt | imm16`, immediate truncated to 16 bits.
fn i_word(desc: &InstrDesc, rs: u8, rt: u8, imm: i64) -> Bits {
    Bits::new(i64::from(desc.opcode), 6)
        .concat(Bits::new(i64::from(rs), 5))
        .concat(Bits::new(i64::from(rt), 5))
        .concat(Bits::new(imm, 16))
}
