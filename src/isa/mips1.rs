//! Static tables for the supported MIPS I integer subset: mnemonic to
//! opcode/function-code/format, and register name to index.

use serde::{Deserialize, Serialize};

/// Primary field layout of an instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Format {
    R,
    I,
    J,
}

/// Operand shape expected by the encoder for one mnemonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `rd, rs, rt`
    ThreeReg,
    /// `rd, rt, shamt`
    Shift,
    /// `rs`
    JumpReg,
    /// `rt, rs, imm`
    RegRegImm,
    /// `rs, rt, label`
    Branch,
    /// `rt, imm(base)`
    Mem,
    /// `label`
    Target,
    /// no operands
    None,
}

impl Shape {
    /// Exact operand count the encoder requires.
    pub fn arity(self) -> usize {
        match self {
            Shape::ThreeReg | Shape::Shift | Shape::RegRegImm | Shape::Branch => 3,
            Shape::Mem => 2,
            Shape::JumpReg | Shape::Target => 1,
            Shape::None => 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InstrDesc {
    pub mnemonic: &'static str,
    pub format: Format,
    pub shape: Shape,
    pub opcode: u8,
    /// Secondary discriminator, meaningful only for R-type (opcode 0).
    pub funct: u8,
}

const fn r(mnemonic: &'static str, shape: Shape, funct: u8) -> InstrDesc {
    InstrDesc {
        mnemonic,
        format: Format::R,
        shape,
        opcode: 0,
        funct,
    }
}

const fn i(mnemonic: &'static str, shape: Shape, opcode: u8) -> InstrDesc {
    InstrDesc {
        mnemonic,
        format: Format::I,
        shape,
        opcode,
        funct: 0,
    }
}

const fn j(mnemonic: &'static str, opcode: u8) -> InstrDesc {
    InstrDesc {
        mnemonic,
        format: Format::J,
        shape: Shape::Target,
        opcode,
        funct: 0,
    }
}

pub const TABLE: &[InstrDesc] = &[
    // nop assembles to the all-zero word (sll $zero, $zero, 0)
    r("nop", Shape::None, 0x00),
    r("add", Shape::ThreeReg, 0x20),
    r("sub", Shape::ThreeReg, 0x22),
    r("and", Shape::ThreeReg, 0x24),
    r("or", Shape::ThreeReg, 0x25),
    r("xor", Shape::ThreeReg, 0x26),
    r("nor", Shape::ThreeReg, 0x27),
    r("slt", Shape::ThreeReg, 0x2a),
    r("sll", Shape::Shift, 0x00),
    r("srl", Shape::Shift, 0x02),
    r("sra", Shape::Shift, 0x03),
    r("jr", Shape::JumpReg, 0x08),
    i("addi", Shape::RegRegImm, 8),
    i("slti", Shape::RegRegImm, 10),
    i("andi", Shape::RegRegImm, 12),
    i("ori", Shape::RegRegImm, 13),
    i("xori", Shape::RegRegImm, 14),
    i("beq", Shape::Branch, 4),
    i("bne", Shape::Branch, 5),
    i("lw", Shape::Mem, 35),
    i("sw", Shape::Mem, 43),
    j("j", 2),
    j("jal", 3),
];

pub fn lookup(mnemonic: &str) -> Option<&'static InstrDesc> {
    TABLE.iter().find(|d| d.mnemonic == mnemonic)
}

/// Canonical register names, indexed by register number ($ prefix stripped).
pub const REGISTER_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", // 0..7
    "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", // 8..15
    "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", // 16..23
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra", // 24..31
];

/// Look up a canonical register name (without the `$`).
pub fn register_number(name: &str) -> Option<u8> {
    REGISTER_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|n| n as u8)
}
