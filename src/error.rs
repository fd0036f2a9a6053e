use thiserror::Error;

/// Everything that can stop an assembly run. All variants are fatal and
/// carry the 1-based source line number plus the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AsmError {
    #[error("line {line}: unknown register '{token}'")]
    UnknownRegister { line: u32, token: String },
    #[error("line {line}: bad memory operand '{operand}'")]
    MalformedOperand { line: u32, operand: String },
    #[error("line {line}: {mnemonic} expects {expected} operand(s), got {found}")]
    Arity {
        line: u32,
        mnemonic: String,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: unknown label '{label}'")]
    UnresolvedLabel { line: u32, label: String },
    #[error("line {line}: unknown instruction '{mnemonic}'")]
    UnknownInstruction { line: u32, mnemonic: String },
}
