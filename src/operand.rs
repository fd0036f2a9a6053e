//! Operand token parsers: register tokens, integer literals, and the
//! `imm(base)` memory-operand form.

use crate::error::AsmError;
use crate::isa::mips1;

/// Parse `$name` (canonical MIPS register name) or `$N` with N in 0..=31
/// into a 5-bit register index.
pub fn parse_register(token: &str, line: u32) -> Result<u8, AsmError> {
    let unknown = || AsmError::UnknownRegister {
        line,
        token: token.to_string(),
    };
    let body = token.trim().strip_prefix('$').ok_or_else(unknown)?;
    if let Some(n) = mips1::register_number(body) {
        return Ok(n);
    }
    // Numeric alias: digits only, no sign, 0..=31.
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
    }
    match body.parse::<u8>() {
        Ok(n) if n < 32 => Ok(n),
        _ => Err(unknown()),
    }
}

/// Integer literal: optional `+`/`-`, then `0x`/`0X` hex or decimal.
pub fn parse_int(token: &str) -> Option<i64> {
    let t = token.trim();
    let (negative, t) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let magnitude = if let Some(hex) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()?
    } else if !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit()) {
        t.parse::<i64>().ok()?
    } else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a memory operand `imm(base)`. Returns the 5-bit base register and
/// the raw immediate; truncation to the 16-bit field happens at encode time.
pub fn parse_memory_operand(token: &str, line: u32) -> Result<(u8, i64), AsmError> {
    let malformed = || AsmError::MalformedOperand {
        line,
        operand: token.to_string(),
    };
    let inner = token.trim().strip_suffix(')').ok_or_else(malformed)?;
    let (imm_text, base_text) = inner.split_once('(').ok_or_else(malformed)?;
    let imm = parse_int(imm_text).ok_or_else(malformed)?;
    let base_text = base_text.trim();
    if !base_text.starts_with('$') {
        return Err(malformed());
    }
    let base = parse_register(base_text, line)?;
    Ok((base, imm))
}
