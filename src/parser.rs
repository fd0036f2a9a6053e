//! Lexical handling of one source line: comment stripping, label
//! detection, and tokenizing. Address bookkeeping lives in the assembler.

/// Discard everything from the first `#` onward.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split an optional leading `label:` from a line. The label must match
/// `[A-Za-z_]\w*` and may be separated from the colon by whitespace.
/// Returns `(label, rest-of-line)`; detection is best-effort, so text that
/// does not match the label grammar is simply returned unchanged.
pub fn split_label(line: &str) -> (Option<&str>, &str) {
    let text = line.trim_start();
    let end = text
        .char_indices()
        .take_while(|&(pos, c)| {
            if pos == 0 {
                c.is_ascii_alphabetic() || c == '_'
            } else {
                c.is_ascii_alphanumeric() || c == '_'
            }
        })
        .count();
    if end == 0 {
        return (None, text);
    }
    match text[end..].trim_start().strip_prefix(':') {
        Some(rest) => (Some(&text[..end]), rest),
        None => (None, text),
    }
}

/// Split on commas and whitespace, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}
