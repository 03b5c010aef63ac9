use std::env;
use std::io::{self, IsTerminal, Write};

use crate::Error;
use crate::theme::Palette;

/// Which phase a failure came from; picks the header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Parsing,
    Runtime,
}

impl Stage {
    fn header(self) -> &'static str {
        match self {
            Stage::Parsing => "Parsing error:",
            Stage::Runtime => "Runtime error:",
        }
    }
}

/// Color stderr diagnostics only on a terminal, and never when `NO_COLOR` is set.
pub fn use_color() -> bool {
    env::var_os("NO_COLOR").is_none_or(|v| v.is_empty()) && io::stderr().is_terminal()
}

/// Print a header line followed by an indented detail line.
pub fn print_failure(header: &str, detail: &str, palette: &Palette) {
    eprintln!("{}", palette.header.paint(header));
    eprintln!("  {}", palette.message.paint(detail));
    let _ = io::stderr().flush();
}

/// Pretty-print an interpreter error with the offending source line and a caret.
pub fn print_error(stage: Stage, code: &str, err: &Error, palette: &Palette) {
    print_failure(stage.header(), &err.to_string(), palette);

    let (slice, caret_offset) = context_window(code, err.position());
    if slice.is_empty() {
        return;
    }
    eprintln!("  {}", palette.source.paint(slice));
    let underline = format!("{}^", " ".repeat(caret_offset));
    eprintln!("  {}", palette.caret.paint(underline));
    let _ = io::stderr().flush();
}

/// A short window of the line holding byte `pos`, plus the caret's column
/// (in chars) within that window.
pub fn context_window(code: &str, pos: usize) -> (&str, usize) {
    // Show a short window around the position for context
    const WINDOW_BYTES: usize = 32;

    let mut pos = pos.min(code.len());
    while !code.is_char_boundary(pos) {
        pos -= 1;
    }

    let line_start = code[..pos].rfind('\n').map_or(0, |i| i + 1);
    let line_end = code[pos..].find('\n').map_or(code.len(), |i| pos + i);

    let mut start = pos.saturating_sub(WINDOW_BYTES).max(line_start);
    while !code.is_char_boundary(start) {
        start += 1;
    }
    let mut end = (pos + WINDOW_BYTES + 1).min(line_end);
    while !code.is_char_boundary(end) {
        end += 1;
    }

    let caret = code[start..pos].chars().count();
    (code[start..end].trim_end_matches('\r'), caret)
}
