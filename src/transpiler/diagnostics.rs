use once_cell::sync::Lazy;
use regex::Regex;

/// ANSI escape sequences the compiler colors its output with
static CONTROL_CODES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("control code pattern"));

/// Strip terminal control/formatting codes from compiler output
pub fn strip_control_codes(text: &str) -> String {
    CONTROL_CODES.replace_all(text, "").into_owned()
}

/// Structured diagnostic reported by the external compiler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileDiagnostic {
    /// Message text with control codes stripped
    pub message: String,
    /// Path of the module the compilation was rooted at
    pub path: String,
    /// 1-based line number
    pub line: u32,
    /// Column as reported by the compiler
    pub column: u32,
    /// Untouched compiler text
    pub raw_text: String,
}
