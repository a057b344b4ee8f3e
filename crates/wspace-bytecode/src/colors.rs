//! Terminal styling for dumps and traces.
//!
//! Each field names what it paints, not the color it paints with.

/// Escape sequences for each role, or empty strings when output is plain.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    /// Instruction indices, symbols and stack snapshots.
    pub gutter: &'static str,
    /// Literal operands of parameterized instructions.
    pub operand: &'static str,
    /// Label ids in `[labels]`, label records, jumps and calls.
    pub label: &'static str,
    /// Halt reasons.
    pub halt: &'static str,
    /// Dump section headers.
    pub section: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ANSI: Self = Self {
        gutter: "\x1b[2m",
        operand: "\x1b[36m",
        label: "\x1b[33m",
        halt: "\x1b[32m",
        section: "\x1b[1m",
        reset: "\x1b[0m",
    };

    pub const PLAIN: Self = Self {
        gutter: "",
        operand: "",
        label: "",
        halt: "",
        section: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ANSI } else { Self::PLAIN }
    }

    /// Paint `text` with `style`, closing it with a reset.
    pub fn paint(&self, style: &str, text: impl std::fmt::Display) -> String {
        if style.is_empty() {
            return text.to_string();
        }
        format!("{style}{text}{}", self.reset)
    }
}
