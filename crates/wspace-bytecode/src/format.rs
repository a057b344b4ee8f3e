//! Shared formatting utilities for program dump and execution trace.
//!
//! Both dump and trace use the same column layout:
//! ```text
//! | 2 | index | 1 |   5   | 1 | content              | 1 | target |
//! |   | pad   |   | (sym) |   |                      |   |        |
//! ```

/// Column widths for instruction line formatting.
pub mod cols {
    /// Leading indentation (2 spaces).
    pub const INDENT: usize = 2;
    /// Gap between columns (1 space).
    pub const GAP: usize = 1;
    /// Symbol column width (5 chars: 2 left + 1 center + 2 right).
    pub const SYMBOL: usize = 5;
    /// Total width before targets are right-aligned.
    pub const TOTAL_WIDTH: usize = 36;
}

/// Symbols for the 5-character symbol column.
///
/// Format: `| left(2) | center(1) | right(2) |`
#[derive(Clone, Copy, Debug)]
pub struct Symbol {
    pub left: &'static str,
    pub center: &'static str,
    pub right: &'static str,
}

impl Default for Symbol {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Symbol {
    pub const fn new(left: &'static str, center: &'static str, right: &'static str) -> Self {
        Self {
            left,
            center,
            right,
        }
    }

    /// Empty symbol (5 spaces).
    pub const EMPTY: Symbol = Symbol::new("  ", " ", "  ");

    /// Format as a 5-character string.
    pub fn format(&self) -> String {
        format!("{}{}{}", self.left, self.center, self.right)
    }
}

/// Trace sub-line symbols.
pub mod trace {
    use super::Symbol;

    /// Label recorded in the label table.
    pub const LABEL: Symbol = Symbol::new("  ", "●", "  ");
    /// Control transfer (jump, taken branch).
    pub const JUMP: Symbol = Symbol::new("  ", "▷", "  ");
    /// Call: entering a subroutine.
    pub const CALL: Symbol = Symbol::new("  ", "▶", "  ");
    /// Return: back to the caller.
    pub const RETURN: Symbol = Symbol::new("  ", "◀", "  ");
    /// Stack snapshot.
    pub const STACK: Symbol = Symbol::new("  ", "⬥", "  ");
    /// Instruction decoded by the tokenizer.
    pub const DECODE: Symbol = Symbol::new("  ", "⬦", "  ");
    /// Halt.
    pub const HALT: Symbol = Symbol::new("  ", "◼", "  ");
}

/// Calculate minimum width needed to display numbers up to `count - 1`.
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

/// Builder for formatted output lines.
///
/// Constructs lines following the column layout:
/// `<indent><index><gap><symbol><gap><content>...<target>`
pub struct LineBuilder {
    step_width: usize,
}

impl LineBuilder {
    pub fn new(step_width: usize) -> Self {
        Self { step_width }
    }

    pub fn step_width(&self) -> usize {
        self.step_width
    }

    /// Build an instruction line prefix: `  <index> <symbol> `
    pub fn instruction_prefix(&self, index: usize, symbol: Symbol) -> String {
        format!(
            "{:indent$}{:0sw$} {} ",
            "",
            index,
            symbol.format(),
            indent = cols::INDENT,
            sw = self.step_width,
        )
    }

    /// Build a sub-line prefix (blank index area): `     <symbol> `
    pub fn subline_prefix(&self, symbol: Symbol) -> String {
        let step_area = cols::INDENT + self.step_width + cols::GAP;
        format!("{:step_area$}{} ", "", symbol.format())
    }

    /// Pad content to total width and append the target column.
    ///
    /// Ensures at least 2 spaces between content and target.
    pub fn pad_target(&self, base: String, target: &str) -> String {
        if target.is_empty() {
            return base;
        }
        let padding = cols::TOTAL_WIDTH
            .saturating_sub(display_width(&base))
            .max(2);
        format!("{base}{:padding$}{target}", "")
    }
}

/// Calculate display width of a string, ignoring ANSI escape sequences.
///
/// ANSI sequences have the form `\x1b[...m` and render as zero-width.
fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;

    for c in s.chars() {
        if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else if c == '\x1b' {
            in_escape = true;
        } else {
            width += 1;
        }
    }

    width
}

/// Format a stack as `[bottom … top]`.
pub fn format_stack(stack: &[i64]) -> String {
    let items: Vec<String> = stack.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(" "))
}
