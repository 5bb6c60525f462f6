//! Terminal console
//!
//! Renders shell output on an ANSI terminal.

use std::io::Write;

use vshell::console::ANSI_RESET;
use vshell::constants::DEFAULT_CONSOLE_WIDTH;
use vshell::{Color, Console};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

pub struct TerminalConsole<W: Write> {
    out: W,
    color: bool,
    width: usize,
}

impl<W: Write> TerminalConsole<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            width: terminal_width(std::env::var("COLUMNS").ok().as_deref()),
        }
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            log::error!("terminal write failed: {}", err);
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Width from the `COLUMNS` value, falling back to the default.
fn terminal_width(columns: Option<&str>) -> usize {
    columns
        .and_then(|c| c.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_CONSOLE_WIDTH)
}

impl<W: Write> Console for TerminalConsole<W> {
    fn write(&mut self, color: Color, text: &str) {
        if self.color && !text.is_empty() {
            let colored = format!("{}{}{}", color.ansi(), text, ANSI_RESET);
            self.emit(&colored);
        } else {
            self.emit(text);
        }
    }

    fn clear(&mut self) {
        if self.color {
            self.emit(CLEAR_SCREEN);
        } else {
            // Plain output (pipes, logs) only gets a visual break.
            self.emit("\n");
        }
    }

    fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_from_columns() {
        assert_eq!(terminal_width(Some("120")), 120);
        assert_eq!(terminal_width(Some(" 100 ")), 100);
        assert_eq!(terminal_width(Some("0")), DEFAULT_CONSOLE_WIDTH);
        assert_eq!(terminal_width(Some("wide")), DEFAULT_CONSOLE_WIDTH);
        assert_eq!(terminal_width(None), DEFAULT_CONSOLE_WIDTH);
    }

    #[test]
    fn test_plain_output() {
        let mut console = TerminalConsole::new(Vec::new(), false);
        console.error("boom");
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out, "[ERROR] boom\n");
    }

    #[test]
    fn test_colored_output() {
        let mut console = TerminalConsole::new(Vec::new(), true);
        console.write(Color::Red, "x");
        console.clear();
        let out = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(out, format!("{}x{}{}", Color::Red.ansi(), ANSI_RESET, CLEAR_SCREEN));
    }
}
