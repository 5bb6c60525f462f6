//! Console output sink.
//!
//! The interpreter writes everything the user sees through [`Console`]. The
//! host binary renders to an ANSI terminal; [`CaptureConsole`] keeps the text
//! in memory for tests and embedders.

use crate::constants::DEFAULT_CONSOLE_WIDTH;

/// Foreground colors the interpreter uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Gray,
    Cyan,
    Green,
    Red,
}

impl Color {
    pub fn ansi(&self) -> &'static str {
        match self {
            Color::White => "\x1b[97m",
            Color::Gray => "\x1b[37m",
            Color::Cyan => "\x1b[36m",
            Color::Green => "\x1b[32m",
            Color::Red => "\x1b[1;31m",
        }
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

pub trait Console {
    fn write(&mut self, color: Color, text: &str);

    fn clear(&mut self);

    /// Width in columns, used to size separators and center text.
    fn width(&self) -> usize {
        DEFAULT_CONSOLE_WIDTH
    }

    fn write_line(&mut self, color: Color, text: &str) {
        self.write(color, text);
        self.write(color, "\n");
    }

    fn info(&mut self, message: &str) {
        self.write(Color::Green, "[INFO] ");
        self.write_line(Color::White, message);
    }

    fn error(&mut self, message: &str) {
        self.write(Color::Red, "[ERROR] ");
        self.write_line(Color::White, message);
    }
}

/// Pad `text` on the left so it sits in the middle of `width` columns.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Console that records its output instead of displaying it.
#[derive(Clone, Debug)]
pub struct CaptureConsole {
    buffer: String,
    width: usize,
    clears: usize,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::with_width(DEFAULT_CONSOLE_WIDTH)
    }

    pub fn with_width(width: usize) -> Self {
        Self {
            buffer: String::new(),
            width,
            clears: 0,
        }
    }

    /// Everything written since creation or the last [`take`](Self::take).
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Return the captured text and start over.
    pub fn take(&mut self) -> String {
        core::mem::take(&mut self.buffer)
    }

    /// Number of `clear` requests seen.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Default for CaptureConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for CaptureConsole {
    fn write(&mut self, _color: Color, text: &str) {
        self.buffer.push_str(text);
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.buffer.clear();
    }

    fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        assert_eq!(center("abcd", 10), "   abcd");
        assert_eq!(center("abc", 10), "   abc");
        assert_eq!(center("too long", 4), "too long");
    }

    #[test]
    fn test_capture_records_tagged_lines() {
        let mut console = CaptureConsole::new();
        console.info("ready");
        console.error("boom");
        assert_eq!(console.output(), "[INFO] ready\n[ERROR] boom\n");

        let taken = console.take();
        assert!(taken.ends_with("boom\n"));
        assert!(console.output().is_empty());
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut console = CaptureConsole::with_width(40);
        console.write_line(Color::Gray, "x");
        console.clear();
        assert_eq!(console.output(), "");
        assert_eq!(console.clears(), 1);
        assert_eq!(console.width(), 40);
    }
}
