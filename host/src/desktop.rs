//! Text-mode desktop
//!
//! The hosted stand-in for the graphical shell. Draws a single frame on the
//! console: an optional top bar, the main screen body and an optional control
//! bar, depending on the session flags.

use vshell::console::center;
use vshell::constants::{SYSTEM_NAME, VERSION};
use vshell::{Color, Console, Platform, ShellFlags};

const BODY_LINES: usize = 6;
const BUTTONS: [&str; 2] = ["Network", "Terminal"];
const CONTROLS: [&str; 3] = ["Start", "Files", "Settings"];

#[derive(Default)]
pub struct TextDesktop {
    frames: usize,
}

impl TextDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

/// `text` left-aligned and padded (or cut) to exactly `width` columns.
fn bar(text: &str, width: usize) -> String {
    let mut line: String = text.chars().take(width).collect();
    let len = line.chars().count();
    line.extend(std::iter::repeat(' ').take(width - len));
    line
}

fn buttons(labels: &[&str]) -> String {
    labels
        .iter()
        .map(|l| format!("[ {} ]", l))
        .collect::<Vec<_>>()
        .join("  ")
}

impl Platform for TextDesktop {
    fn launch_gui(&mut self, console: &mut dyn Console, flags: ShellFlags) {
        log::info!("launching desktop with {:?}", flags);
        let width = console.width();

        console.clear();
        if flags.contains(ShellFlags::TOP_BAR) {
            let title = format!(" {} {}", SYSTEM_NAME, VERSION);
            console.write_line(Color::Cyan, &bar(&title, width));
            console.write_line(Color::Cyan, &"=".repeat(width));
        }

        for row in 0..BODY_LINES {
            let text = match row {
                2 => center("Main Screen", width),
                3 => center(&buttons(&BUTTONS), width),
                _ => String::new(),
            };
            console.write_line(Color::White, &text);
        }

        if flags.contains(ShellFlags::CONTROL_BAR) {
            console.write_line(Color::Gray, &"-".repeat(width));
            console.write_line(Color::Gray, &bar(&buttons(&CONTROLS), width));
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vshell::CaptureConsole;

    fn draw(flags: ShellFlags) -> Vec<String> {
        let mut desktop = TextDesktop::new();
        let mut console = CaptureConsole::with_width(40);
        desktop.launch_gui(&mut console, flags);
        assert_eq!(desktop.frames(), 1);
        assert_eq!(console.clears(), 1);
        console.output().lines().map(String::from).collect()
    }

    #[test]
    fn test_full_frame() {
        let lines = draw(ShellFlags::default());
        assert_eq!(lines.len(), 2 + BODY_LINES + 2);
        assert!(lines[0].starts_with(" vshell "));
        assert_eq!(lines[0].len(), 40);
        assert!(lines.last().unwrap().starts_with("[ Start ]"));
    }

    #[test]
    fn test_bars_follow_flags() {
        let lines = draw(ShellFlags::empty());
        assert_eq!(lines.len(), BODY_LINES);
        assert!(lines.iter().any(|l| l.contains("[ Terminal ]")));

        let lines = draw(ShellFlags::CONTROL_BAR);
        assert_eq!(lines.len(), BODY_LINES + 2);
        assert!(!lines[0].contains("vshell"));
    }

    #[test]
    fn test_bar_pads_and_cuts() {
        assert_eq!(bar("ab", 4), "ab  ");
        assert_eq!(bar("abcdef", 4), "abcd");
    }
}
