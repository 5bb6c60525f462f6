//! Boot/GUI entry point used by `gui`.

use crate::config::ShellFlags;
use crate::console::Console;

pub trait Platform {
    /// Hand the screen over to the graphical shell. `flags` carries the
    /// options toggled with `set`.
    fn launch_gui(&mut self, console: &mut dyn Console, flags: ShellFlags);
}

impl<T: Platform + ?Sized> Platform for Box<T> {
    fn launch_gui(&mut self, console: &mut dyn Console, flags: ShellFlags) {
        (**self).launch_gui(console, flags)
    }
}
