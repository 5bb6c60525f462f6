use std::io::{self, BufRead};

use vshell::{Color, Console, FileSystem, Platform, Shell};

/// Host-level word that ends the interactive loop.
const EXIT_WORD: &str = "exit";

fn print_prompt<F, C, P>(shell: &mut Shell<F, C, P>)
where
    F: FileSystem,
    C: Console,
    P: Platform,
{
    let prompt = shell.prompt();
    shell.console_mut().write(Color::Green, &prompt);
}

/// Read lines from `input` and run them until EOF or `exit`.
///
/// Returns the number of lines handed to the shell.
pub fn run_interactive<F, C, P, R>(shell: &mut Shell<F, C, P>, input: R) -> io::Result<usize>
where
    F: FileSystem,
    C: Console,
    P: Platform,
    R: BufRead,
{
    let mut executed = 0;
    print_prompt(shell);

    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim() == EXIT_WORD {
            log::debug!("exit requested");
            return Ok(executed);
        }
        // Errors were already shown to the user.
        let _ = shell.run(line);
        executed += 1;
        print_prompt(shell);
    }

    // EOF: leave the cursor on a fresh line.
    shell.console_mut().write(Color::White, "\n");
    Ok(executed)
}

/// Run each line in order; failures are printed and never stop the batch.
pub fn run_batch<F, C, P>(shell: &mut Shell<F, C, P>, lines: &[String]) -> usize
where
    F: FileSystem,
    C: Console,
    P: Platform,
{
    let mut failures = 0;
    for line in lines {
        if let Err(err) = shell.run(line) {
            log::debug!("{:?} failed: {}", line, err);
            failures += 1;
        }
    }
    failures
}
