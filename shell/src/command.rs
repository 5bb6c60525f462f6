//! Command tree and parser.
//!
//! A token sequence is turned into a [`Command`] before anything runs, so
//! every arity check happens up front and execution matches exhaustively on
//! the tree.

use crate::arguments::command_arguments;
use crate::error::ShellError;

/// Top-level commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `clr`
    Clear,
    /// `si`
    SysInfo,
    /// `p <text>`; `text` is the line with the command word stripped.
    Print { text: String },
    /// `fs <sub-command> ...`
    Fs(FsCommand<'a>),
    /// `gui`
    Gui,
    /// `set key=value`; `None` when the line did not have exactly two tokens.
    Set { setting: Option<&'a str> },
}

/// Sub-commands of `fs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FsCommand<'a> {
    FreeSpace,
    Format,
    List,
    Dir(DirCommand<'a>),
    Write { path: &'a str, content: String },
    Read { path: &'a str },
    Remove { path: &'a str },
    ChangeDir { target: &'a str },
}

/// Sub-commands of `fs d`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirCommand<'a> {
    Make { path: &'a str },
    Remove { path: &'a str },
}

/// Build the command for `tokens`, which must come from tokenizing `line`.
pub fn parse<'a>(line: &'a str, tokens: &[&'a str]) -> Result<Command<'a>, ShellError> {
    let Some(&name) = tokens.first() else {
        return Err(ShellError::EmptyInput);
    };

    match name {
        "clr" => Ok(Command::Clear),
        "si" => Ok(Command::SysInfo),
        "p" => {
            if tokens.len() < 2 {
                return Err(ShellError::MissingArguments("p <text>"));
            }
            let prefix = format!("{} ", name);
            Ok(Command::Print {
                text: line.replacen(&prefix, "", 1),
            })
        }
        "fs" => parse_fs(line, tokens).map(Command::Fs),
        "gui" => Ok(Command::Gui),
        "set" => Ok(Command::Set {
            setting: if tokens.len() == 2 { Some(tokens[1]) } else { None },
        }),
        other => Err(ShellError::UnknownCommand(String::from(other))),
    }
}

fn parse_fs<'a>(line: &'a str, tokens: &[&'a str]) -> Result<FsCommand<'a>, ShellError> {
    let Some(&sub) = tokens.get(1) else {
        return Err(ShellError::MissingArguments("fs <command> <arguments>"));
    };

    match sub {
        "fsp" => Ok(FsCommand::FreeSpace),
        "fmt" => Ok(FsCommand::Format),
        "ls" => Ok(FsCommand::List),
        "d" => parse_dir(tokens).map(FsCommand::Dir),
        "wr" => {
            if tokens.len() < 4 {
                return Err(ShellError::MissingArguments("fs wr <file> <content>"));
            }
            let content = command_arguments(line, tokens, 3).replace("\\n", "\n");
            Ok(FsCommand::Write {
                path: tokens[2],
                content,
            })
        }
        "rd" => tokens
            .get(2)
            .map(|&path| FsCommand::Read { path })
            .ok_or(ShellError::MissingArguments("fs rd <file>")),
        "rm" => tokens
            .get(2)
            .map(|&path| FsCommand::Remove { path })
            .ok_or(ShellError::MissingArguments("fs rm <file>")),
        "cd" => tokens
            .get(2)
            .map(|&target| FsCommand::ChangeDir { target })
            .ok_or(ShellError::MissingArguments("fs cd <dir>")),
        other => Err(ShellError::UnknownCommand(String::from(other))),
    }
}

fn parse_dir<'a>(tokens: &[&'a str]) -> Result<DirCommand<'a>, ShellError> {
    let Some(&op) = tokens.get(2) else {
        return Err(ShellError::MissingArguments("fs d <mk|rm> <dir>"));
    };

    match op {
        "mk" => tokens
            .get(3)
            .map(|&path| DirCommand::Make { path })
            .ok_or(ShellError::MissingArguments("fs d mk <dir>")),
        "rm" => tokens
            .get(3)
            .map(|&path| DirCommand::Remove { path })
            .ok_or(ShellError::MissingArguments("fs d rm <dir>")),
        other => Err(ShellError::UnknownCommand(String::from(other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    fn parse_line(line: &str) -> Result<Command<'_>, ShellError> {
        let tokens = tokenize(line)?;
        parse(line, &tokens)
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_line("clr"), Ok(Command::Clear));
        assert_eq!(parse_line("si extra"), Ok(Command::SysInfo));
        assert_eq!(parse_line("  gui "), Ok(Command::Gui));
    }

    #[test]
    fn test_dispatch_is_case_sensitive() {
        assert_eq!(
            parse_line("CLR"),
            Err(ShellError::UnknownCommand(String::from("CLR")))
        );
        assert_eq!(
            parse_line("fs LS"),
            Err(ShellError::UnknownCommand(String::from("LS")))
        );
    }

    #[test]
    fn test_print_strips_first_command_word_only() {
        assert_eq!(
            parse_line("p hello   world"),
            Ok(Command::Print {
                text: String::from("hello   world")
            })
        );
        assert_eq!(
            parse_line("p p p"),
            Ok(Command::Print {
                text: String::from("p p")
            })
        );
        assert_eq!(
            parse_line("p"),
            Err(ShellError::MissingArguments("p <text>"))
        );
    }

    #[test]
    fn test_fs_requires_sub_command() {
        assert_eq!(
            parse_line("fs"),
            Err(ShellError::MissingArguments("fs <command> <arguments>"))
        );
        assert_eq!(
            parse_line("fs nope"),
            Err(ShellError::UnknownCommand(String::from("nope")))
        );
    }

    #[test]
    fn test_fs_zero_argument_commands() {
        assert_eq!(parse_line("fs fsp"), Ok(Command::Fs(FsCommand::FreeSpace)));
        assert_eq!(parse_line("fs fmt"), Ok(Command::Fs(FsCommand::Format)));
        assert_eq!(parse_line("fs ls"), Ok(Command::Fs(FsCommand::List)));
    }

    #[test]
    fn test_fs_write_recovers_content() {
        assert_eq!(
            parse_line("fs wr a.txt   hello  there\\nworld"),
            Ok(Command::Fs(FsCommand::Write {
                path: "a.txt",
                content: String::from("hello  there\nworld"),
            }))
        );
        assert_eq!(
            parse_line("fs wr a.txt"),
            Err(ShellError::MissingArguments("fs wr <file> <content>"))
        );
    }

    #[test]
    fn test_fs_path_commands() {
        assert_eq!(
            parse_line("fs rd a.txt"),
            Ok(Command::Fs(FsCommand::Read { path: "a.txt" }))
        );
        assert_eq!(
            parse_line("fs rm a.txt"),
            Ok(Command::Fs(FsCommand::Remove { path: "a.txt" }))
        );
        assert_eq!(
            parse_line("fs cd .."),
            Ok(Command::Fs(FsCommand::ChangeDir { target: ".." }))
        );
        assert_eq!(
            parse_line("fs rd"),
            Err(ShellError::MissingArguments("fs rd <file>"))
        );
        assert_eq!(
            parse_line("fs rm"),
            Err(ShellError::MissingArguments("fs rm <file>"))
        );
        assert_eq!(
            parse_line("fs cd"),
            Err(ShellError::MissingArguments("fs cd <dir>"))
        );
    }

    #[test]
    fn test_fs_dir_nested_dispatch() {
        assert_eq!(
            parse_line("fs d mk sub"),
            Ok(Command::Fs(FsCommand::Dir(DirCommand::Make { path: "sub" })))
        );
        assert_eq!(
            parse_line("fs d rm sub"),
            Ok(Command::Fs(FsCommand::Dir(DirCommand::Remove { path: "sub" })))
        );
        assert_eq!(
            parse_line("fs d"),
            Err(ShellError::MissingArguments("fs d <mk|rm> <dir>"))
        );
        assert_eq!(
            parse_line("fs d mk"),
            Err(ShellError::MissingArguments("fs d mk <dir>"))
        );
        assert_eq!(
            parse_line("fs d mv a"),
            Err(ShellError::UnknownCommand(String::from("mv")))
        );
    }

    #[test]
    fn test_set_arity() {
        assert_eq!(
            parse_line("set topb=true"),
            Ok(Command::Set {
                setting: Some("topb=true")
            })
        );
        assert_eq!(parse_line("set"), Ok(Command::Set { setting: None }));
        assert_eq!(
            parse_line("set topb=true ctrlb=false"),
            Ok(Command::Set { setting: None })
        );
    }
}
