//! The `Command` capability every dispatchable behavior implements.

use calc_history::CommandHistory;
use thiserror::Error;

use crate::console::Console;
use crate::output::ShellMsg;

/// What a command asks the shell to do after it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Return to the main menu.
    Continue,
    /// Graceful shutdown; the command has already printed its own
    /// farewell.
    Exit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("command failed: {0}")]
    Failed(String),
    #[error(transparent)]
    History(#[from] calc_history::HistoryError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Everything a command may touch while executing: the console for
/// prompts and output, and the shared history store.
pub struct ShellContext<'a> {
    pub console: &'a mut dyn Console,
    pub history: &'a mut CommandHistory,
}

impl ShellContext<'_> {
    pub fn output(&mut self, s: impl Into<String>) {
        self.console.print(&ShellMsg::output(s));
    }

    pub fn info(&mut self, s: impl Into<String>) {
        self.console.print(&ShellMsg::info(s));
    }

    pub fn warn(&mut self, s: impl Into<String>) {
        self.console.print(&ShellMsg::warn(s));
    }

    pub fn error(&mut self, s: impl Into<String>) {
        self.console.print(&ShellMsg::error(s));
    }

    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.console.read_line(prompt)
    }
}

/// A unit of behavior the shell can dispatch to.
///
/// Commands handle their own expected conditions (invalid sub-menu
/// selections, bad operands) and report them as messages; `Err` is for
/// genuine failures and is caught one level up by the dispatcher.
pub trait Command {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError>;
}
