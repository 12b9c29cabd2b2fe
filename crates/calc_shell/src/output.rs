//! Structured messages instead of direct printing.
//!
//! Menu logic builds `ShellMsg` values and hands them to a [`Console`]
//! to render; nothing in the state machine writes to stdout itself.
//! This keeps the REPL testable against scripted consoles.
//!
//! [`Console`]: crate::console::Console

/// One user-facing message from the shell or a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellMsg {
    /// Main output (a menu line, a result).
    Output(String),
    /// General feedback.
    Info(String),
    /// Expected validation outcome ("invalid selection" and friends).
    Warn(String),
    /// An operation failed.
    Error(String),
}

impl ShellMsg {
    pub fn output(s: impl Into<String>) -> Self {
        ShellMsg::Output(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        ShellMsg::Info(s.into())
    }

    pub fn warn(s: impl Into<String>) -> Self {
        ShellMsg::Warn(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        ShellMsg::Error(s.into())
    }

    /// The message text without channel decoration.
    pub fn text(&self) -> &str {
        match self {
            ShellMsg::Output(s) | ShellMsg::Info(s) | ShellMsg::Warn(s) | ShellMsg::Error(s) => s,
        }
    }
}

