//! Line-oriented console abstraction.
//!
//! The shell and every interactive command read whole lines and emit
//! [`ShellMsg`] values through this trait. The binary provides a
//! rustyline-backed implementation; tests use [`ScriptedConsole`].

use std::collections::VecDeque;

use crate::output::ShellMsg;

pub trait Console {
    /// Read one line of input, or `None` on end of input (Ctrl-D or an
    /// exhausted script). EOF is always treated as "back/exit", never
    /// as an error.
    fn read_line(&mut self, prompt: &str) -> Option<String>;

    /// Render one message to the user.
    fn print(&mut self, msg: &ShellMsg);
}

/// Console fed from a fixed list of input lines, recording everything
/// printed. The test double for the whole interactive surface.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub printed: Vec<ShellMsg>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            printed: Vec::new(),
        }
    }

    /// All printed text joined with newlines, for contains-style
    /// assertions.
    pub fn transcript(&self) -> String {
        self.printed
            .iter()
            .map(|m| m.text().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> Option<String> {
        self.inputs.pop_front()
    }

    fn print(&mut self, msg: &ShellMsg) {
        self.printed.push(msg.clone());
    }
}
