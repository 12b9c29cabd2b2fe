//! Rustyline-backed console.
//!
//! User-facing output goes to stdout (diagnostics travel separately
//! through tracing, on stderr). Line-editor history is kept in a dot
//! file under the home directory, independent of the shell's own
//! command history; load/save failures on it are silently ignored.

use std::path::PathBuf;

use calc_shell::{Console, ShellMsg};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

pub struct RustylineConsole {
    editor: DefaultEditor,
    history_path: PathBuf,
}

impl RustylineConsole {
    pub fn new() -> rustyline::Result<Self> {
        let config = rustyline::Config::builder().max_history_size(100)?.build();
        let mut editor = DefaultEditor::with_config(config)?;

        let history_path = dirs::home_dir()
            .map(|p| p.join(".calc_shell_line_history"))
            .unwrap_or_else(|| PathBuf::from(".calc_shell_line_history"));
        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }
}

impl Console for RustylineConsole {
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Some(line)
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => None,
            Err(e) => {
                debug!(error = %e, "readline failed, treating as end of input");
                None
            }
        }
    }

    fn print(&mut self, msg: &ShellMsg) {
        match msg {
            ShellMsg::Output(s) | ShellMsg::Info(s) => println!("{s}"),
            ShellMsg::Warn(s) => println!("⚠ {s}"),
            ShellMsg::Error(s) => println!("✖ {s}"),
        }
    }
}

impl Drop for RustylineConsole {
    fn drop(&mut self) {
        let _ = self.editor.save_history(&self.history_path);
    }
}
