//! The menu REPL state machine.
//!
//! One control flow: render the numbered menu, block on a selection,
//! process it to completion, loop. The only terminal transition is the
//! `0` sentinel (or a command returning `Exit`); everything else keeps
//! the loop running.

use std::panic::{catch_unwind, AssertUnwindSafe};

use calc_history::CommandHistory;
use tracing::{info, warn};

use crate::command::{CommandOutcome, ShellContext};
use crate::config::ShellConfig;
use crate::console::Console;
use crate::output::ShellMsg;
use crate::plugin::{load_plugins, LoadReport, Registration};
use crate::registry::CommandRegistry;

/// What the loop does after handling one selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct Shell {
    registry: CommandRegistry,
    history: CommandHistory,
    show_banner: bool,
}

impl Shell {
    /// Build a shell from a registration list. Plugin failures are
    /// logged inside `load_plugins` and do not abort startup.
    pub fn new(config: &ShellConfig, registrations: &[Registration]) -> (Self, LoadReport) {
        let mut registry = CommandRegistry::new();
        let report = load_plugins(&mut registry, registrations);
        let shell = Self {
            registry,
            history: CommandHistory::new(config.history_file.clone()),
            show_banner: config.show_banner,
        };
        (shell, report)
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Run the REPL until an exit signal. EOF on the selection prompt
    /// is a graceful exit, same as the sentinel.
    pub fn run(&mut self, console: &mut dyn Console) {
        if self.show_banner {
            console.print(&ShellMsg::output("Interactive Calculator Shell"));
        }
        loop {
            self.print_main_menu(console);
            let Some(line) = console.read_line("Selection: ") else {
                console.print(&ShellMsg::output("Exiting application."));
                break;
            };
            if self.handle_selection(line.trim(), console) == LoopControl::Exit {
                break;
            }
        }
    }

    /// Render the numbered menu from the registry's current ordering.
    fn print_main_menu(&self, console: &mut dyn Console) {
        console.print(&ShellMsg::output("\nMain Menu:"));
        for (index, name) in self.registry.names().enumerate() {
            console.print(&ShellMsg::output(format!(
                "{}. {}",
                index + 1,
                capitalize(name)
            )));
        }
        console.print(&ShellMsg::output(
            "Enter the number of the command to execute, or '0' to exit.",
        ));
    }

    /// Process one selection line. Every outcome except the exit
    /// sentinel leaves the loop running.
    pub fn handle_selection(&mut self, line: &str, console: &mut dyn Console) -> LoopControl {
        let Ok(selection) = line.parse::<i64>() else {
            warn!(input = line, "non-numeric selection");
            console.print(&ShellMsg::warn("Only numbers are allowed, wrong input."));
            return LoopControl::Continue;
        };

        if selection == 0 {
            info!("user selected exit");
            console.print(&ShellMsg::output("Exiting application."));
            return LoopControl::Exit;
        }

        let entry = match usize::try_from(selection) {
            Ok(index) => self.registry.entry_by_index(index),
            Err(_) => None,
        };
        let Some((name, command)) = entry else {
            warn!(selection, "invalid selection");
            console.print(&ShellMsg::warn(
                "Invalid selection. Please enter a valid number.",
            ));
            return LoopControl::Continue;
        };
        let name = name.to_string();
        info!(command = %name, "dispatching command");

        let mut ctx = ShellContext {
            console: &mut *console,
            history: &mut self.history,
        };
        // Fence: a panicking command must not take the session down.
        let result = catch_unwind(AssertUnwindSafe(|| command.execute(&mut ctx)));

        match result {
            Ok(Ok(CommandOutcome::Continue)) => {
                self.history.append(name.as_str());
                LoopControl::Continue
            }
            Ok(Ok(CommandOutcome::Exit)) => {
                self.history.append(name.as_str());
                LoopControl::Exit
            }
            Ok(Err(e)) => {
                warn!(command = %name, error = %e, "command execution failed");
                console.print(&ShellMsg::error("Selected command could not be executed."));
                LoopControl::Continue
            }
            Err(panic_info) => {
                let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic_info.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "unknown panic".to_string()
                };
                warn!(command = %name, panic = %panic_msg, "command panicked");
                console.print(&ShellMsg::error("Selected command could not be executed."));
                LoopControl::Continue
            }
        }
    }
}

/// Menu entries display with an upper-cased first letter, the way the
/// registered names themselves stay lower-case.
pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("greet"), "Greet");
        assert_eq!(capitalize("csv"), "Csv");
        assert_eq!(capitalize(""), "");
    }
}
