//! Leaf commands with no state: greet, goodbye, exit.

use crate::command::{Command, CommandError, CommandOutcome, ShellContext};

pub struct GreetCommand;

impl Command for GreetCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        ctx.output("Hello, World!");
        Ok(CommandOutcome::Continue)
    }
}

pub struct GoodbyeCommand;

impl Command for GoodbyeCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        ctx.output("Goodbye");
        Ok(CommandOutcome::Continue)
    }
}

/// Graceful shutdown with its own message, distinct from the `0`
/// sentinel's farewell.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        ctx.output("Exiting program.");
        Ok(CommandOutcome::Exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use calc_history::CommandHistory;

    fn run(command: &mut dyn Command) -> (ScriptedConsole, CommandOutcome) {
        let mut console = ScriptedConsole::new::<_, String>([]);
        let mut history = CommandHistory::new("unused.csv");
        let mut ctx = ShellContext {
            console: &mut console,
            history: &mut history,
        };
        let outcome = command.execute(&mut ctx).unwrap();
        (console, outcome)
    }

    #[test]
    fn greet_prints_hello() {
        let (console, outcome) = run(&mut GreetCommand);
        assert_eq!(console.transcript(), "Hello, World!");
        assert_eq!(outcome, CommandOutcome::Continue);
    }

    #[test]
    fn exit_signals_shutdown_with_its_own_message() {
        let (console, outcome) = run(&mut ExitCommand);
        assert_eq!(console.transcript(), "Exiting program.");
        assert_eq!(outcome, CommandOutcome::Exit);
    }
}
