//! Thin menu over the command-history store.

use calc_history::DeleteOutcome;

use crate::command::{Command, CommandError, CommandOutcome, ShellContext};

const MENU: [&str; 5] = ["Show", "Load", "Save", "Clear", "Delete"];

pub struct HistoryCommand;

impl HistoryCommand {
    fn print_menu(&self, ctx: &mut ShellContext<'_>) {
        ctx.output("\nHistory Menu:");
        for (index, entry) in MENU.iter().enumerate() {
            ctx.output(format!("{}. {}", index + 1, entry));
        }
        ctx.output("0. Back");
    }

    /// One menu round; `false` means Back (or end of input).
    fn handle_round(&self, ctx: &mut ShellContext<'_>) -> bool {
        self.print_menu(ctx);
        let Some(line) = ctx.read_line("Selection: ") else {
            return false;
        };

        match line.trim().parse::<i64>() {
            Ok(0) => false,
            Ok(1) => {
                self.show(ctx);
                true
            }
            Ok(2) => {
                match ctx.history.load() {
                    Ok(count) => ctx.output(format!("Loaded {count} records.")),
                    Err(e) => ctx.error(format!("Could not load history: {e}")),
                }
                true
            }
            Ok(3) => {
                match ctx.history.save() {
                    Ok(count) => ctx.output(format!("Saved {count} records.")),
                    Err(e) => ctx.error(format!("Could not save history: {e}")),
                }
                true
            }
            Ok(4) => {
                ctx.history.clear();
                ctx.output("History cleared.");
                true
            }
            Ok(5) => {
                self.delete(ctx);
                true
            }
            _ => {
                ctx.warn("Invalid selection, try again.");
                true
            }
        }
    }

    fn show(&self, ctx: &mut ShellContext<'_>) {
        if ctx.history.get_history().is_empty() {
            ctx.output("History is empty.");
            return;
        }
        let records: Vec<String> = ctx
            .history
            .get_history()
            .iter()
            .enumerate()
            .map(|(position, name)| format!("{}. {}", position + 1, name))
            .collect();
        for line in records {
            ctx.output(line);
        }
    }

    fn delete(&self, ctx: &mut ShellContext<'_>) {
        let Some(line) = ctx.read_line("Record number to delete: ") else {
            return;
        };
        let Ok(displayed) = line.trim().parse::<usize>() else {
            ctx.warn("Please enter a valid number.");
            return;
        };
        match ctx.history.delete(displayed) {
            Ok(DeleteOutcome::Deleted(name)) => {
                ctx.output(format!("Deleted record {displayed}: {name}"));
            }
            Ok(DeleteOutcome::Empty) => ctx.output("No history to delete."),
            Ok(DeleteOutcome::OutOfRange) => ctx.warn("Invalid selection."),
            Err(e) => ctx.error(format!("Could not delete record: {e}")),
        }
    }
}

impl Command for HistoryCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        while self.handle_round(ctx) {}
        Ok(CommandOutcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use calc_history::CommandHistory;

    fn run_history(history: &mut CommandHistory, inputs: &[&str]) -> ScriptedConsole {
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        let mut ctx = ShellContext {
            console: &mut console,
            history,
        };
        HistoryCommand.execute(&mut ctx).unwrap();
        console
    }

    fn temp_history() -> (tempfile::TempDir, CommandHistory) {
        let dir = tempfile::tempdir().unwrap();
        let history = CommandHistory::new(dir.path().join("command_history.csv"));
        (dir, history)
    }

    #[test]
    fn show_numbers_records_from_one() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        history.append("calculator");
        let console = run_history(&mut history, &["1", "0"]);
        let transcript = console.transcript();
        assert!(transcript.contains("1. greet"));
        assert!(transcript.contains("2. calculator"));
    }

    #[test]
    fn save_then_load_round_trips_through_the_menu() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        run_history(&mut history, &["3", "0"]);

        let mut fresh = CommandHistory::new(history.path());
        let console = run_history(&mut fresh, &["2", "1", "0"]);
        assert!(console.transcript().contains("Loaded 1 records."));
        assert!(console.transcript().contains("1. greet"));
    }

    #[test]
    fn delete_prompts_for_a_displayed_number() {
        let (_dir, mut history) = temp_history();
        history.append("greet");
        history.append("csv");
        let console = run_history(&mut history, &["5", "1", "0"]);
        assert!(console.transcript().contains("Deleted record 1: greet"));
        assert_eq!(history.get_history(), ["csv"]);
    }

    #[test]
    fn delete_distinguishes_its_three_refusals() {
        let (_dir, mut history) = temp_history();
        // Empty history.
        let console = run_history(&mut history, &["5", "1", "0"]);
        assert!(console.transcript().contains("No history to delete."));

        history.append("greet");
        // Non-numeric record number.
        let console = run_history(&mut history, &["5", "first", "0"]);
        assert!(console.transcript().contains("Please enter a valid number."));
        // Out of range.
        let console = run_history(&mut history, &["5", "7", "0"]);
        assert!(console.transcript().contains("Invalid selection."));
        assert_eq!(history.get_history(), ["greet"]);
    }

    #[test]
    fn invalid_menu_selection_redisplays() {
        let (_dir, mut history) = temp_history();
        let console = run_history(&mut history, &["9", "abc", "0"]);
        let transcript = console.transcript();
        assert_eq!(transcript.matches("Invalid selection, try again.").count(), 2);
        assert_eq!(transcript.matches("History Menu:").count(), 3);
    }
}
