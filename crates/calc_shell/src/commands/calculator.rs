//! The calculator command: a second, smaller menu over the arithmetic
//! operation plugins.
//!
//! Construction registers the operations exactly the way the shell
//! registers commands; the sub-menu uses the same 1-based convention
//! with `0` as "back". Operands are exact rationals, so results carry
//! no binary floating-point artifacts.

use calc_ops::{format_rational, parse_operand, BigRational, OperationSet};
use tracing::info;

use crate::command::{Command, CommandError, CommandOutcome, ShellContext};
use crate::shell::capitalize;

pub struct CalculatorCommand {
    operations: OperationSet,
}

impl CalculatorCommand {
    pub fn new() -> Self {
        Self {
            operations: OperationSet::with_default_ops(),
        }
    }

    fn print_menu(&self, ctx: &mut ShellContext<'_>) {
        ctx.output("\nCalculator Operations:");
        for (index, name) in self.operations.names().enumerate() {
            ctx.output(format!("{}. {}", index + 1, capitalize(name)));
        }
        ctx.output("0. Back");
    }

    /// One sub-menu round. Returns `false` when the user selects Back
    /// (or input ends).
    fn handle_round(&self, ctx: &mut ShellContext<'_>) -> bool {
        self.print_menu(ctx);
        let Some(line) = ctx.read_line("Operation: ") else {
            return false;
        };

        let Ok(selection) = line.trim().parse::<i64>() else {
            ctx.warn("Only numbers are allowed, wrong input.");
            return true;
        };
        if selection == 0 {
            return false;
        }
        let operation = usize::try_from(selection)
            .ok()
            .and_then(|i| self.operations.by_index(i));
        let Some(operation) = operation else {
            ctx.warn("Invalid selection. Please enter a valid number.");
            return true;
        };

        let Some(a) = self.read_operand(ctx, "First number: ") else {
            return true;
        };
        let Some(b) = self.read_operand(ctx, "Second number: ") else {
            return true;
        };

        match operation.apply(&a, &b) {
            Ok(result) => {
                let rendered = format_rational(&result);
                info!(operation = operation.name(), result = %rendered, "operation executed");
                ctx.output(format!("Result: {rendered}"));
            }
            // Divisor validation, not a failure: report and re-menu.
            Err(e) => {
                info!(operation = operation.name(), outcome = %e, "operation rejected");
                ctx.warn(e.to_string());
            }
        }
        true
    }

    fn read_operand(&self, ctx: &mut ShellContext<'_>, prompt: &str) -> Option<BigRational> {
        let line = ctx.read_line(prompt)?;
        match parse_operand(&line) {
            Some(value) => Some(value),
            None => {
                ctx.warn("Please enter a valid number.");
                None
            }
        }
    }
}

impl Default for CalculatorCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for CalculatorCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        while self.handle_round(ctx) {}
        // Back returns control to the shell without terminating it.
        Ok(CommandOutcome::Continue)
    }
}
