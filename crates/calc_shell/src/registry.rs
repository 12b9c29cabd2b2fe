//! Ordered, name-keyed command registry.
//!
//! Insertion order is significant: it defines the numbered menu shown
//! to the user, and it is reproducible for the same registration list.
//! Registering a name twice silently replaces the instance while
//! keeping its original position (last registration wins). There is no
//! removal; the registry is populated once at startup and read
//! thereafter.

use crate::command::Command;

pub struct CommandRegistry {
    entries: Vec<(String, Box<dyn Command>)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store `command` under `name`. Overwrites silently if the name is
    /// already present.
    pub fn register(&mut self, name: impl Into<String>, command: Box<dyn Command>) {
        let name = name.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            *slot = command;
        } else {
            self.entries.push((name, command));
        }
    }

    pub fn resolve_by_name(&mut self, name: &str) -> Option<&mut (dyn Command + 'static)> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_mut())
    }

    /// Map a 1-based menu index to its command. `0` and out-of-range
    /// indices resolve to `None`, never a panic.
    pub fn resolve_by_index(&mut self, index: usize) -> Option<&mut (dyn Command + 'static)> {
        self.entry_by_index(index).map(|(_, c)| c)
    }

    /// Like `resolve_by_index`, but also yields the registered name.
    pub fn entry_by_index(&mut self, index: usize) -> Option<(&str, &mut (dyn Command + 'static))> {
        let position = index.checked_sub(1)?;
        self.entries
            .get_mut(position)
            .map(|(n, c)| (n.as_str(), c.as_mut()))
    }

    /// Names in insertion order; the menu renders from this.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandError, CommandOutcome, ShellContext};

    struct Tagged(&'static str);

    impl Command for Tagged {
        fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
            ctx.output(self.0);
            Ok(CommandOutcome::Continue)
        }
    }

    fn registry_of(names: &[&'static str]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(*name, Box::new(Tagged(name)));
        }
        registry
    }

    #[test]
    fn names_preserve_insertion_order() {
        let registry = registry_of(&["greet", "calculator", "history"]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["greet", "calculator", "history"]);
    }

    #[test]
    fn resolve_by_index_is_one_based() {
        let mut registry = registry_of(&["greet", "calculator"]);
        assert!(registry.resolve_by_index(1).is_some());
        assert_eq!(registry.entry_by_index(2).unwrap().0, "calculator");
        assert!(registry.resolve_by_index(0).is_none());
        assert!(registry.resolve_by_index(3).is_none());
    }

    #[test]
    fn duplicate_name_keeps_one_entry_at_original_position() {
        let mut registry = registry_of(&["greet", "calculator"]);
        registry.register("greet", Box::new(Tagged("greet-v2")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().next(), Some("greet"));

        // The replacement instance is the one that executes.
        let mut console = crate::console::ScriptedConsole::new::<_, String>([]);
        let mut history = calc_history::CommandHistory::new("unused.csv");
        let mut ctx = ShellContext {
            console: &mut console,
            history: &mut history,
        };
        registry
            .resolve_by_index(1)
            .unwrap()
            .execute(&mut ctx)
            .unwrap();
        assert_eq!(console.transcript(), "greet-v2");
    }

    #[test]
    fn resolve_by_name_finds_registered_commands() {
        let mut registry = registry_of(&["greet"]);
        assert!(registry.resolve_by_name("greet").is_some());
        assert!(registry.resolve_by_name("absent").is_none());
    }
}
