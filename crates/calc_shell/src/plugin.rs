//! Explicit plugin registration.
//!
//! Commands are registered from a list of build thunks passed into the
//! loader, one per plugin, walked in order. A failing build is logged
//! with the plugin's name and skipped; one bad plugin never aborts
//! startup. The list order defines the menu order, so identical lists
//! always produce identical menus.

use thiserror::Error;
use tracing::{debug, error};

use crate::command::Command;
use crate::registry::CommandRegistry;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("plugin initialization failed: {0}")]
    Init(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One plugin: the name it registers under and a thunk that builds it.
pub struct Registration {
    pub name: &'static str,
    pub build: fn() -> Result<Box<dyn Command>, PluginError>,
}

/// What a load pass did, in list order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<String>,
}

/// Run every registration against the registry. Name collisions follow
/// the registry's overwrite rule. Returns a per-plugin report; failures
/// are also logged as they happen.
pub fn load_plugins(registry: &mut CommandRegistry, registrations: &[Registration]) -> LoadReport {
    let mut report = LoadReport::default();
    for reg in registrations {
        match (reg.build)() {
            Ok(command) => {
                registry.register(reg.name, command);
                debug!(plugin = reg.name, "plugin registered");
                report.loaded.push(reg.name.to_string());
            }
            Err(e) => {
                error!(plugin = reg.name, error = %e, "error loading plugin");
                report.failed.push(reg.name.to_string());
            }
        }
    }
    report
}

/// The built-in plugin set, in the order the original module scan
/// produced it (alphabetical by plugin name).
pub fn builtin_registrations() -> Vec<Registration> {
    use crate::commands::{
        basic::{ExitCommand, GoodbyeCommand, GreetCommand},
        calculator::CalculatorCommand,
        csv_transform::CsvCommand,
        history_menu::HistoryCommand,
    };

    vec![
        Registration {
            name: "calculator",
            build: || Ok(Box::new(CalculatorCommand::new())),
        },
        Registration {
            name: "csv",
            build: || Ok(Box::new(CsvCommand)),
        },
        Registration {
            name: "exit",
            build: || Ok(Box::new(ExitCommand)),
        },
        Registration {
            name: "goodbye",
            build: || Ok(Box::new(GoodbyeCommand)),
        },
        Registration {
            name: "greet",
            build: || Ok(Box::new(GreetCommand)),
        },
        Registration {
            name: "history",
            build: || Ok(Box::new(HistoryCommand)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandError, CommandOutcome, ShellContext};

    struct Noop;

    impl Command for Noop {
        fn execute(&mut self, _ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
            Ok(CommandOutcome::Continue)
        }
    }

    #[test]
    fn builtins_register_in_scan_order() {
        let mut registry = CommandRegistry::new();
        let report = load_plugins(&mut registry, &builtin_registrations());
        assert!(report.failed.is_empty());
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["calculator", "csv", "exit", "goodbye", "greet", "history"]
        );
    }

    #[test]
    fn failing_plugin_is_skipped_not_fatal() {
        let registrations = [
            Registration {
                name: "good",
                build: || Ok(Box::new(Noop) as Box<dyn Command>),
            },
            Registration {
                name: "broken",
                build: || Err(PluginError::Init("missing dependency".into())),
            },
            Registration {
                name: "also_good",
                build: || Ok(Box::new(Noop) as Box<dyn Command>),
            },
        ];

        let mut registry = CommandRegistry::new();
        let report = load_plugins(&mut registry, &registrations);

        // Exactly one failure, naming the plugin; every other plugin is
        // still registered.
        assert_eq!(report.failed, vec!["broken".to_string()]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["good", "also_good"]);
    }
}
