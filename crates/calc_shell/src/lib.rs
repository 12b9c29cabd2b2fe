//! Command registry, plugin loading and the menu REPL for the
//! calculator shell.
//!
//! The shell owns an ordered, name-keyed [`CommandRegistry`] populated
//! at startup from an explicit registration list (one entry per
//! plugin; a failing entry is logged and skipped, never fatal). The
//! REPL renders a numbered menu from the registry's insertion order,
//! reads one selection per line and dispatches; `0` is the universal
//! exit/back sentinel in every menu.
//!
//! All user interaction goes through the [`Console`] abstraction, so
//! the whole state machine runs unchanged against scripted input in
//! tests.

pub mod command;
pub mod commands;
pub mod config;
pub mod console;
pub mod output;
pub mod plugin;
pub mod registry;
pub mod shell;

pub use command::{Command, CommandError, CommandOutcome, ShellContext};
pub use config::ShellConfig;
pub use console::{Console, ScriptedConsole};
pub use output::ShellMsg;
pub use plugin::{builtin_registrations, load_plugins, LoadReport, PluginError, Registration};
pub use registry::CommandRegistry;
pub use shell::{LoopControl, Shell};
