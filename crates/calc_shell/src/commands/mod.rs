//! Built-in command plugins.

pub mod basic;
pub mod calculator;
pub mod csv_transform;
pub mod history_menu;
