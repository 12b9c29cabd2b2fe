//! CSV sort/filter command.
//!
//! Reads a flat CSV, stable-sorts its rows by one column, reduces to a
//! requested column subset and writes the result to a new file (whole
//! file replace). Field values that both parse as numbers compare
//! numerically, otherwise lexically. Simple comma-separated fields
//! only; no quoting dialect.

use std::cmp::Ordering;
use std::fs;

use thiserror::Error;

use crate::command::{Command, CommandError, CommandOutcome, ShellContext};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CsvError {
    #[error("file has no header row")]
    Empty,
    #[error("no column named {0:?}")]
    MissingColumn(String),
}

pub struct CsvCommand;

impl Command for CsvCommand {
    fn execute(&mut self, ctx: &mut ShellContext<'_>) -> Result<CommandOutcome, CommandError> {
        let Some(input_path) = ctx.read_line("Input CSV path: ") else {
            return Ok(CommandOutcome::Continue);
        };
        let contents = match fs::read_to_string(input_path.trim()) {
            Ok(contents) => contents,
            Err(e) => {
                ctx.warn(format!("Could not read {}: {e}", input_path.trim()));
                return Ok(CommandOutcome::Continue);
            }
        };

        let Some(sort_column) = ctx.read_line("Sort by column: ") else {
            return Ok(CommandOutcome::Continue);
        };
        let Some(subset) = ctx.read_line("Columns to keep (comma-separated, blank for all): ")
        else {
            return Ok(CommandOutcome::Continue);
        };
        let keep: Vec<&str> = subset
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let transformed = match sort_and_project(&contents, sort_column.trim(), &keep) {
            Ok(out) => out,
            Err(e) => {
                ctx.warn(e.to_string());
                return Ok(CommandOutcome::Continue);
            }
        };

        let Some(output_path) = ctx.read_line("Output CSV path: ") else {
            return Ok(CommandOutcome::Continue);
        };
        match fs::write(output_path.trim(), transformed) {
            Ok(()) => ctx.output(format!("Wrote {}.", output_path.trim())),
            Err(e) => ctx.warn(format!("Could not write {}: {e}", output_path.trim())),
        }
        Ok(CommandOutcome::Continue)
    }
}

/// Sort rows by `sort_column` and keep `keep` columns (all when empty),
/// in the order the subset lists them.
fn sort_and_project(contents: &str, sort_column: &str, keep: &[&str]) -> Result<String, CsvError> {
    let mut lines = contents.lines();
    let header_line = lines.next().ok_or(CsvError::Empty)?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();

    let sort_index = header
        .iter()
        .position(|name| *name == sort_column)
        .ok_or_else(|| CsvError::MissingColumn(sort_column.to_string()))?;

    let keep_indices: Vec<usize> = if keep.is_empty() {
        (0..header.len()).collect()
    } else {
        keep.iter()
            .map(|name| {
                header
                    .iter()
                    .position(|h| h == name)
                    .ok_or_else(|| CsvError::MissingColumn(name.to_string()))
            })
            .collect::<Result<_, _>>()?
    };

    let mut rows: Vec<Vec<&str>> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(str::trim).collect())
        .collect();
    rows.sort_by(|a, b| {
        let left = a.get(sort_index).copied().unwrap_or("");
        let right = b.get(sort_index).copied().unwrap_or("");
        compare_fields(left, right)
    });

    let mut out = String::new();
    let project = |row: &[&str], out: &mut String| {
        let fields: Vec<&str> = keep_indices
            .iter()
            .map(|&i| row.get(i).copied().unwrap_or(""))
            .collect();
        out.push_str(&fields.join(","));
        out.push('\n');
    };
    project(&header, &mut out);
    for row in &rows {
        project(row, &mut out);
    }
    Ok(out)
}

/// Numeric comparison when both fields parse, lexical otherwise.
fn compare_fields(left: &str, right: &str) -> Ordering {
    match (left.parse::<f64>(), right.parse::<f64>()) {
        (Ok(a), Ok(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
        _ => left.cmp(right),
    }
}
