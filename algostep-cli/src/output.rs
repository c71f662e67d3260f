use std::io::{self, Write};

use algostep::Step;
use comfy_table::{presets, CellAlignment, Table};
use serde::Serialize;

use crate::app::GlobalOptions;

/// Write `data` to stdout as pretty JSON under `--json`, otherwise hand it to `render`.
pub fn emit<T: Serialize>(
    data: &T,
    opts: &GlobalOptions,
    render: impl FnOnce(&T),
) -> anyhow::Result<()> {
    if !opts.json {
        render(data);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, data)?;
    writeln!(stdout)?;
    Ok(())
}

/// Plain column listing used by `list` and the step dump of `run`.
///
/// Columns are separated by two spaces; numeric columns are right-aligned.
pub struct Listing {
    table: Table,
    indent: &'static str,
}

impl Listing {
    pub fn new(headers: &[&str]) -> Self {
        let mut table = Table::new();
        table.load_preset(presets::NOTHING).set_header(headers.to_vec());

        let last = headers.len().saturating_sub(1);
        for index in 0..headers.len() {
            if let Some(column) = table.column_mut(index) {
                column.set_padding((u16::from(index > 0), u16::from(index < last)));
            }
        }

        Self { table, indent: "" }
    }

    /// Header for one recorded step per row.
    pub fn steps() -> Self {
        Self::new(&["#", "Action", "Message"]).numeric(&[0])
    }

    pub fn numeric(mut self, columns: &[usize]) -> Self {
        for index in columns {
            if let Some(column) = self.table.column_mut(*index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        self
    }

    pub fn indented(mut self, indent: &'static str) -> Self {
        self.indent = indent;
        self
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.table
            .add_row(cells.into_iter().map(|cell| cell.to_string()).collect::<Vec<_>>());
    }

    pub fn step(&mut self, step: &Step) {
        self.row([
            step.index().to_string(),
            step.tag().to_string(),
            step.message().to_string(),
        ]);
    }

    pub fn render(&self) -> String {
        self.table
            .to_string()
            .lines()
            .map(|line| format!("{}{}\n", self.indent, line.trim_end()))
            .collect()
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

#[cfg(test)]
mod tests {
    use algostep::{presets, run, Algorithm, RunConfig};

    use super::*;

    #[test]
    fn test_listing_aligns_numeric_columns() {
        let mut listing = Listing::new(&["Name", "V"]).numeric(&[1]).indented("  ");
        listing.row(["dag", "9"]);
        listing.row(["classification", "12"]);

        let text = listing.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.starts_with("  ")));
        assert!(lines.iter().all(|line| !line.ends_with(' ')));
        assert!(lines[1].ends_with(" 9"));
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn test_step_rows() {
        let graph = presets::dag_example();
        let result = run(&graph, &RunConfig::new(Algorithm::TopologicalKahn)).unwrap();

        let mut listing = Listing::steps();
        for step in result.trace().steps() {
            listing.step(step);
        }

        let text = listing.render();
        assert_eq!(text.lines().count(), result.trace().len() + 1);
        let last = result.trace().last().unwrap();
        assert!(text.lines().last().unwrap().contains(last.tag()));
    }
}
