use crate::prelude::*;

use std::io::Write;
use std::path::Path;

/// Outcome of one run, as printed and as appended to the report file.
pub struct Report<'a> {
    pub input: &'a Path,
    pub solution: &'a Solution,
    pub elapsed: Duration,
}

impl<'a> Report<'a> {
    pub fn expansion_rate(&self) -> f64 {
        self.solution.stats.expanded as f64 / (self.elapsed.as_secs_f64() + 1e-8)
    }

    pub fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        let stats = &self.solution.stats;
        writeln!(out, "\nSolution = {}", self.solution.length)?;
        writeln!(out, "Generated = {}", with_commas(stats.generated))?;
        writeln!(out, "Expanded = {}", with_commas(stats.expanded))?;
        writeln!(out, "Time (seconds) = {:.2}", self.elapsed.as_secs_f64())?;
        writeln!(
            out,
            "Expanded/Second = {}\n",
            with_commas(self.expansion_rate() as u64)
        )
    }

    pub fn write_path(&self, out: &mut impl Write) -> std::io::Result<()> {
        let moves = self
            .solution
            .moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>();
        writeln!(out, "Path = {}", moves.join(" "))
    }

    pub fn log_entry(&self) -> String {
        let stats = &self.solution.stats;
        format!(
            "{}\n\tSolution = {}, Generated = {}, Expanded = {}, Time = {:.6}, Expanded/Second = {:.6}\n\n",
            self.input.display(),
            self.solution.length,
            stats.generated,
            stats.expanded,
            self.elapsed.as_secs_f64(),
            self.expansion_rate(),
        )
    }

    pub fn append_to(&self, path: &Path) -> anyhow::Result<()> {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        file.write_all(self.log_entry().as_bytes())?;
        Ok(())
    }
}

/// Prints a newly tried threshold immediately, ahead of the final summary.
pub fn write_threshold(out: &mut impl Write, threshold: u32) -> std::io::Result<()> {
    write!(out, "{} ", threshold)?;
    out.flush()
}

pub fn with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
