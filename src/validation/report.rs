//! Violation report shared by every checker in a run.

use std::fmt;
use std::io::{self, Write};

/// Every violation recorded under one category message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViolationCategory {
    /// Category message, phrased to follow "the following"
    pub message: String,

    /// One entry per `record` call, in insertion order
    pub groups: Vec<Vec<String>>,
}

/// Aggregates violations by category until the run renders them
#[derive(Debug, Clone, Default)]
pub struct Report {
    categories: Vec<ViolationCategory>,
    count: usize,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one violation group under `category`.
    ///
    /// Groups are never merged or de-duplicated; recording the same details
    /// twice yields two groups. Callers only record non-empty details.
    pub fn record(&mut self, category: &str, details: Vec<String>) {
        self.count += 1;
        match self.categories.iter_mut().find(|c| c.message == category) {
            Some(existing) => existing.groups.push(details),
            None => self.categories.push(ViolationCategory {
                message: category.to_string(),
                groups: vec![details],
            }),
        }
    }

    /// Total number of `record` calls
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Category messages in first-recorded order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.message.as_str())
    }

    /// Groups recorded under `category`, empty if none were
    pub fn groups(&self, category: &str) -> &[Vec<String>] {
        self.categories
            .iter()
            .find(|c| c.message == category)
            .map(|c| c.groups.as_slice())
            .unwrap_or(&[])
    }

    /// Write the rendered report to `out`
    pub fn render_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Print the rendered report to stdout
    pub fn render(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.render_to(&mut handle)?;
        handle.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in &self.categories {
            writeln!(f, "\nFAIL: the following {}:", category.message)?;
            for group in &category.groups {
                writeln!(f, "\t{}", group.join("\n\t"))?;
            }
        }
        Ok(())
    }
}

/// Sort details the way every report lists them: case-insensitively, stable
pub fn sort_details<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut sorted: Vec<String> = items.into_iter().map(Into::into).collect();
    sorted.sort_by_key(|item| item.to_lowercase());
    sorted
}
