//! Labeled output for the lessons.

use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;

pub const RULE_WIDTH: usize = 100;

pub struct Narrator<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Narrator<W> {
    pub fn new(out: W, color: bool) -> Self {
        Narrator { out, color }
    }

    pub fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }

    /// A title followed by a dashed underline of the same width.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        let heading = format!("{title}:");
        let underline = "-".repeat(heading.chars().count());
        if self.color {
            writeln!(self.out, "{}", heading.bold().cyan())?;
            writeln!(self.out, "{}", underline.dimmed())
        } else {
            writeln!(self.out, "{heading}")?;
            writeln!(self.out, "{underline}")
        }
    }

    /// `label = value`
    pub fn line(&mut self, label: &str, value: impl Display) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} = {}", label.yellow(), value)
        } else {
            writeln!(self.out, "{label} = {value}")
        }
    }

    pub fn text(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
