//! The demonstration programs, one module per chapter.

use std::io::{self, Write};

use thiserror::Error;

use crate::config::CourseConfig;
use crate::error::SliceError;
use crate::narrate::Narrator;

pub mod composite;
pub mod functions;
pub mod primitives;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("failed to write lesson output: {0}")]
    Io(#[from] io::Error),

    #[error("lesson hit a slice error: {0}")]
    Slice(#[from] SliceError),

    #[error("unknown chapter '{name}' (expected one of {})", CHAPTERS.join(", "))]
    UnknownChapter { name: String },
}

pub type LessonResult = Result<(), LessonError>;

pub const CHAPTERS: [&str; 3] = ["primitives", "composite", "functions"];

/// Runs one chapter by name. Unknown names are reported, not skipped.
pub fn run_chapter<W: Write>(
    name: &str,
    narrator: &mut Narrator<W>,
    config: &CourseConfig,
) -> LessonResult {
    let lesson: fn(&mut Narrator<W>, &CourseConfig) -> LessonResult = match name {
        "primitives" => primitives::run,
        "composite" => composite::run,
        "functions" => functions::run,
        other => {
            return Err(LessonError::UnknownChapter {
                name: other.to_string(),
            })
        }
    };

    log::debug!("running chapter {name}");
    narrator.blank()?;
    narrator.rule()?;
    narrator.blank()?;
    lesson(narrator, config)?;
    narrator.rule()?;
    Ok(())
}

pub fn run_all<W: Write>(narrator: &mut Narrator<W>, config: &CourseConfig) -> LessonResult {
    for name in CHAPTERS {
        run_chapter(name, narrator, config)?;
    }
    Ok(())
}

/// Runs the named chapter, or every chapter when no name is given.
pub fn run_selected<W: Write>(
    chapter: Option<&str>,
    narrator: &mut Narrator<W>,
    config: &CourseConfig,
) -> LessonResult {
    match chapter {
        Some(name) => run_chapter(name, narrator, config),
        None => run_all(narrator, config),
    }
}

#[cfg(test)]
pub(crate) fn render(f: impl FnOnce(&mut Narrator<Vec<u8>>) -> LessonResult) -> String {
    let mut narrator = Narrator::new(Vec::new(), false);
    f(&mut narrator).unwrap();
    String::from_utf8(narrator.into_inner()).unwrap()
}
