use std::io;
use std::process::ExitCode;

use colored::Colorize;
use slice_course::config::CourseConfig;
use slice_course::lessons;
use slice_course::narrate::Narrator;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let config = match CourseConfig::resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };
    log::debug!("course config: {config:?}");

    let chapter = std::env::args().nth(1);

    let stdout = io::stdout();
    let mut narrator = Narrator::new(stdout.lock(), config.use_color());
    match lessons::run_selected(chapter.as_deref(), &mut narrator, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
