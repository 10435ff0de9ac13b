use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use slice_course::cat::read_and_print;

fn main() -> ExitCode {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: cat <path>");
        return ExitCode::from(2);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match read_and_print(&path, &mut out) {
        Ok(bytes) => {
            log::debug!("copied {bytes} bytes from {}", path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
