use std::process::ExitCode;
use xcstrings_sync::{cli, reporting::Palette};

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let palette = Palette::for_stderr(cli::no_color_requested());
            eprintln!("{} {:#}", palette.alert("Error:"), e);
            ExitCode::FAILURE
        }
    }
}
