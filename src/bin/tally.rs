use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    tally_core::init();

    let result = match env::args().nth(1).as_deref() {
        None => tally_core::cli::run(),
        Some("dashboard") => tally_core::cli::run_dashboard(),
        Some(other) => {
            eprintln!("Unknown command `{other}`. Usage: tally [dashboard]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
