//! shapesum - Sum the areas of geometric shapes described in JSON

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = shapesum::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
