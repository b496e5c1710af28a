use docgate::core::error::DocgateError;
use std::process::ExitCode;

fn main() -> ExitCode {
    match docgate::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Findings were already printed; the exit code carries the verdict.
        Err(DocgateError::ValidationFailed(_)) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
