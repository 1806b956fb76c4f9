mod cli;
mod config;
mod paths;
mod run;

use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse();
    run::initialise_tracing();

    match run::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = run::exit_code(&err);
            tracing::error!(exit_code = code, "{err:#}");
            ExitCode::from(code)
        }
    }
}
