use std::process::ExitCode;

fn main() -> ExitCode {
    prism_cli::run()
}
