use std::process::ExitCode;

fn main() -> ExitCode {
    pokedex_cli::run()
}
