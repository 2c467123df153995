use std::process::ExitCode;

fn main() -> ExitCode {
    textmend_lib::run_clean_command()
}
