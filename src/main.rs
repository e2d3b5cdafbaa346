use std::process::ExitCode;

fn main() -> ExitCode {
    match refguard::cli::run() {
        Ok(code) => code,
        Err(err) => {
            refguard::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
