//! png-deinterlacer: smooth an interlaced PNG into a non-interlaced one

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = deinterlacer::parse_args(std::env::args_os())
        .and_then(|(input, output)| deinterlacer::run(input, output));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
