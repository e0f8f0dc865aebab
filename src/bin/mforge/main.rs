use std::process::ExitCode;

mod cli;
mod commands;
mod config;
mod display;
mod io;
mod logging;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    let ctx = display::Context::detect()
        .with_quiet(cli.io.quiet)
        .with_verbose(cli.io.verbose);

    if let Err(e) = logging::init(cli.io.verbose, cli.io.quiet) {
        display::print_error(&e);
        return ExitCode::FAILURE;
    }

    if ctx.interactive {
        display::print_banner();
    }

    match commands::run(cli, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}
