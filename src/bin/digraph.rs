use clap::Parser;
use colored::Colorize;
use digraph_core::cli::{self, Cli};
use digraph_core::exit::DigraphExit;
use tracing_subscriber::EnvFilter;

fn main() -> DigraphExit {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(cmd) = cli.command else {
        use clap::CommandFactory;
        let _ = Cli::command().print_help();
        return DigraphExit::Success;
    };

    let result = cli::dispatch::resolve_config(cli.config.as_deref())
        .and_then(|config| cli::dispatch::execute(cmd, &config));

    match result {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            DigraphExit::from_error(&e)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
