//! lifeos binary - categorize goals, tasks and projects from the command line.

use clap::Parser;
use lifeos::cli::{render_error, run, Cli};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let format = cli.format;

    if let Err(e) = run(cli) {
        eprintln!("{}", render_error(&e, format));
        std::process::exit(1);
    }
}
