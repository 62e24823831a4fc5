use clap::Parser;

use sloc_delta::cli::{Cli, Commands};
use sloc_delta::commands::{log_level, run_compare, run_count, run_diff, run_wrap};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose, cli.quiet))
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let exit_code = match &cli.command {
        Commands::Compare(args) => run_compare(args, &cli),
        Commands::Count(args) => run_count(args, &cli),
        Commands::Diff(args) => run_diff(args, &cli),
        Commands::Wrap(args) => run_wrap(args, &cli),
    };

    std::process::exit(exit_code);
}
