//! CLI entry point for the word-search generator

use clap::Parser;
use wordgrid::io::cli::{Cli, PuzzleRunner};
use wordgrid::io::logging::init_logger;

fn main() -> wordgrid::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);
    let runner = PuzzleRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
