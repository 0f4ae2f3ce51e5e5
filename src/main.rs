// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use pose_dataset_tools::cli::args::{Cli, Commands};
use pose_dataset_tools::cli::{extract, visualize};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract => extract::run_extract(),
        Commands::Visualize(args) => visualize::run_visualize(&args),
    }
}
