// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use std::process;

use crate::cli::args::VisualizeArgs;
use crate::visualizer::visualize_dataset;
use crate::{error, success};

/// Run the annotation visualization subcommand.
pub fn run_visualize(args: &VisualizeArgs) {
    match visualize_dataset(&args.data_dir, &args.output_dir) {
        Ok(summary) => {
            println!();
            success!(
                "Visualization complete! {} images written, {} skipped",
                summary.processed,
                summary.skipped
            );
        }
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}
